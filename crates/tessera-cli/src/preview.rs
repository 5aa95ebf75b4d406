//! Process-backed preview host

use crate::config::PreviewSection;
use std::io::Write;
use std::process::{Child, Command, ExitStatus, Stdio};
use tessera_core::{Result, TesseraError};
use tessera_scene::PreviewHost;

/// Runs the configured engine command, feeding it the scene on stdin
pub struct CommandPreview {
    config: PreviewSection,
    child: Option<Child>,
}

impl CommandPreview {
    pub fn new(config: PreviewSection) -> Self {
        Self { config, child: None }
    }

    /// Block until the running preview exits
    pub fn wait(&mut self) -> Result<Option<ExitStatus>> {
        match self.child.take() {
            Some(mut child) => child
                .wait()
                .map(Some)
                .map_err(|e| TesseraError::Preview(format!("failed to wait for preview: {}", e))),
            None => Ok(None),
        }
    }
}

fn build_command(argv: &[String], action: &str) -> Result<Command> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| TesseraError::Preview(format!("no {} command configured", action)))?;
    let mut command = Command::new(program);
    command.args(args);
    Ok(command)
}

fn run_to_completion(argv: &[String], action: &str) -> Result<()> {
    let status = build_command(argv, action)?
        .status()
        .map_err(|e| TesseraError::Preview(format!("failed to run {} command: {}", action, e)))?;
    if !status.success() {
        return Err(TesseraError::Preview(format!("{} command exited with {}", action, status)));
    }
    Ok(())
}

impl PreviewHost for CommandPreview {
    fn start(&mut self, payload: &str) -> Result<()> {
        if self.child.is_some() {
            return Err(TesseraError::Preview("a preview is already running".to_string()));
        }

        let mut child = build_command(&self.config.start, "start")?
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| TesseraError::Preview(format!("failed to spawn preview: {}", e)))?;

        // Dropping stdin closes the pipe so the engine sees end of input
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(payload.as_bytes())
                .map_err(|e| TesseraError::Preview(format!("failed to send scene: {}", e)))?;
        }

        log::info!("Preview started (pid {})", child.id());
        self.child = Some(child);
        Ok(())
    }

    /// Run the configured pause command. Works on a preview started by another process.
    fn pause(&mut self) -> Result<()> {
        run_to_completion(&self.config.pause, "pause")
    }

    /// Run the configured stop command, or kill the held child when none is set
    fn stop(&mut self) -> Result<()> {
        match self.child.as_mut() {
            Some(child) if self.config.stop.is_empty() => child
                .kill()
                .map_err(|e| TesseraError::Preview(format!("failed to stop preview: {}", e)))?,
            _ => run_to_completion(&self.config.stop, "stop")?,
        }

        if let Some(status) = self.wait()? {
            log::info!("Preview stopped ({})", status);
        }
        Ok(())
    }
}
