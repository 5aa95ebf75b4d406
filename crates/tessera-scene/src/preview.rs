//! Hand-off of a serialized scene to an external runner

use tessera_core::Result;

/// Something that can run a serialized scene: the engine, a subprocess, a test double.
pub trait PreviewHost {
    /// Start running the given cleaned JSON document
    fn start(&mut self, payload: &str) -> Result<()>;

    fn pause(&mut self) -> Result<()>;

    fn stop(&mut self) -> Result<()>;
}
