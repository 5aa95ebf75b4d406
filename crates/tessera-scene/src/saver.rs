//! Scene export and saving

use crate::clean::clean;
use crate::document::SceneDocument;
use crate::format::SerializedDocument;
use std::fs;
use std::path::Path;
use tessera_core::Result;

/// Produce the cleaned envelope the engine reads
pub fn export_document(document: &SceneDocument) -> Result<SerializedDocument> {
    let objects = serde_json::to_value(document.objects())?;
    let static_components = serde_json::to_value(document.static_components())?;
    Ok(SerializedDocument {
        objects: clean(objects),
        static_components: clean(static_components),
        graphics: true,
    })
}

/// Write an exported envelope to a file
pub fn write_document<P: AsRef<Path>>(
    path: P,
    serialized: &SerializedDocument,
    pretty: bool,
) -> Result<()> {
    let path = path.as_ref();
    let content = serialized.to_json_string(pretty)?;
    fs::write(path, content)?;
    log::info!("Saved scene to {}", path.display());
    Ok(())
}

/// Export a document and write it to a file
pub fn save_document<P: AsRef<Path>>(
    path: P,
    document: &SceneDocument,
    pretty: bool,
) -> Result<()> {
    let serialized = export_document(document)?;
    write_document(path, &serialized, pretty)
}
