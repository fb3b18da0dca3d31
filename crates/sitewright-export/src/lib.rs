//! Export - packaging a project as a downloadable zip archive
//!
//! The archive carries the full ordered file sequence exactly as the
//! model holds it; edits are committed to the model as they happen, so
//! there is no separate "save" step before exporting.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use project_model::Project;

/// Errors that can occur while building an archive
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize the project's files into an in-memory zip archive
///
/// Entries appear in the project's insertion order. An empty project
/// yields a valid, empty archive.
pub fn archive_bytes(project: &Project) -> Result<Vec<u8>, ExportError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in project.files() {
        writer.start_file(file.name.as_str(), options)?;
        writer.write_all(file.content.as_bytes())?;
    }

    let cursor = writer.finish()?;
    log::debug!(
        "exported '{}': {} file(s), {} bytes",
        project.name(),
        project.len(),
        cursor.get_ref().len()
    );
    Ok(cursor.into_inner())
}

/// Download file name for a project's archive
///
/// The project name is sanitized to a safe ASCII subset so it can be
/// used verbatim in a Content-Disposition header.
pub fn archive_file_name(project: &Project) -> String {
    let sanitized: String = project
        .name()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{sanitized}.zip")
}
