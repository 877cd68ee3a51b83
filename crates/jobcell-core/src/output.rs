//! JSON rendering of the config document.

use std::io::Write;

use crate::document::ConfigDocument;
use crate::Result;

/// Encode `doc` as 2-space-indented JSON with a trailing newline.
pub fn to_json(doc: &ConfigDocument) -> Result<Vec<u8>> {
    let mut buf = serde_json::to_vec_pretty(doc)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Encode `doc` fully, then write it in one go.
///
/// Nothing reaches `writer` if encoding fails.
pub fn write_document(doc: &ConfigDocument, mut writer: impl Write) -> Result<()> {
    let buf = to_json(doc)?;
    writer.write_all(&buf)?;
    writer.flush()?;
    tracing::debug!(bytes = buf.len(), "wrote config document");
    Ok(())
}
