//! Asynchronous byte and text readers.

use std::io;
use std::path::Path;

use filepeek_render_api::FileBuffer;
use tracing::trace;

/// Read a file's whole content into a [`FileBuffer`].
///
/// Single-shot: no partial or streamed reads. I/O errors propagate to the
/// caller unmodified, with no retry. Concurrent calls are independent, each
/// owning its own read operation.
pub async fn read_buffer(path: impl AsRef<Path>) -> io::Result<FileBuffer> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    trace!(path = %path.display(), len = bytes.len(), "read file into buffer");
    Ok(FileBuffer::from(bytes))
}

/// Decode a buffer as UTF-8 text.
///
/// Lossy: malformed sequences become replacement characters rather than
/// errors, so decoding itself never fails.
pub async fn read_text(buffer: &FileBuffer) -> String {
    String::from_utf8_lossy(buffer.as_bytes()).into_owned()
}
