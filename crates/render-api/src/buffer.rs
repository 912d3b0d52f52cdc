use std::fmt;
use std::sync::Arc;

/// Immutable raw byte content of a file.
///
/// The buffer carries no identity beyond its content. Clones share the same
/// allocation, so handing a buffer to several renderers is cheap.
#[derive(Clone)]
pub struct FileBuffer {
    bytes: Arc<[u8]>,
}

impl FileBuffer {
    /// Wrap raw bytes in a buffer.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into().into(),
        }
    }

    /// Borrow the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` when the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for FileBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for FileBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl AsRef<[u8]> for FileBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for FileBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileBuffer")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_content() {
        let buffer = FileBuffer::new(b"hello".to_vec());
        let clone = buffer.clone();
        assert_eq!(buffer.as_bytes(), clone.as_bytes());
        assert_eq!(buffer.len(), 5);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn empty_buffer() {
        let buffer = FileBuffer::new(Vec::new());
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
    }
}
