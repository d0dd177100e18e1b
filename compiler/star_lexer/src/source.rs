//! Loading source bytes from files and strings.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use star_lexer_core::SourceBuffer;

use crate::LoadError;

/// Source name used for text loaded from memory.
pub const STRING_SOURCE_NAME: &str = "<string>";

/// A loaded buffer plus the name diagnostics refer to it by.
#[derive(Clone, Debug, Default)]
pub(crate) struct Source {
    pub(crate) buffer: SourceBuffer,
    pub(crate) name: String,
}

impl Source {
    pub(crate) fn from_bytes(bytes: &[u8], name: &str) -> Self {
        Self {
            buffer: SourceBuffer::from_bytes(bytes),
            name: name.to_owned(),
        }
    }

    pub(crate) fn from_file(path: &Path) -> Result<Self, LoadError> {
        let bytes = read_file(path)?;
        Ok(Self {
            buffer: SourceBuffer::from_vec(bytes),
            name: path.display().to_string(),
        })
    }
}

/// Read an entire file, checking the byte count against the file's
/// reported size.
fn read_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    let io_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_error)?;
    let expected = file.metadata().map_err(io_error)?.len();
    if expected > u64::from(u32::MAX) {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            len: expected,
        });
    }

    let mut bytes = Vec::with_capacity(usize::try_from(expected).unwrap_or_default());
    file.read_to_end(&mut bytes).map_err(io_error)?;

    let actual = bytes.len() as u64;
    if actual < expected {
        return Err(LoadError::ShortRead {
            path: path.to_path_buf(),
            expected,
            actual,
        });
    }
    Ok(bytes)
}
