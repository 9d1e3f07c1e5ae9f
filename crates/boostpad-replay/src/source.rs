//! Byte sources the decoder reads from.
//!
//! A source either holds the complete replay in memory or remembers why
//! it could not. The decoder checks [`ByteSource::error`] before reading
//! anything, so a missing file or buffer surfaces as
//! [`ReplayError::Source`](crate::ReplayError::Source) and decoding never
//! starts.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SourceError;

/// Provides the bytes of one replay.
pub trait ByteSource {
    /// Why the source could not be initialized, if it could not.
    fn error(&self) -> Option<&SourceError>;

    /// The buffered replay bytes. Empty when [`error`](Self::error) is set.
    fn bytes(&self) -> &[u8];
}

impl ByteSource for [u8] {
    fn error(&self) -> Option<&SourceError> {
        None
    }

    fn bytes(&self) -> &[u8] {
        self
    }
}

impl ByteSource for Vec<u8> {
    fn error(&self) -> Option<&SourceError> {
        None
    }

    fn bytes(&self) -> &[u8] {
        self
    }
}

/// An in-memory buffer, borrowed or owned.
///
/// # Examples
///
/// ```
/// use boostpad_replay::{ByteSource, BytesSource, SourceError};
///
/// let source = BytesSource::from_option(None);
/// assert_eq!(source.error(), Some(&SourceError::MissingBuffer));
///
/// let source = BytesSource::from_slice(&[1, 2, 3]);
/// assert!(source.error().is_none());
/// assert_eq!(source.bytes(), &[1, 2, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct BytesSource<'a> {
    data: Cow<'a, [u8]>,
    error: Option<SourceError>,
}

impl<'a> BytesSource<'a> {
    /// Borrow an existing buffer.
    pub fn from_slice(data: &'a [u8]) -> Self {
        Self {
            data: Cow::Borrowed(data),
            error: None,
        }
    }

    /// Take ownership of a buffer.
    pub fn from_vec(data: Vec<u8>) -> BytesSource<'static> {
        BytesSource {
            data: Cow::Owned(data),
            error: None,
        }
    }

    /// Wrap a buffer that may be absent. `None` is an initialization
    /// error.
    pub fn from_option(data: Option<&'a [u8]>) -> Self {
        match data {
            Some(data) => Self::from_slice(data),
            None => Self {
                data: Cow::Borrowed(&[]),
                error: Some(SourceError::MissingBuffer),
            },
        }
    }
}

impl ByteSource for BytesSource<'_> {
    fn error(&self) -> Option<&SourceError> {
        self.error.as_ref()
    }

    fn bytes(&self) -> &[u8] {
        &self.data
    }
}

/// A replay file read fully into memory when opened.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
    data: Vec<u8>,
    error: Option<SourceError>,
}

impl FileSource {
    /// Open and buffer `path`. Failures are kept and reported through
    /// [`ByteSource::error`].
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        match std::fs::read(&path) {
            Ok(data) => {
                debug!(path = %path.display(), len = data.len(), "buffered replay file");
                Self {
                    path,
                    data,
                    error: None,
                }
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "replay file unreadable");
                let error = SourceError::Unreadable {
                    path: path.clone(),
                    kind: e.kind(),
                    message: e.to_string(),
                };
                Self {
                    path,
                    data: Vec::new(),
                    error: Some(error),
                }
            }
        }
    }

    /// Path this source was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FileSource {
    fn error(&self) -> Option<&SourceError> {
        self.error.as_ref()
    }

    fn bytes(&self) -> &[u8] {
        &self.data
    }
}
