//! Forward-only cursor and primitive readers.
//!
//! All integers are little-endian. Strings are prefixed with an `i32`
//! byte length and carry a trailing NUL terminator, which is stripped.
//! A read that runs past the end of the buffer consumes whatever was
//! left and fails with [`ReplayError::ShortRead`].

use tracing::trace;

use crate::error::{ReplayError, Section};

/// A fixed-width little-endian scalar.
pub trait LeScalar: Sized {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Decode from exactly [`Self::WIDTH`] bytes.
    fn from_le_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_le_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl LeScalar for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_le_bytes(buf)
                }
            }
        )*
    };
}

impl_le_scalar!(u8, i32, u32, f32, i64);

/// Sequential reader over an in-memory replay.
///
/// Offsets reported in errors are absolute: a cursor created by
/// [`Cursor::window`] keeps counting from its parent's position.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    base: usize,
}

impl<'a> Cursor<'a> {
    /// A cursor at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            base: 0,
        }
    }

    /// Absolute offset of the next byte to be read.
    pub fn position(&self) -> usize {
        self.base + self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Read exactly `n` bytes.
    pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8], ReplayError> {
        let remaining = self.remaining();
        if n > remaining {
            let offset = self.position();
            self.pos = self.data.len();
            return Err(ReplayError::ShortRead {
                offset,
                requested: n as i64,
                remaining,
            });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Take the next `n` bytes as a nested cursor that reports offsets
    /// relative to the start of the whole stream.
    pub fn window(&mut self, n: usize) -> Result<Cursor<'a>, ReplayError> {
        let base = self.position();
        let data = self.read_exact(n)?;
        Ok(Cursor { data, pos: 0, base })
    }

    /// Read any fixed-width little-endian scalar.
    pub fn read_scalar<T: LeScalar>(&mut self) -> Result<T, ReplayError> {
        let bytes = self.read_exact(T::WIDTH)?;
        Ok(T::from_le_slice(bytes))
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8, ReplayError> {
        self.read_scalar()
    }

    /// Read a single byte as a boolean (nonzero is `true`).
    pub fn read_bool(&mut self) -> Result<bool, ReplayError> {
        Ok(self.read_u8()? != 0)
    }

    /// Read a little-endian i32.
    pub fn read_i32_le(&mut self) -> Result<i32, ReplayError> {
        self.read_scalar()
    }

    /// Read a little-endian u32.
    pub fn read_u32_le(&mut self) -> Result<u32, ReplayError> {
        self.read_scalar()
    }

    /// Read a little-endian f32.
    pub fn read_f32_le(&mut self) -> Result<f32, ReplayError> {
        self.read_scalar()
    }

    /// Read a little-endian i64.
    pub fn read_i64_le(&mut self) -> Result<i64, ReplayError> {
        self.read_scalar()
    }

    /// Read a length-prefixed string, stripping trailing NUL bytes.
    ///
    /// NUL bytes inside the string are kept. Payloads that are not valid
    /// UTF-8 are decoded as Latin-1.
    pub fn read_length_prefixed_str(&mut self) -> Result<String, ReplayError> {
        let offset = self.position();
        let len = self.read_i32_le()?;
        if len < 0 {
            return Err(ReplayError::ShortRead {
                offset,
                requested: i64::from(len),
                remaining: self.remaining(),
            });
        }
        let bytes = self.read_exact(len as usize)?;
        Ok(decode_text(trim_trailing_nuls(bytes)))
    }

    /// Read a length-prefixed byte blob.
    pub fn read_length_prefixed_bytes(
        &mut self,
        section: Section,
    ) -> Result<&'a [u8], ReplayError> {
        let offset = self.position();
        let len = self.read_i32_le()?;
        if len < 0 {
            return Err(ReplayError::InvalidCount {
                section,
                count: i64::from(len),
                offset,
            });
        }
        self.read_exact(len as usize)
    }

    /// Read an `i32` entry count and check it before anything is
    /// allocated for it.
    ///
    /// Fails if the count is negative, above `limit`, or if `count`
    /// entries of at least `min_entry_len` bytes could not fit in what
    /// remains of the stream.
    pub fn read_count(
        &mut self,
        section: Section,
        min_entry_len: usize,
        limit: usize,
    ) -> Result<usize, ReplayError> {
        let offset = self.position();
        let raw = self.read_i32_le()?;
        let invalid = || ReplayError::InvalidCount {
            section,
            count: i64::from(raw),
            offset,
        };
        let count = usize::try_from(raw).map_err(|_| invalid())?;
        if count > limit {
            return Err(invalid());
        }
        let needed = count.checked_mul(min_entry_len).ok_or_else(invalid)?;
        if needed > self.remaining() {
            return Err(invalid());
        }
        Ok(count)
    }
}

/// Drop NUL bytes from the end of `bytes` only.
pub fn trim_trailing_nuls(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &bytes[..end]
}

fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        Err(_) => {
            trace!(len = bytes.len(), "string is not UTF-8, decoding as Latin-1");
            bytes.iter().map(|&b| char::from(b)).collect()
        }
    }
}
