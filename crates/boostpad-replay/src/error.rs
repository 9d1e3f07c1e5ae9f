//! Error types for replay decoding.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Which counted section a count or length field belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    /// Group count of an array property.
    PropertyGroups,
    /// Size of a length-framed body.
    Body,
    /// Level name list.
    Levels,
    /// Keyframe list.
    Keyframes,
    /// Network data blob length.
    NetworkData,
    /// Debug entry list.
    DebugEntries,
    /// Tickmark list.
    Tickmarks,
    /// Package name list.
    Packages,
    /// Object name list.
    Objects,
    /// Name table.
    Names,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PropertyGroups => "property group",
            Self::Body => "body size",
            Self::Levels => "level",
            Self::Keyframes => "keyframe",
            Self::NetworkData => "network data length",
            Self::DebugEntries => "debug entry",
            Self::Tickmarks => "tickmark",
            Self::Packages => "package",
            Self::Objects => "object",
            Self::Names => "name",
        };
        f.write_str(name)
    }
}

/// Reasons a byte source could not provide data.
///
/// Held by the source and surfaced before decoding begins.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// No buffer was supplied.
    #[error("no byte buffer supplied")]
    MissingBuffer,
    /// The backing file could not be opened or read.
    #[error("cannot read {}: {message}", .path.display())]
    Unreadable {
        /// Path that failed.
        path: PathBuf,
        /// I/O error kind reported by the OS.
        kind: io::ErrorKind,
        /// Rendered I/O error.
        message: String,
    },
}

/// Errors that abort a decode.
///
/// Every error is fatal for the decode call that produced it; no partial
/// document is ever returned alongside one.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The byte source failed to initialize.
    #[error("byte source unavailable: {0}")]
    Source(#[from] SourceError),
    /// Reading from a `Read` implementation failed before decoding.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Fewer bytes remained than a read required, or a string length
    /// was negative.
    #[error("short read at offset {offset}: requested {requested} bytes, {remaining} remaining")]
    ShortRead {
        /// Offset where the read started.
        offset: usize,
        /// Bytes requested (negative for a negative string length).
        requested: i64,
        /// Bytes that were left in the stream.
        remaining: usize,
    },
    /// A property type tag did not resolve to a known value kind.
    #[error("unknown property type {tag:?} at offset {offset}")]
    UnknownPropertyType {
        /// The offending tag, verbatim.
        tag: String,
        /// Offset just past the tag's fixed fields.
        offset: usize,
    },
    /// A count or length field was negative, over the configured limit,
    /// or larger than the remaining bytes could hold.
    #[error("invalid {section} count {count} at offset {offset}")]
    InvalidCount {
        /// Section the count belongs to.
        section: Section,
        /// The value read.
        count: i64,
        /// Offset of the count field.
        offset: usize,
    },
    /// Array properties nested deeper than the configured limit.
    #[error("property groups nested {depth} levels deep (limit {limit}) at offset {offset}")]
    DepthExceeded {
        /// Depth the offending group would have been decoded at.
        depth: usize,
        /// Configured maximum depth.
        limit: usize,
        /// Offset of the offending group count.
        offset: usize,
    },
    /// The decoder configuration was rejected.
    #[error("invalid decoder configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ReplayError {
    /// Whether this error came from running out of input.
    pub fn is_short_read(&self) -> bool {
        matches!(self, Self::ShortRead { .. })
    }
}
