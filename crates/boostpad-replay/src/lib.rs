//! Binary decoder for boostpad replay files.
//!
//! Turns a replay byte stream into a [`ReplayDocument`]: the header
//! record, the self-describing property tree, and the fixed body
//! sections. Decoding is a single forward pass over an in-memory buffer;
//! the first error aborts it and no partial document is returned.
//!
//! # Architecture
//!
//! - [`ByteSource`] supplies the bytes ([`BytesSource`], [`FileSource`])
//! - [`codec::Cursor`] reads little-endian scalars and length-prefixed strings
//! - [`header`], [`property`], and [`body`] decode the three stages
//! - [`ReplayDecoder`] runs the stages under a [`DecoderConfig`]
//!
//! # Format
//!
//! ```text
//! [Header] [PropertyList ... "None"] [Body]
//! ```
//!
//! Array-typed properties nest further property lists; each is closed
//! by its own `"None"` sentinel.
//!
//! # Examples
//!
//! ```
//! use boostpad_replay::{decode, BytesSource, ReplayError};
//!
//! let err = decode(&BytesSource::from_option(None)).unwrap_err();
//! assert!(matches!(err, ReplayError::Source(_)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod body;
pub mod codec;
pub mod config;
pub mod decoder;
pub mod error;
pub mod header;
pub mod property;
pub mod source;
pub mod tag;

pub use body::BodySections;
pub use config::{BodyFraming, ConfigError, DecoderConfig, SentinelMatching, TagMatching};
pub use decoder::{decode, decode_reader, ReplayDecoder};
pub use error::{ReplayError, Section, SourceError};
pub use source::{ByteSource, BytesSource, FileSource};

pub use boostpad_core::ReplayDocument;
