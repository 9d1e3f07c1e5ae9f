//! Boostpad: a decoder for Rocket League replay files.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the boostpad sub-crates. For most users, adding `boostpad` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use boostpad::prelude::*;
//!
//! let doc = decode(&FileSource::open("match.replay"))?;
//! println!("{} on {}", doc.class_name(), doc.levels.join(", "));
//!
//! if let Some(goals) = doc.property("Goals").and_then(|p| p.groups()) {
//!     for goal in goals {
//!         let who = goal.get("PlayerName").and_then(|p| p.as_str());
//!         println!("goal by {}", who.unwrap_or("?"));
//!     }
//! }
//! # Ok::<(), ReplayError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `boostpad-core` | Document model: header, properties, body records |
//! | [`replay`] | `boostpad-replay` | Sources, configuration, decoding, errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Document model (`boostpad-core`).
///
/// [`types::ReplayDocument`] and everything it contains:
/// [`types::Header`], [`types::PropertyMap`], [`types::Keyframe`], and
/// the other body records.
pub use boostpad_core as types;

/// Replay decoding (`boostpad-replay`).
///
/// [`replay::ReplayDecoder`] under a [`replay::DecoderConfig`], fed by a
/// [`replay::ByteSource`].
pub use boostpad_replay as replay;

/// Common imports for typical boostpad usage.
///
/// ```rust
/// use boostpad::prelude::*;
/// ```
pub mod prelude {
    // Document model
    pub use boostpad_core::{
        ByteValue, DebugEntry, Header, Keyframe, Property, PropertyGroup, PropertyKind,
        PropertyMap, PropertyValue, ReplayDocument, Tickmark,
    };

    // Decoding
    pub use boostpad_replay::{
        decode, decode_reader, BodyFraming, ByteSource, BytesSource, DecoderConfig, FileSource,
        ReplayDecoder, SentinelMatching, TagMatching,
    };

    // Errors
    pub use boostpad_replay::{ConfigError, ReplayError, Section, SourceError};
}
