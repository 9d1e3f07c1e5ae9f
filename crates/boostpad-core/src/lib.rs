//! Document model for decoded boostpad replays.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the in-memory shape of a decoded replay: the [`Header`], the
//! self-describing [`Property`] tree, and the fixed body sections
//! ([`Keyframe`], [`DebugEntry`], [`Tickmark`]), all owned by a
//! [`ReplayDocument`].
//!
//! Nothing here performs I/O. Decoding lives in `boostpad-replay`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod body;
pub mod document;
pub mod header;
pub mod property;

pub use body::{DebugEntry, Keyframe, Tickmark};
pub use document::ReplayDocument;
pub use header::{BodyFrame, Header, NET_VERSION_MIN_ENGINE, NET_VERSION_MIN_LICENSEE};
pub use property::{
    ByteValue, Property, PropertyGroup, PropertyKind, PropertyMap, PropertyValue,
    BYTE_VALUE_SEPARATOR, SENTINEL_NAME,
};
