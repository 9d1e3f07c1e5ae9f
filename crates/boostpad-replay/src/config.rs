//! Decoder configuration and validation.
//!
//! [`DecoderConfig`] controls how tolerant the decoder is of tag and
//! sentinel variants, how much nesting and how many entries it accepts,
//! and whether the body is expected to carry a size/CRC frame.
//! [`validate()`](DecoderConfig::validate) is called by
//! [`ReplayDecoder::new`](crate::ReplayDecoder::new).

use thiserror::Error;

/// Default maximum nesting depth for array properties.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Default upper bound for any count field.
pub const DEFAULT_MAX_COLLECTION_LEN: usize = 1 << 24;

/// How property type tags are resolved to value kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagMatching {
    /// Only the canonical tags (`IntProperty`, `StrProperty`, ...) are
    /// accepted.
    Strict,
    /// Canonical tags first, then the kind markers (`Array`, `Int`,
    /// `Str`, `Name`, `Float`, `Byte`, `Bool`, `QWord`) by containment,
    /// in that order.
    #[default]
    Tolerant,
}

/// How the list-terminating `"None"` name is recognized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SentinelMatching {
    /// The name must be exactly `"None"`.
    #[default]
    Exact,
    /// Any name containing `"None"` terminates the list.
    Contains,
}

/// Whether the body sections are preceded by a size/CRC frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyFraming {
    /// Body sections follow the property tree directly.
    #[default]
    Inline,
    /// An `i32` size and `u32` CRC precede the body; sections are decoded
    /// inside that many bytes.
    LengthPrefixed,
}

/// Settings for [`ReplayDecoder`](crate::ReplayDecoder).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Maximum array nesting depth. Default: 32.
    pub max_depth: usize,
    /// Largest accepted value of any count field. Default: 2^24.
    pub max_collection_len: usize,
    /// Type tag resolution. Default: [`TagMatching::Tolerant`].
    pub tag_matching: TagMatching,
    /// Sentinel recognition. Default: [`SentinelMatching::Exact`].
    pub sentinel_matching: SentinelMatching,
    /// Body layout. Default: [`BodyFraming::Inline`].
    pub body_framing: BodyFraming,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_collection_len: DEFAULT_MAX_COLLECTION_LEN,
            tag_matching: TagMatching::default(),
            sentinel_matching: SentinelMatching::default(),
            body_framing: BodyFraming::default(),
        }
    }
}

impl DecoderConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if self.max_collection_len == 0 {
            return Err(ConfigError::ZeroCollectionLen);
        }
        Ok(())
    }
}

/// Errors detected by [`DecoderConfig::validate()`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_depth` is zero, which would reject every array property.
    #[error("max_depth must be at least 1")]
    ZeroDepth,
    /// `max_collection_len` is zero, which would reject every list.
    #[error("max_collection_len must be at least 1")]
    ZeroCollectionLen,
}
