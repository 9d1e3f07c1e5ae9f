//! Whole-document decoding.
//!
//! [`ReplayDecoder`] runs the three stages (header, property tree, body)
//! over one forward cursor and assembles the [`ReplayDocument`]. Nothing
//! is returned until every stage has succeeded.

use std::io::Read;

use boostpad_core::ReplayDocument;
use tracing::debug;

use crate::body::decode_body;
use crate::codec::Cursor;
use crate::config::DecoderConfig;
use crate::error::ReplayError;
use crate::header::decode_header;
use crate::property::decode_properties;
use crate::source::ByteSource;

/// Decodes replays with a fixed configuration.
///
/// Holds no per-decode state, so one decoder can be shared across
/// threads and reused for any number of replays.
///
/// # Examples
///
/// ```
/// use boostpad_replay::{DecoderConfig, ReplayDecoder, TagMatching};
///
/// let decoder = ReplayDecoder::new(DecoderConfig {
///     tag_matching: TagMatching::Strict,
///     ..DecoderConfig::default()
/// })
/// .unwrap();
///
/// // A header with no class name is rejected.
/// assert!(decoder.decode_bytes(&[0u8; 16]).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReplayDecoder {
    config: DecoderConfig,
}

impl ReplayDecoder {
    /// Build a decoder, validating the configuration.
    ///
    /// An invalid configuration is reported as [`ReplayError::Config`].
    pub fn new(config: DecoderConfig) -> Result<Self, ReplayError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a replay from a byte source.
    pub fn decode<S: ByteSource + ?Sized>(&self, source: &S) -> Result<ReplayDocument, ReplayError> {
        if let Some(e) = source.error() {
            return Err(ReplayError::Source(e.clone()));
        }
        self.decode_bytes(source.bytes())
    }

    /// Decode a replay held in memory.
    pub fn decode_bytes(&self, data: &[u8]) -> Result<ReplayDocument, ReplayError> {
        let mut cursor = Cursor::new(data);

        let header = decode_header(&mut cursor)?;
        let properties = decode_properties(&mut cursor, &self.config)?;
        debug!(
            count = properties.len(),
            offset = cursor.position(),
            "decoded property tree"
        );
        let (body_frame, body) = decode_body(&mut cursor, &self.config)?;

        if !cursor.is_empty() {
            debug!(unread = cursor.remaining(), "bytes left after body sections");
        }

        Ok(ReplayDocument {
            header,
            properties,
            body_frame,
            levels: body.levels,
            keyframes: body.keyframes,
            network_data: body.network_data,
            debug_entries: body.debug_entries,
            tickmarks: body.tickmarks,
            packages: body.packages,
            objects: body.objects,
            names: body.names,
        })
    }

    /// Buffer everything `reader` yields, then decode it.
    pub fn decode_reader<R: Read>(&self, mut reader: R) -> Result<ReplayDocument, ReplayError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.decode_bytes(&data)
    }
}

/// Decode a replay with the default configuration.
pub fn decode<S: ByteSource + ?Sized>(source: &S) -> Result<ReplayDocument, ReplayError> {
    ReplayDecoder::default().decode(source)
}

/// Decode a replay from any reader with the default configuration.
pub fn decode_reader<R: Read>(reader: R) -> Result<ReplayDocument, ReplayError> {
    ReplayDecoder::default().decode_reader(reader)
}
