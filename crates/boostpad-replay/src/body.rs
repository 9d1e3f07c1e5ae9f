//! Body section decoding.
//!
//! The body follows the property tree in a fixed order:
//!
//! ```text
//! levels      i32 count, string * count
//! keyframes   i32 count, { time f32, frame i32, position i32 } * count
//! network     i32 length, u8 * length
//! debug       i32 count, { frame i32, user string, text string } * count
//! tickmarks   i32 count, { description string, frame i32 } * count
//! packages    i32 count, string * count
//! objects     i32 count, string * count
//! names       i32 count, string * count
//! ```
//!
//! With [`BodyFraming::LengthPrefixed`] the whole sequence is preceded by
//! an `i32` size and `u32` CRC, and decoded inside that many bytes.

use boostpad_core::{BodyFrame, DebugEntry, Keyframe, Tickmark};
use tracing::debug;

use crate::codec::Cursor;
use crate::config::{BodyFraming, DecoderConfig};
use crate::error::{ReplayError, Section};

const MIN_STRING_LEN: usize = 4;
const KEYFRAME_LEN: usize = 12;
const MIN_DEBUG_ENTRY_LEN: usize = 12;
const MIN_TICKMARK_LEN: usize = 8;

/// Everything after the property tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BodySections {
    /// Level names.
    pub levels: Vec<String>,
    /// Seek table.
    pub keyframes: Vec<Keyframe>,
    /// Opaque network stream.
    pub network_data: Vec<u8>,
    /// Debug log.
    pub debug_entries: Vec<DebugEntry>,
    /// Timeline markers.
    pub tickmarks: Vec<Tickmark>,
    /// Package names.
    pub packages: Vec<String>,
    /// Object names.
    pub objects: Vec<String>,
    /// Name table.
    pub names: Vec<String>,
}

/// Decode the body using the configured framing.
pub fn decode_body(
    cursor: &mut Cursor<'_>,
    config: &DecoderConfig,
) -> Result<(Option<BodyFrame>, BodySections), ReplayError> {
    match config.body_framing {
        BodyFraming::Inline => Ok((None, decode_sections(cursor, config)?)),
        BodyFraming::LengthPrefixed => {
            let offset = cursor.position();
            let size = cursor.read_i32_le()?;
            let crc = cursor.read_u32_le()?;
            let len = usize::try_from(size).map_err(|_| ReplayError::InvalidCount {
                section: Section::Body,
                count: i64::from(size),
                offset,
            })?;
            debug!(size, crc, "read body frame");

            let mut window = cursor.window(len)?;
            let sections = decode_sections(&mut window, config)?;
            if !window.is_empty() {
                debug!(unread = window.remaining(), "body frame has trailing bytes");
            }
            Ok((Some(BodyFrame { size, crc }), sections))
        }
    }
}

/// Decode the eight body sections in order.
pub fn decode_sections(
    cursor: &mut Cursor<'_>,
    config: &DecoderConfig,
) -> Result<BodySections, ReplayError> {
    let limit = config.max_collection_len;

    let levels = decode_string_list(cursor, Section::Levels, limit)?;
    let keyframes = decode_keyframes(cursor, limit)?;
    let network_data = cursor
        .read_length_prefixed_bytes(Section::NetworkData)?
        .to_vec();
    let debug_entries = decode_debug_entries(cursor, limit)?;
    let tickmarks = decode_tickmarks(cursor, limit)?;
    let packages = decode_string_list(cursor, Section::Packages, limit)?;
    let objects = decode_string_list(cursor, Section::Objects, limit)?;
    let names = decode_string_list(cursor, Section::Names, limit)?;

    debug!(
        levels = levels.len(),
        keyframes = keyframes.len(),
        network_bytes = network_data.len(),
        debug_entries = debug_entries.len(),
        tickmarks = tickmarks.len(),
        packages = packages.len(),
        objects = objects.len(),
        names = names.len(),
        "decoded body sections"
    );

    Ok(BodySections {
        levels,
        keyframes,
        network_data,
        debug_entries,
        tickmarks,
        packages,
        objects,
        names,
    })
}

/// Decode an `i32`-counted list of strings.
pub fn decode_string_list(
    cursor: &mut Cursor<'_>,
    section: Section,
    limit: usize,
) -> Result<Vec<String>, ReplayError> {
    let count = cursor.read_count(section, MIN_STRING_LEN, limit)?;
    let mut list = Vec::with_capacity(count);
    for _ in 0..count {
        list.push(cursor.read_length_prefixed_str()?);
    }
    Ok(list)
}

fn decode_keyframes(cursor: &mut Cursor<'_>, limit: usize) -> Result<Vec<Keyframe>, ReplayError> {
    let count = cursor.read_count(Section::Keyframes, KEYFRAME_LEN, limit)?;
    let mut keyframes = Vec::with_capacity(count);
    for _ in 0..count {
        keyframes.push(Keyframe {
            time: cursor.read_f32_le()?,
            frame: cursor.read_i32_le()?,
            position: cursor.read_i32_le()?,
        });
    }
    Ok(keyframes)
}

fn decode_debug_entries(
    cursor: &mut Cursor<'_>,
    limit: usize,
) -> Result<Vec<DebugEntry>, ReplayError> {
    let count = cursor.read_count(Section::DebugEntries, MIN_DEBUG_ENTRY_LEN, limit)?;
    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        entries.push(DebugEntry {
            frame: cursor.read_i32_le()?,
            user: cursor.read_length_prefixed_str()?,
            text: cursor.read_length_prefixed_str()?,
        });
    }
    Ok(entries)
}

fn decode_tickmarks(cursor: &mut Cursor<'_>, limit: usize) -> Result<Vec<Tickmark>, ReplayError> {
    let count = cursor.read_count(Section::Tickmarks, MIN_TICKMARK_LEN, limit)?;
    let mut tickmarks = Vec::with_capacity(count);
    for _ in 0..count {
        tickmarks.push(Tickmark {
            description: cursor.read_length_prefixed_str()?,
            frame: cursor.read_i32_le()?,
        });
    }
    Ok(tickmarks)
}
