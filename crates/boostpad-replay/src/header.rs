//! Header record decoding.
//!
//! ```text
//! [headerSize i32] [crc u32] [engineVersion u32] [licenseeVersion u32]
//! [netVersion u32, only if engine >= 868 && licensee >= 18]
//! [className string]
//! ```

use boostpad_core::Header;
use tracing::{debug, warn};

use crate::codec::{Cursor, LeScalar};
use crate::error::ReplayError;

/// Width of the fixed part of the header record.
pub const HEADER_FIXED_LEN: usize = 16;

/// Decode the header record, leaving the cursor at the first property.
pub fn decode_header(cursor: &mut Cursor<'_>) -> Result<Header, ReplayError> {
    let fixed = cursor.read_exact(HEADER_FIXED_LEN)?;
    let header_size = i32::from_le_slice(&fixed[0..4]);
    let crc = u32::from_le_slice(&fixed[4..8]);
    let engine_version = u32::from_le_slice(&fixed[8..12]);
    let licensee_version = u32::from_le_slice(&fixed[12..16]);

    let net_version = if Header::versions_carry_net_version(engine_version, licensee_version) {
        read_best_effort_u32(cursor, "net_version")
    } else {
        None
    };

    let class_name = cursor.read_length_prefixed_str()?;

    debug!(
        header_size,
        engine_version,
        licensee_version,
        ?net_version,
        class_name = %class_name,
        "decoded replay header"
    );

    Ok(Header {
        header_size,
        crc,
        engine_version,
        licensee_version,
        net_version,
        class_name,
    })
}

/// Read a u32 whose absence is tolerated.
///
/// Only the network version is read this way; every other field fails
/// the decode.
fn read_best_effort_u32(cursor: &mut Cursor<'_>, field: &'static str) -> Option<u32> {
    match cursor.read_u32_le() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(field, error = %e, "best-effort field unreadable, treating as 0");
            None
        }
    }
}
