//! Test utilities and replay fixtures for boostpad development.
//!
//! Provides little-endian wire writers mirroring the decoder's primitive
//! readers, and fixture builders ([`HeaderFixture`],
//! [`PropertyListBuilder`], [`BodyFixture`], [`ReplayBuilder`]) that
//! produce replay bytes for tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{BodyFixture, HeaderFixture, PropertyListBuilder, ReplayBuilder};

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(buf: &mut Vec<u8>, v: u8) {
    buf.push(v);
}

/// Write a little-endian i32.
pub fn write_i32_le(buf: &mut Vec<u8>, v: i32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

/// Write a little-endian u32.
pub fn write_u32_le(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

/// Write a little-endian f32.
pub fn write_f32_le(buf: &mut Vec<u8>, v: f32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

/// Write a little-endian i64.
pub fn write_i64_le(buf: &mut Vec<u8>, v: i64) {
    buf.extend_from_slice(&v.to_le_bytes());
}

/// Write a string the way replays store it: `i32` length including a
/// trailing NUL, the bytes, then the NUL.
pub fn write_str(buf: &mut Vec<u8>, s: &str) {
    write_i32_le(buf, s.len() as i32 + 1);
    buf.extend_from_slice(s.as_bytes());
    buf.push(0);
}

/// Write an `i32`-length-prefixed payload verbatim (no NUL added).
pub fn write_length_prefixed_bytes(buf: &mut Vec<u8>, b: &[u8]) {
    write_i32_le(buf, b.len() as i32);
    buf.extend_from_slice(b);
}

/// Write an `i32`-counted list of strings.
pub fn write_str_list(buf: &mut Vec<u8>, items: &[String]) {
    write_i32_le(buf, items.len() as i32);
    for item in items {
        write_str(buf, item);
    }
}
