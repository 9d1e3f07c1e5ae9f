//! The root of a decoded replay.

use crate::body::{DebugEntry, Keyframe, Tickmark};
use crate::header::{BodyFrame, Header};
use crate::property::{Property, PropertyMap};

/// A fully decoded replay.
///
/// Produced once per decode call and never partially populated: a
/// decode either yields a complete document or an error.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplayDocument {
    /// Header record.
    pub header: Header,
    /// Top-level properties.
    pub properties: PropertyMap,
    /// Size/CRC prefix of the body, when the body was read length-framed.
    pub body_frame: Option<BodyFrame>,
    /// Level (map package) names.
    pub levels: Vec<String>,
    /// Seek table into the network data.
    pub keyframes: Vec<Keyframe>,
    /// Raw network stream. Kept opaque.
    pub network_data: Vec<u8>,
    /// Debug log entries.
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

impl ReplayDocument {
    /// Look up a top-level property by name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// Replay class name from the header.
    pub fn class_name(&self) -> &str {
        &self.header.class_name
    }
}
