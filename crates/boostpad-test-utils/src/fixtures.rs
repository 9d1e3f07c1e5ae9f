//! Replay fixture builders.
//!
//! - [`HeaderFixture`]: the header record, net version written verbatim.
//! - [`PropertyListBuilder`]: a property list, closed by `"None"` on finish.
//! - [`BodyFixture`]: the eight body sections, inline or framed.
//! - [`ReplayBuilder`]: all three, concatenated.

use boostpad_core::{DebugEntry, Keyframe, Tickmark, SENTINEL_NAME};

use crate::{
    write_f32_le, write_i32_le, write_i64_le, write_length_prefixed_bytes, write_str,
    write_str_list, write_u32_le, write_u8,
};

/// Header record contents.
///
/// `net_version` is written whenever it is `Some`, regardless of whether
/// the versions gate it in, so tests can build inconsistent headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderFixture {
    pub header_size: i32,
    pub crc: u32,
    pub engine_version: u32,
    pub licensee_version: u32,
    pub net_version: Option<u32>,
    pub class_name: String,
}

impl HeaderFixture {
    /// A header with the given versions and no net version.
    pub fn with_versions(engine_version: u32, licensee_version: u32) -> Self {
        Self {
            engine_version,
            licensee_version,
            ..Self::default()
        }
    }

    /// Set the net version to write.
    pub fn with_net_version(mut self, net_version: u32) -> Self {
        self.net_version = Some(net_version);
        self
    }

    pub fn encode(&self, buf: &mut Vec<u8>) {
        write_i32_le(buf, self.header_size);
        write_u32_le(buf, self.crc);
        write_u32_le(buf, self.engine_version);
        write_u32_le(buf, self.licensee_version);
        if let Some(v) = self.net_version {
            write_u32_le(buf, v);
        }
        write_str(buf, &self.class_name);
    }
}

impl Default for HeaderFixture {
    fn default() -> Self {
        Self {
            header_size: 4096,
            crc: 0,
            engine_version: 868,
            licensee_version: 12,
            net_version: None,
            class_name: "TAGame.Replay_Soccar_TA".to_string(),
        }
    }
}

/// Builds an encoded property list.
///
/// Each record carries the real byte length of its value in the declared
/// length field and zero in the reserved field.
#[derive(Clone, Debug, Default)]
pub struct PropertyListBuilder {
    buf: Vec<u8>,
}

impl PropertyListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record with an arbitrary tag and pre-encoded value.
    pub fn raw(mut self, name: &str, tag: &str, value: &[u8]) -> Self {
        write_str(&mut self.buf, name);
        write_str(&mut self.buf, tag);
        write_u32_le(&mut self.buf, value.len() as u32);
        write_u32_le(&mut self.buf, 0);
        self.buf.extend_from_slice(value);
        self
    }

    pub fn int(self, name: &str, v: i32) -> Self {
        let mut value = Vec::new();
        write_i32_le(&mut value, v);
        self.raw(name, "IntProperty", &value)
    }

    pub fn str(self, name: &str, v: &str) -> Self {
        let mut value = Vec::new();
        write_str(&mut value, v);
        self.raw(name, "StrProperty", &value)
    }

    pub fn name(self, name: &str, v: &str) -> Self {
        let mut value = Vec::new();
        write_str(&mut value, v);
        self.raw(name, "NameProperty", &value)
    }

    pub fn float(self, name: &str, v: f32) -> Self {
        let mut value = Vec::new();
        write_f32_le(&mut value, v);
        self.raw(name, "FloatProperty", &value)
    }

    pub fn byte(self, name: &str, enum_type: &str, v: &str) -> Self {
        let mut value = Vec::new();
        write_str(&mut value, enum_type);
        write_str(&mut value, v);
        self.raw(name, "ByteProperty", &value)
    }

    pub fn bool(self, name: &str, v: bool) -> Self {
        let mut value = Vec::new();
        write_u8(&mut value, u8::from(v));
        self.raw(name, "BoolProperty", &value)
    }

    pub fn qword(self, name: &str, v: i64) -> Self {
        let mut value = Vec::new();
        write_i64_le(&mut value, v);
        self.raw(name, "QWordProperty", &value)
    }

    /// Append an array property; each group is closed with its own
    /// sentinel.
    pub fn array(self, name: &str, groups: Vec<PropertyListBuilder>) -> Self {
        let mut value = Vec::new();
        write_i32_le(&mut value, groups.len() as i32);
        for group in groups {
            value.extend(group.finish());
        }
        self.raw(name, "ArrayProperty", &value)
    }

    /// Close the list with the `"None"` sentinel.
    pub fn finish(mut self) -> Vec<u8> {
        write_str(&mut self.buf, SENTINEL_NAME);
        self.buf
    }

    /// The records without a closing sentinel.
    pub fn finish_unterminated(self) -> Vec<u8> {
        self.buf
    }
}

/// Body section contents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BodyFixture {
    pub levels: Vec<String>,
    pub keyframes: Vec<Keyframe>,
    pub network_data: Vec<u8>,
    pub debug_entries: Vec<DebugEntry>,
    pub tickmarks: Vec<Tickmark>,
    pub packages: Vec<String>,
    pub objects: Vec<String>,
    pub names: Vec<String>,
}

impl BodyFixture {
    /// Encode the sections back to back.
    pub fn encode(&self, buf: &mut Vec<u8>) {
        write_str_list(buf, &self.levels);

        write_i32_le(buf, self.keyframes.len() as i32);
        for kf in &self.keyframes {
            write_f32_le(buf, kf.time);
            write_i32_le(buf, kf.frame);
            write_i32_le(buf, kf.position);
        }

        write_length_prefixed_bytes(buf, &self.network_data);

        write_i32_le(buf, self.debug_entries.len() as i32);
        for entry in &self.debug_entries {
            write_i32_le(buf, entry.frame);
            write_str(buf, &entry.user);
            write_str(buf, &entry.text);
        }

        write_i32_le(buf, self.tickmarks.len() as i32);
        for mark in &self.tickmarks {
            write_str(buf, &mark.description);
            write_i32_le(buf, mark.frame);
        }

        write_str_list(buf, &self.packages);
        write_str_list(buf, &self.objects);
        write_str_list(buf, &self.names);
    }

    /// Encode the sections behind an `i32` size and the given CRC.
    pub fn encode_framed(&self, buf: &mut Vec<u8>, crc: u32) {
        let mut body = Vec::new();
        self.encode(&mut body);
        write_i32_le(buf, body.len() as i32);
        write_u32_le(buf, crc);
        buf.extend(body);
    }
}

/// A complete replay: header, properties, body.
#[derive(Clone, Debug, Default)]
pub struct ReplayBuilder {
    header: HeaderFixture,
    properties: PropertyListBuilder,
    body: BodyFixture,
    body_crc: Option<u32>,
}

impl ReplayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: HeaderFixture) -> Self {
        self.header = header;
        self
    }

    pub fn properties(mut self, properties: PropertyListBuilder) -> Self {
        self.properties = properties;
        self
    }

    pub fn body(mut self, body: BodyFixture) -> Self {
        self.body = body;
        self
    }

    /// Prefix the body with a size and this CRC.
    pub fn framed_body(mut self, crc: u32) -> Self {
        self.body_crc = Some(crc);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.header.encode(&mut buf);
        buf.extend(self.properties.clone().finish());
        match self.body_crc {
            Some(crc) => self.body.encode_framed(&mut buf, crc),
            None => self.body.encode(&mut buf),
        }
        buf
    }
}
