//! Property tree and value decoding.
//!
//! ```text
//! PropertyList: { name string, tag string, declaredLen u32, reserved u32, value }*
//!               terminated by name == "None"
//! Array value:  groupCount i32, PropertyList * groupCount
//! ```
//!
//! The value layout is chosen by the type tag alone. The declared length
//! is recorded on the [`Property`] but never used to bound or skip the
//! value.

use boostpad_core::{ByteValue, Property, PropertyGroup, PropertyKind, PropertyMap, PropertyValue};
use tracing::trace;

use crate::codec::Cursor;
use crate::config::DecoderConfig;
use crate::error::{ReplayError, Section};
use crate::tag::{is_sentinel, resolve_tag};

/// Smallest possible encoded group: a length-prefixed `"None"`.
const MIN_GROUP_LEN: usize = 8;

/// Decode a top-level property list, leaving the cursor just past its
/// sentinel.
pub fn decode_properties(
    cursor: &mut Cursor<'_>,
    config: &DecoderConfig,
) -> Result<PropertyMap, ReplayError> {
    PropertyDecoder { config }.decode_list(cursor, 0)
}

/// Decode the value for an already-resolved scalar kind.
///
/// [`PropertyKind::Array`] is not a scalar and is reported as an unknown
/// type for `tag`.
pub fn decode_scalar(
    cursor: &mut Cursor<'_>,
    kind: PropertyKind,
    tag: &str,
) -> Result<PropertyValue, ReplayError> {
    let value = match kind {
        PropertyKind::Int => PropertyValue::Int(cursor.read_i32_le()?),
        PropertyKind::Str | PropertyKind::Name => {
            PropertyValue::Str(cursor.read_length_prefixed_str()?)
        }
        PropertyKind::Float => PropertyValue::Float(cursor.read_f32_le()?),
        PropertyKind::Byte => {
            let enum_type = cursor.read_length_prefixed_str()?;
            let value = cursor.read_length_prefixed_str()?;
            PropertyValue::Byte(ByteValue { enum_type, value })
        }
        PropertyKind::Bool => PropertyValue::Bool(cursor.read_bool()?),
        PropertyKind::QWord => PropertyValue::QWord(cursor.read_i64_le()?),
        PropertyKind::Array => {
            return Err(ReplayError::UnknownPropertyType {
                tag: tag.to_owned(),
                offset: cursor.position(),
            })
        }
    };
    Ok(value)
}

struct PropertyDecoder<'c> {
    config: &'c DecoderConfig,
}

impl PropertyDecoder<'_> {
    fn decode_list(&self, cursor: &mut Cursor<'_>, depth: usize) -> Result<PropertyMap, ReplayError> {
        let mut properties = PropertyMap::new();
        while let Some(property) = self.decode_property(cursor, depth)? {
            if let Some(old) = properties.insert(property) {
                trace!(name = %old.name, "duplicate property name, keeping the later value");
            }
        }
        Ok(properties)
    }

    /// Decode one record, or `None` at the sentinel.
    fn decode_property(
        &self,
        cursor: &mut Cursor<'_>,
        depth: usize,
    ) -> Result<Option<Property>, ReplayError> {
        let name = cursor.read_length_prefixed_str()?;
        if is_sentinel(&name, self.config.sentinel_matching) {
            return Ok(None);
        }

        let tag = cursor.read_length_prefixed_str()?;
        let declared_len = cursor.read_u32_le()?;
        let reserved = cursor.read_u32_le()?;

        let kind = resolve_tag(&tag, self.config.tag_matching).ok_or_else(|| {
            ReplayError::UnknownPropertyType {
                tag: tag.clone(),
                offset: cursor.position(),
            }
        })?;

        let value = match kind {
            PropertyKind::Array => PropertyValue::Array(self.decode_groups(cursor, depth + 1)?),
            scalar => decode_scalar(cursor, scalar, &tag)?,
        };

        trace!(name = %name, tag = %tag, depth, "decoded property");

        Ok(Some(Property {
            name,
            tag,
            declared_len,
            reserved,
            value,
        }))
    }

    fn decode_groups(
        &self,
        cursor: &mut Cursor<'_>,
        depth: usize,
    ) -> Result<Vec<PropertyGroup>, ReplayError> {
        if depth > self.config.max_depth {
            return Err(ReplayError::DepthExceeded {
                depth,
                limit: self.config.max_depth,
                offset: cursor.position(),
            });
        }

        let count = cursor.read_count(
            Section::PropertyGroups,
            MIN_GROUP_LEN,
            self.config.max_collection_len,
        )?;

        let mut groups = Vec::with_capacity(count);
        for _ in 0..count {
            groups.push(self.decode_list(cursor, depth)?);
        }
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SentinelMatching, TagMatching};
    use boostpad_test_utils::{write_i32_le, write_str, write_u32_le, PropertyListBuilder};
    use proptest::prelude::*;

    fn decode(buf: &[u8]) -> Result<PropertyMap, ReplayError> {
        decode_properties(&mut Cursor::new(buf), &DecoderConfig::default())
    }

    /// One property record with the given tag and value bytes, unterminated.
    fn record(name: &str, tag: &str, value: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        write_str(&mut buf, name);
        write_str(&mut buf, tag);
        write_u32_le(&mut buf, value.len() as u32);
        write_u32_le(&mut buf, 0);
        buf.extend_from_slice(value);
        buf
    }

    #[test]
    fn empty_list_is_just_the_sentinel() {
        let buf = PropertyListBuilder::new().finish();
        let mut cursor = Cursor::new(&buf);
        let props = decode_properties(&mut cursor, &DecoderConfig::default()).unwrap();
        assert!(props.is_empty());
        assert!(cursor.is_empty());
    }

    #[test]
    fn every_scalar_tag_decodes_to_its_value() {
        let buf = PropertyListBuilder::new()
            .int("TeamSize", 3)
            .str("ReplayName", "Final")
            .name("MapName", "Stadium_P")
            .float("RecordFPS", 30.0)
            .byte("Platform", "OnlinePlatform", "OnlinePlatform_Steam")
            .bool("bMatchEnded", true)
            .qword("OnlineID", 76_561_198_000_000_000)
            .finish();

        let props = decode(&buf).unwrap();
        assert_eq!(props.len(), 7);
        assert_eq!(props["TeamSize"].as_int(), Some(3));
        assert_eq!(props["ReplayName"].as_str(), Some("Final"));
        assert_eq!(props["MapName"].as_str(), Some("Stadium_P"));
        assert_eq!(props["MapName"].tag, "NameProperty");
        assert_eq!(props["RecordFPS"].as_float(), Some(30.0));
        assert_eq!(
            props["Platform"].value.to_string(),
            "OnlinePlatform|OnlinePlatform_Steam"
        );
        assert_eq!(props["bMatchEnded"].as_bool(), Some(true));
        assert_eq!(props["OnlineID"].as_qword(), Some(76_561_198_000_000_000));
    }

    #[test]
    fn scalar_values_consume_exactly_their_width() {
        let cases: [(&str, Vec<u8>); 4] = [
            ("IntProperty", 5i32.to_le_bytes().to_vec()),
            ("FloatProperty", 2.5f32.to_le_bytes().to_vec()),
            ("BoolProperty", vec![1]),
            ("QWordProperty", 9i64.to_le_bytes().to_vec()),
        ];
        for (tag, value) in cases {
            let rec = record("p", tag, &value);
            let mut cursor = Cursor::new(&rec);
            let config = DecoderConfig::default();
            let property = PropertyDecoder { config: &config }
                .decode_property(&mut cursor, 0)
                .unwrap()
                .unwrap();
            assert!(cursor.is_empty(), "{tag} left {} bytes", cursor.remaining());
            assert_eq!(property.declared_len as usize, value.len());
        }
    }

    #[test]
    fn bool_is_any_nonzero_byte() {
        let mut buf = record("a", "BoolProperty", &[0]);
        buf.extend(record("b", "BoolProperty", &[2]));
        write_str(&mut buf, "None");
        let props = decode(&buf).unwrap();
        assert_eq!(props["a"].as_bool(), Some(false));
        assert_eq!(props["b"].as_bool(), Some(true));
    }

    #[test]
    fn unknown_tag_stops_after_the_fixed_fields() {
        let mut buf = record("Gadget", "WidgetProperty", &[]);
        let tail_start = buf.len();
        buf.extend_from_slice(&[0xAA; 8]);

        let mut cursor = Cursor::new(&buf);
        let err = decode_properties(&mut cursor, &DecoderConfig::default()).unwrap_err();
        match err {
            ReplayError::UnknownPropertyType { tag, offset } => {
                assert_eq!(tag, "WidgetProperty");
                assert_eq!(offset, tail_start);
            }
            other => panic!("expected unknown type, got {other:?}"),
        }
        assert_eq!(cursor.position(), tail_start);
    }

    #[test]
    fn strict_mode_rejects_suffixed_tags() {
        let mut buf = record("Score", "IntProperty_TA", &4i32.to_le_bytes());
        write_str(&mut buf, "None");

        let tolerant = decode(&buf).unwrap();
        assert_eq!(tolerant["Score"].as_int(), Some(4));
        assert_eq!(tolerant["Score"].tag, "IntProperty_TA");

        let strict = DecoderConfig {
            tag_matching: TagMatching::Strict,
            ..DecoderConfig::default()
        };
        let err = decode_properties(&mut Cursor::new(&buf), &strict).unwrap_err();
        assert!(matches!(err, ReplayError::UnknownPropertyType { .. }));
    }

    #[test]
    fn bytes_after_sentinel_are_left_unread() {
        let mut buf = PropertyListBuilder::new().int("A", 1).finish();
        let end = buf.len();
        buf.extend(PropertyListBuilder::new().int("B", 2).finish());

        let mut cursor = Cursor::new(&buf);
        let props = decode_properties(&mut cursor, &DecoderConfig::default()).unwrap();
        assert_eq!(props.names().collect::<Vec<_>>(), ["A"]);
        assert_eq!(cursor.position(), end);
    }

    #[test]
    fn lookalike_sentinel_depends_on_matching_mode() {
        let buf = PropertyListBuilder::new()
            .int("NoneType", 1)
            .int("After", 2)
            .finish();

        let exact = decode(&buf).unwrap();
        assert_eq!(exact.len(), 2);

        let contains = DecoderConfig {
            sentinel_matching: SentinelMatching::Contains,
            ..DecoderConfig::default()
        };
        let props = decode_properties(&mut Cursor::new(&buf), &contains).unwrap();
        assert!(props.is_empty());
    }

    #[test]
    fn repeated_name_keeps_last_value_in_first_slot() {
        let buf = PropertyListBuilder::new()
            .int("A", 1)
            .str("B", "x")
            .int("A", 9)
            .finish();
        let props = decode(&buf).unwrap();

        assert_eq!(props.len(), 2);
        assert_eq!(props["A"].value, PropertyValue::Int(9));
        assert_eq!(props.names().collect::<Vec<_>>(), ["A", "B"]);
    }

    #[test]
    fn array_groups_keep_their_order() {
        let buf = PropertyListBuilder::new()
            .array(
                "Goals",
                vec![
                    PropertyListBuilder::new().int("x", 5),
                    PropertyListBuilder::new().int("x", 7),
                ],
            )
            .finish();

        let props = decode(&buf).unwrap();
        let groups = props["Goals"].groups().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0]["x"].as_int(), Some(5));
        assert_eq!(groups[1]["x"].as_int(), Some(7));
    }

    #[test]
    fn nested_arrays_decode_recursively() {
        let inner = PropertyListBuilder::new().array(
            "Inner",
            vec![PropertyListBuilder::new().str("Leaf", "deep")],
        );
        let buf = PropertyListBuilder::new()
            .array("Outer", vec![inner, PropertyListBuilder::new()])
            .int("After", 1)
            .finish();

        let props = decode(&buf).unwrap();
        let outer = props["Outer"].groups().unwrap();
        assert_eq!(outer.len(), 2);
        assert!(outer[1].is_empty());
        let inner = outer[0]["Inner"].groups().unwrap();
        assert_eq!(inner[0]["Leaf"].as_str(), Some("deep"));
        assert_eq!(props["After"].as_int(), Some(1));
    }

    #[test]
    fn negative_group_count_fails_fast() {
        let mut buf = record("Goals", "ArrayProperty", &(-1i32).to_le_bytes());
        write_str(&mut buf, "None");
        let err = decode(&buf).unwrap_err();
        assert!(matches!(
            err,
            ReplayError::InvalidCount {
                section: Section::PropertyGroups,
                count: -1,
                ..
            }
        ));
    }

    #[test]
    fn implausible_group_count_fails_before_iterating() {
        let mut buf = record("Goals", "ArrayProperty", &i32::MAX.to_le_bytes());
        write_str(&mut buf, "None");
        let err = decode(&buf).unwrap_err();
        assert!(matches!(
            err,
            ReplayError::InvalidCount {
                section: Section::PropertyGroups,
                ..
            }
        ));
    }

    #[test]
    fn nesting_beyond_limit_is_rejected() {
        let mut group = PropertyListBuilder::new().int("Leaf", 0);
        for _ in 0..4 {
            group = PropertyListBuilder::new().array("Nested", vec![group]);
        }
        let buf = group.finish();

        let shallow = DecoderConfig {
            max_depth: 3,
            ..DecoderConfig::default()
        };
        let err = decode_properties(&mut Cursor::new(&buf), &shallow).unwrap_err();
        assert!(matches!(err, ReplayError::DepthExceeded { limit: 3, .. }));

        let deep_enough = DecoderConfig {
            max_depth: 4,
            ..DecoderConfig::default()
        };
        assert!(decode_properties(&mut Cursor::new(&buf), &deep_enough).is_ok());
    }

    #[test]
    fn missing_sentinel_is_a_short_read() {
        let buf = PropertyListBuilder::new().int("A", 1).finish_unterminated();
        let err = decode(&buf).unwrap_err();
        assert!(err.is_short_read());
    }

    #[test]
    fn group_missing_its_sentinel_fails_the_whole_list() {
        let mut buf = record("Goals", "ArrayProperty", &[]);
        write_i32_le(&mut buf, 1);
        buf.extend(PropertyListBuilder::new().int("x", 1).finish_unterminated());
        assert!(decode(&buf).is_err());
    }

    proptest! {
        #[test]
        fn int_properties_survive_decoding(values in prop::collection::vec(any::<i32>(), 0..16)) {
            let mut builder = PropertyListBuilder::new();
            for (i, v) in values.iter().enumerate() {
                builder = builder.int(&format!("P{i}"), *v);
            }
            let props = decode(&builder.finish()).unwrap();
            prop_assert_eq!(props.len(), values.len());
            for (i, v) in values.iter().enumerate() {
                prop_assert_eq!(props[format!("P{i}").as_str()].as_int(), Some(*v));
            }
        }

        #[test]
        fn truncation_is_always_an_error(cut in 0usize..64) {
            let buf = PropertyListBuilder::new()
                .str("Name", "Player")
                .array("Goals", vec![PropertyListBuilder::new().int("frame", 100)])
                .finish();
            let cut = cut.min(buf.len() - 1);
            prop_assert!(decode(&buf[..cut]).is_err());
        }
    }
}
