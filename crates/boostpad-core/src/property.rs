//! The self-describing property tree.
//!
//! A replay's key-value section is a flat list of named, typed
//! [`Property`] records. Array-typed properties expand into an ordered
//! list of [`PropertyGroup`]s, each of which is itself a property list.
//! The tree is therefore arbitrarily deep in principle; the decoder
//! bounds the depth it accepts.

use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;

/// Name that terminates a property list or group.
pub const SENTINEL_NAME: &str = "None";

/// Separator placed between the two halves of a byte property value.
pub const BYTE_VALUE_SEPARATOR: char = '|';

/// The value families a type tag can resolve to.
///
/// Each kind has one canonical tag (see [`PropertyKind::canonical_tag`]).
/// `Str` and `Name` decode identically; both produce a
/// [`PropertyValue::Str`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Signed 32-bit integer.
    Int,
    /// Length-prefixed string.
    Str,
    /// Length-prefixed name string.
    Name,
    /// 32-bit float.
    Float,
    /// Pair of strings (enum type and value).
    Byte,
    /// Single byte, nonzero is `true`.
    Bool,
    /// Signed 64-bit integer.
    QWord,
    /// Counted list of nested property groups.
    Array,
}

impl PropertyKind {
    /// Every kind, in the order substring markers are tried by tolerant
    /// tag resolution (array first, then the scalar table order).
    pub const ALL: [PropertyKind; 8] = [
        PropertyKind::Array,
        PropertyKind::Int,
        PropertyKind::Str,
        PropertyKind::Name,
        PropertyKind::Float,
        PropertyKind::Byte,
        PropertyKind::Bool,
        PropertyKind::QWord,
    ];

    /// The exact tag the format uses for this kind.
    pub fn canonical_tag(self) -> &'static str {
        match self {
            Self::Int => "IntProperty",
            Self::Str => "StrProperty",
            Self::Name => "NameProperty",
            Self::Float => "FloatProperty",
            Self::Byte => "ByteProperty",
            Self::Bool => "BoolProperty",
            Self::QWord => "QWordProperty",
            Self::Array => "ArrayProperty",
        }
    }

    /// The substring that identifies this kind in a non-canonical tag.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::Str => "Str",
            Self::Name => "Name",
            Self::Float => "Float",
            Self::Byte => "Byte",
            Self::Bool => "Bool",
            Self::QWord => "QWord",
            Self::Array => "Array",
        }
    }

    /// Look up a kind by its exact canonical tag.
    pub fn from_canonical_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.canonical_tag() == tag)
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_tag())
    }
}

/// The two halves of a byte property: an enum type name and its value.
///
/// Rendered as `enum_type|value`.
///
/// # Examples
///
/// ```
/// use boostpad_core::ByteValue;
///
/// let v = ByteValue::new("OnlinePlatform", "OnlinePlatform_Steam");
/// assert_eq!(v.to_string(), "OnlinePlatform|OnlinePlatform_Steam");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ByteValue {
    /// First string: the enum type.
    pub enum_type: String,
    /// Second string: the enum value.
    pub value: String,
}

impl ByteValue {
    /// Build a byte value from its two halves.
    pub fn new(enum_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            enum_type: enum_type.into(),
            value: value.into(),
        }
    }

    /// The joined `enum_type|value` form.
    pub fn joined(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ByteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.enum_type, BYTE_VALUE_SEPARATOR, self.value)
    }
}

/// A decoded property value.
///
/// Scalars and arrays share one enum, so a [`Property`] always holds
/// exactly one of them.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// `IntProperty`.
    Int(i32),
    /// `StrProperty` or `NameProperty`.
    Str(String),
    /// `FloatProperty`.
    Float(f32),
    /// `ByteProperty`.
    Byte(ByteValue),
    /// `BoolProperty`.
    Bool(bool),
    /// `QWordProperty`.
    QWord(i64),
    /// `ArrayProperty`: ordered nested groups.
    Array(Vec<PropertyGroup>),
}

impl PropertyValue {
    /// The value family. String values report [`PropertyKind::Str`]
    /// regardless of whether the tag was a `Str` or `Name` tag.
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Int(_) => PropertyKind::Int,
            Self::Str(_) => PropertyKind::Str,
            Self::Float(_) => PropertyKind::Float,
            Self::Byte(_) => PropertyKind::Byte,
            Self::Bool(_) => PropertyKind::Bool,
            Self::QWord(_) => PropertyKind::QWord,
            Self::Array(_) => PropertyKind::Array,
        }
    }

    /// Whether this is a scalar (anything but an array).
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::Array(_))
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
            Self::Float(v) => write!(f, "{v}"),
            Self::Byte(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::QWord(v) => write!(f, "{v}"),
            Self::Array(groups) => write!(f, "[{} groups]", groups.len()),
        }
    }
}

/// A named, typed value from the property tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Type tag exactly as it appeared in the stream.
    pub tag: String,
    /// Declared value length. Recorded, not authoritative.
    pub declared_len: u32,
    /// Reserved 32-bit field following the declared length.
    pub reserved: u32,
    /// The decoded value.
    pub value: PropertyValue,
}

impl Property {
    /// Build a property with zeroed length and reserved fields.
    pub fn new(name: impl Into<String>, tag: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            declared_len: 0,
            reserved: 0,
            value,
        }
    }

    /// Whether the value is a group sequence.
    pub fn is_array(&self) -> bool {
        matches!(self.value, PropertyValue::Array(_))
    }

    /// Integer value, if this is an `Int` property.
    pub fn as_int(&self) -> Option<i32> {
        match self.value {
            PropertyValue::Int(v) => Some(v),
            _ => None,
        }
    }

    /// String value, if this is a `Str` or `Name` property.
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            PropertyValue::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Float value, if this is a `Float` property.
    pub fn as_float(&self) -> Option<f32> {
        match self.value {
            PropertyValue::Float(v) => Some(v),
            _ => None,
        }
    }

    /// Boolean value, if this is a `Bool` property.
    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            PropertyValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    /// 64-bit integer value, if this is a `QWord` property.
    pub fn as_qword(&self) -> Option<i64> {
        match self.value {
            PropertyValue::QWord(v) => Some(v),
            _ => None,
        }
    }

    /// Byte pair, if this is a `Byte` property.
    pub fn as_byte(&self) -> Option<&ByteValue> {
        match &self.value {
            PropertyValue::Byte(v) => Some(v),
            _ => None,
        }
    }

    /// Nested groups, if this is an array property.
    pub fn groups(&self) -> Option<&[PropertyGroup]> {
        match &self.value {
            PropertyValue::Array(groups) => Some(groups),
            _ => None,
        }
    }
}

/// Properties keyed by name.
///
/// Names are unique: inserting a property whose name already exists
/// replaces the earlier one in place. Iteration follows first-insertion
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyMap {
    entries: IndexMap<String, Property>,
}

/// One element of an array property. Structurally a full property list.
pub type PropertyGroup = PropertyMap;

impl PropertyMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, returning the one it replaced, if any.
    pub fn insert(&mut self, property: Property) -> Option<Property> {
        self.entries.insert(property.name.clone(), property)
    }

    /// Look up a property by name.
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.entries.get(name)
    }

    /// Whether a property with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the properties.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.entries.values()
    }

    /// Iterate over the property names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Index<&str> for PropertyMap {
    type Output = Property;

    /// # Panics
    ///
    /// Panics if no property with this name exists.
    fn index(&self, name: &str) -> &Property {
        match self.entries.get(name) {
            Some(p) => p,
            None => panic!("no property named {name:?}"),
        }
    }
}

impl FromIterator<Property> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        let mut map = Self::new();
        for property in iter {
            map.insert(property);
        }
        map
    }
}

impl IntoIterator for PropertyMap {
    type Item = Property;
    type IntoIter = indexmap::map::IntoValues<String, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}
