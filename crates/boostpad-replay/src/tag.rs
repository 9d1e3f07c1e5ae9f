//! Type tag and sentinel recognition.

use boostpad_core::{PropertyKind, SENTINEL_NAME};
use tracing::trace;

use crate::config::{SentinelMatching, TagMatching};

/// Resolve a type tag to the kind of value that follows it.
///
/// Canonical tags always resolve exactly. Under
/// [`TagMatching::Tolerant`] a non-canonical tag falls back to the first
/// kind marker it contains, array marker first.
pub fn resolve_tag(tag: &str, mode: TagMatching) -> Option<PropertyKind> {
    if let Some(kind) = PropertyKind::from_canonical_tag(tag) {
        return Some(kind);
    }
    match mode {
        TagMatching::Strict => None,
        TagMatching::Tolerant => {
            let kind = PropertyKind::ALL
                .into_iter()
                .find(|k| tag.contains(k.marker()))?;
            trace!(tag, %kind, "resolved non-canonical tag by marker");
            Some(kind)
        }
    }
}

/// Whether a property name ends the current list.
pub fn is_sentinel(name: &str, mode: SentinelMatching) -> bool {
    match mode {
        SentinelMatching::Exact => name == SENTINEL_NAME,
        SentinelMatching::Contains => name.contains(SENTINEL_NAME),
    }
}
