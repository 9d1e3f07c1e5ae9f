//! Entries of the fixed body sections that follow the property tree.

/// A seek-table entry pointing into the network data blob.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Replay time in seconds.
    pub time: f32,
    /// Frame index.
    pub frame: i32,
    /// Byte offset of the frame within the network data.
    pub position: i32,
}

/// A debug log line recorded during the match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugEntry {
    /// Frame index the entry was logged at.
    pub frame: i32,
    /// User that produced the entry.
    pub user: String,
    /// Free text.
    pub text: String,
}

/// A named marker on the replay timeline (goals, saves, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tickmark {
    /// Marker description (e.g. `"Team0Goal"`).
    pub description: String,
    /// Frame index the marker is attached to.
    pub frame: i32,
}
