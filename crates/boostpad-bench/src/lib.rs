//! Benchmark profiles for the boostpad replay decoder.
//!
//! Provides synthetic replays shaped like real match recordings:
//!
//! - [`reference_profile`]: a 3v3 match with a handful of goals
//! - [`stress_profile`]: deep property nesting and large body tables
//! - [`synthetic_name`]: deterministic identifier generation via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use boostpad_core::{DebugEntry, Keyframe, Tickmark};
use boostpad_test_utils::{BodyFixture, HeaderFixture, PropertyListBuilder, ReplayBuilder};

/// Shape parameters for a synthetic replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayShape {
    /// Number of `Goals` groups.
    pub goals: usize,
    /// Number of `PlayerStats` groups.
    pub players: usize,
    /// Entries in each of the keyframe and name tables.
    pub table_len: usize,
    /// Bytes of opaque network data.
    pub network_len: usize,
    /// Array levels nested under each `PlayerStats` group's `Loadout`.
    pub nesting: usize,
}

/// A 3v3 match: 6 players, 7 goals, modest body tables.
pub fn reference_profile(seed: u64) -> Vec<u8> {
    build_replay(
        seed,
        ReplayShape {
            goals: 7,
            players: 6,
            table_len: 64,
            network_len: 64 * 1024,
            nesting: 1,
        },
    )
}

/// A replay with hundreds of groups, 16-level loadout nesting and large tables.
pub fn stress_profile(seed: u64) -> Vec<u8> {
    build_replay(
        seed,
        ReplayShape {
            goals: 200,
            players: 64,
            table_len: 4096,
            network_len: 4 * 1024 * 1024,
            nesting: 16,
        },
    )
}

/// Build an encoded replay of the given shape.
pub fn build_replay(seed: u64, shape: ReplayShape) -> Vec<u8> {
    let goals = (0..shape.goals)
        .map(|i| {
            PropertyListBuilder::new()
                .int("frame", (i as i32 + 1) * 300)
                .str("PlayerName", &synthetic_name(seed, i))
                .int("PlayerTeam", (i % 2) as i32)
        })
        .collect();

    let players = (0..shape.players)
        .map(|i| {
            PropertyListBuilder::new()
                .str("Name", &synthetic_name(seed, i))
                .byte("Platform", "OnlinePlatform", "OnlinePlatform_Steam")
                .qword("OnlineID", 76561198000000000 + i as i64)
                .int("Score", (i as i32) * 100)
                .int("Goals", (i % 3) as i32)
                .bool("bBot", false)
                .array("Loadout", vec![loadout(seed, i, shape.nesting)])
        })
        .collect();

    let properties = PropertyListBuilder::new()
        .int("TeamSize", 3)
        .int("Team0Score", 4)
        .int("Team1Score", 3)
        .str("Id", &format!("{seed:016X}"))
        .name("MapName", "Stadium_P")
        .float("RecordFPS", 30.0)
        .int("NumFrames", (shape.table_len * 30) as i32)
        .array("Goals", goals)
        .array("PlayerStats", players);

    let body = BodyFixture {
        levels: vec!["Stadium_P".into()],
        keyframes: (0..shape.table_len)
            .map(|i| Keyframe {
                time: i as f32 * 1.5,
                frame: (i * 45) as i32,
                position: (i * 1024) as i32,
            })
            .collect(),
        network_data: (0..shape.network_len)
            .map(|i| (mix(seed, i as u64) & 0xFF) as u8)
            .collect(),
        debug_entries: vec![DebugEntry {
            frame: 0,
            user: synthetic_name(seed, 0),
            text: "recording started".into(),
        }],
        tickmarks: (0..shape.goals)
            .map(|i| Tickmark {
                description: format!("Team{}Goal", i % 2),
                frame: (i as i32 + 1) * 300,
            })
            .collect(),
        packages: vec!["Core".into(), "Engine".into(), "TAGame".into()],
        objects: (0..shape.table_len)
            .map(|i| format!("TAGame.Default__Obj_{i}"))
            .collect(),
        names: (0..shape.table_len)
            .map(|i| synthetic_name(seed, i))
            .collect(),
    };

    ReplayBuilder::new()
        .header(HeaderFixture::with_versions(868, 18).with_net_version(10))
        .properties(properties)
        .body(body)
        .build()
}

/// A loadout group spanning `depth` levels of nested `Parts` arrays.
fn loadout(seed: u64, index: usize, depth: usize) -> PropertyListBuilder {
    let group = PropertyListBuilder::new()
        .int("Body", (mix(seed, index as u64) % 64) as i32)
        .int("Depth", depth as i32);
    if depth <= 1 {
        group
    } else {
        group.array("Parts", vec![loadout(seed, index, depth - 1)])
    }
}

/// A deterministic player-style name for `index` under `seed`.
pub fn synthetic_name(seed: u64, index: usize) -> String {
    format!("Player_{:08x}", mix(seed, index as u64) as u32)
}

fn mix(seed: u64, i: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(i.wrapping_mul(1442695040888963407))
        .rotate_right(29)
}
