//! Replay header record and the optional body frame.

/// Minimum engine version that carries a network version field.
pub const NET_VERSION_MIN_ENGINE: u32 = 868;

/// Minimum licensee version that carries a network version field.
pub const NET_VERSION_MIN_LICENSEE: u32 = 18;

/// The fixed header record at the start of every replay.
///
/// # Examples
///
/// ```
/// use boostpad_core::Header;
///
/// let header = Header {
///     header_size: 4096,
///     crc: 0,
///     engine_version: 868,
///     licensee_version: 18,
///     net_version: Some(10),
///     class_name: "TAGame.Replay_Soccar_TA".into(),
/// };
///
/// assert!(header.supports_net_version());
/// assert_eq!(header.effective_net_version(), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    /// Byte size of the header section as recorded in the stream.
    pub header_size: i32,
    /// Header CRC as recorded. Never computed or verified.
    pub crc: u32,
    /// Engine version.
    pub engine_version: u32,
    /// Licensee version.
    pub licensee_version: u32,
    /// Network version, `None` when the versions do not gate it in or when
    /// the best-effort read of the field failed.
    pub net_version: Option<u32>,
    /// Replay class name (e.g. `"TAGame.Replay_Soccar_TA"`).
    pub class_name: String,
}

impl Header {
    /// Whether a header with these versions carries a network version field.
    pub fn versions_carry_net_version(engine_version: u32, licensee_version: u32) -> bool {
        engine_version >= NET_VERSION_MIN_ENGINE && licensee_version >= NET_VERSION_MIN_LICENSEE
    }

    /// Whether this header's versions gate in the network version field.
    pub fn supports_net_version(&self) -> bool {
        Self::versions_carry_net_version(self.engine_version, self.licensee_version)
    }

    /// Network version, defaulting to zero when absent.
    pub fn effective_net_version(&self) -> u32 {
        self.net_version.unwrap_or(0)
    }
}

/// Size and CRC pair that prefixes a length-framed body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyFrame {
    /// Declared byte size of the body.
    pub size: i32,
    /// Body CRC as recorded. Never computed or verified.
    pub crc: u32,
}
