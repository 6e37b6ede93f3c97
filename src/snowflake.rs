use crate::{Result, SnowflakeLayout, SnowflakeParts, counter, radix};
use core::fmt;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A 64-bit snowflake ID decoded against a [`SnowflakeLayout`].
///
/// - 42 bits timestamp (ms since the layout's epoch)
/// - 10 bits machine ID
/// - 12 bits increment
///
/// ```text
///  Bit Index:  63             22 21              12 11              0
///              +----------------+------------------+----------------+
///  Field:      | timestamp (42) | machine ID (10)  | increment (12) |
///              +----------------+------------------+----------------+
///              |<----- MSB ---------- 64 bits ---------- LSB ----->|
/// ```
///
/// The packed timestamp is *relative*; [`Self::timestamp`] adds the layout's
/// epoch back on read. Split layouts ([`SnowflakeLayout::DISCORD`])
/// reinterpret the machine ID field as worker ID (5) and process ID (5).
///
/// # Example
///
/// ```
/// use snowid::{Snowflake, SnowflakeLayout};
///
/// let id = Snowflake::from_raw(SnowflakeLayout::DISCORD, 175928847299117063);
/// assert_eq!(id.timestamp(), 1462015105796);
/// assert_eq!(id.worker_id(), 1);
/// assert_eq!(id.process_id(), Some(0));
/// assert_eq!(id.increment(), 7);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Snowflake {
    inner: u64,
    layout: SnowflakeLayout,
}

impl Snowflake {
    /// Bitmask for extracting the 10-bit machine ID field. Occupies bits 12
    /// through 21.
    pub const MACHINE_ID_MASK: u64 = (1 << 10) - 1;

    /// Bitmask for a 5-bit worker ID sub-field. On split layouts it occupies
    /// bits 17 through 21; it is also the write mask applied to a
    /// caller-supplied worker ID in [`Self::from_parts`].
    pub const WORKER_ID_MASK: u64 = (1 << 5) - 1;

    /// Bitmask for the 5-bit process ID sub-field. Occupies bits 12 through
    /// 16 on split layouts.
    pub const PROCESS_ID_MASK: u64 = (1 << 5) - 1;

    /// Bitmask for extracting the 12-bit increment field. Occupies bits 0
    /// through 11.
    pub const INCREMENT_MASK: u64 = (1 << 12) - 1;

    /// Number of bits to shift the timestamp to its position (bit 22).
    pub const TIMESTAMP_SHIFT: u64 = 22;

    /// Number of bits to shift the machine ID to its position (bit 12).
    pub const MACHINE_ID_SHIFT: u64 = 12;

    /// Number of bits to shift the worker ID sub-field to its position
    /// (bit 17) on split layouts.
    pub const WORKER_ID_SHIFT: u64 = 17;

    /// Builds a snowflake from an already-packed value.
    ///
    /// `raw` is stored verbatim: no masking or validation is applied, so a
    /// malformed value simply decodes to whatever its bits say. This matches
    /// the permissive behavior of the vendor formats and is the only
    /// construction path through which a full 10-bit machine ID round-trips
    /// on a plain layout (see [`Self::from_parts`]).
    pub const fn from_raw(layout: SnowflakeLayout, raw: u64) -> Self {
        Self { inner: raw, layout }
    }

    /// Parses a snowflake from its textual form in the given radix.
    ///
    /// The string-valued twin of [`Self::from_raw`]: the parsed integer is
    /// stored verbatim.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRadix`] if `radix` is outside `2..=36`
    /// - [`Error::ParseInt`] if `s` is not a valid number in that radix
    ///
    /// [`Error::InvalidRadix`]: crate::Error::InvalidRadix
    /// [`Error::ParseInt`]: crate::Error::ParseInt
    pub fn from_str_radix(layout: SnowflakeLayout, s: &str, radix: u32) -> Result<Self> {
        Ok(Self::from_raw(layout, radix::decode_radix(s, radix)?))
    }

    /// Packs a snowflake from individual field overrides.
    ///
    /// Defaults for omitted fields: `timestamp` 0, `worker_id` 0, and
    /// `increment` the next value of the process-wide counter (one
    /// `fetch_add` per defaulted construction, shared across all layouts).
    ///
    /// Packing is permissive: fields are silently truncated to their bit
    /// widths, never validated. The worker ID write mask is 5 bits even
    /// though the field reads back 10 bits wide; wider machine IDs only
    /// round-trip via [`Self::from_raw`] or via a split layout's sub-field
    /// composition, where `((worker_id & 0x1F) << 5) | (process_id & 0x1F)`
    /// is inserted whole.
    ///
    /// # Example
    ///
    /// ```
    /// use snowid::{Snowflake, SnowflakeLayout, SnowflakeParts};
    ///
    /// let id = Snowflake::from_parts(
    ///     SnowflakeLayout::DISCORD,
    ///     SnowflakeParts {
    ///         worker_id: Some(3),
    ///         process_id: Some(7),
    ///         increment: Some(0),
    ///         ..Default::default()
    ///     },
    /// );
    /// assert_eq!(id.worker_id(), 3);
    /// assert_eq!(id.process_id(), Some(7));
    /// assert_eq!(id.machine_id(), (3 << 5) | 7);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    pub fn from_parts(layout: SnowflakeLayout, parts: SnowflakeParts) -> Self {
        let timestamp = parts.timestamp.unwrap_or(0);
        let worker_id = parts.worker_id.unwrap_or(0);
        let increment = parts.increment.unwrap_or_else(counter::next_increment);

        let machine_id = match parts.process_id {
            // Split layouts compose the full 10-bit field before insertion;
            // the composed bits are not re-masked to 5 bits.
            Some(process_id) if layout.splits_machine_id() => {
                ((worker_id & Self::WORKER_ID_MASK) << 5) | (process_id & Self::PROCESS_ID_MASK)
            }
            _ => worker_id & Self::WORKER_ID_MASK,
        };

        let inner = (timestamp << Self::TIMESTAMP_SHIFT)
            | (machine_id << Self::MACHINE_ID_SHIFT)
            | (increment & Self::INCREMENT_MASK);
        Self { inner, layout }
    }

    /// The creation time of the snowflake: the packed relative timestamp
    /// plus the layout's epoch, in milliseconds since the Unix epoch.
    pub const fn timestamp(&self) -> u64 {
        (self.inner >> Self::TIMESTAMP_SHIFT) + self.layout.epoch()
    }

    /// Extracts the full 10-bit machine ID field, on any layout. On split
    /// layouts this is `(worker_id << 5) | process_id`.
    pub const fn machine_id(&self) -> u64 {
        (self.inner >> Self::MACHINE_ID_SHIFT) & Self::MACHINE_ID_MASK
    }

    /// The ID of the worker which created the snowflake.
    ///
    /// On a plain layout this is the whole 10-bit machine ID field; on a
    /// split layout, the 5-bit high sub-field.
    pub const fn worker_id(&self) -> u64 {
        if self.layout.splits_machine_id() {
            (self.inner >> Self::WORKER_ID_SHIFT) & Self::WORKER_ID_MASK
        } else {
            self.machine_id()
        }
    }

    /// The ID of the process which created the snowflake: the 5-bit low
    /// sub-field on split layouts, `None` on plain layouts.
    pub const fn process_id(&self) -> Option<u64> {
        if self.layout.splits_machine_id() {
            Some((self.inner >> Self::MACHINE_ID_SHIFT) & Self::PROCESS_ID_MASK)
        } else {
            None
        }
    }

    /// Extracts the 12-bit increment field.
    pub const fn increment(&self) -> u64 {
        self.inner & Self::INCREMENT_MASK
    }

    /// The layout's epoch, in milliseconds since the Unix epoch.
    pub const fn epoch(&self) -> u64 {
        self.layout.epoch()
    }

    /// The layout the snowflake is decoded against.
    pub const fn layout(&self) -> SnowflakeLayout {
        self.layout
    }

    /// Converts this snowflake into its raw packed representation.
    pub const fn to_raw(&self) -> u64 {
        self.inner
    }

    /// Returns the packed value formatted in the given radix, lowercase.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRadix`] if `radix` is outside `2..=36`.
    ///
    /// [`Error::InvalidRadix`]: crate::Error::InvalidRadix
    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        radix::encode_radix(self.inner, radix)
    }

    /// Returns the packed value as a zero-padded 20-digit decimal string.
    pub fn to_padded_string(&self) -> String {
        format!("{:020}", self.inner)
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl fmt::Debug for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snowflake")
            .field("raw", &self.inner)
            .field("epoch", &self.epoch())
            .field("timestamp", &self.timestamp())
            .field("worker_id", &self.worker_id())
            .field("process_id", &self.process_id())
            .field("increment", &self.increment())
            .finish()
    }
}
