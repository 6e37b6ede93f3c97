/// Twitter epoch: Thursday, November 4, 2010 1:42:54.657 UTC
pub const TWITTER_EPOCH: u64 = 1_288_834_974_657;

/// Discord epoch: Thursday, January 1, 2015 00:00:00 UTC
pub const DISCORD_EPOCH: u64 = 1_420_070_400_000;

/// The field layout a [`Snowflake`] is decoded against.
///
/// A layout pairs an epoch (milliseconds since the Unix epoch, added back to
/// the relative timestamp on read) with whether the 10-bit machine ID field
/// is split into 5-bit worker and process sub-fields. Vendor formats are
/// plain configuration values rather than separate types:
///
/// ```
/// use snowid::{DISCORD_EPOCH, SnowflakeLayout};
///
/// assert_eq!(SnowflakeLayout::DISCORD.epoch(), DISCORD_EPOCH);
/// assert!(SnowflakeLayout::DISCORD.splits_machine_id());
/// assert!(!SnowflakeLayout::TWITTER.splits_machine_id());
/// ```
///
/// The layout travels with every [`Snowflake`] instance and is fixed at
/// construction.
///
/// [`Snowflake`]: crate::Snowflake
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnowflakeLayout {
    epoch: u64,
    split: bool,
}

impl SnowflakeLayout {
    /// Discord's snowflake format: [`DISCORD_EPOCH`], machine ID split into
    /// worker ID (5) and process ID (5).
    pub const DISCORD: Self = Self {
        epoch: DISCORD_EPOCH,
        split: true,
    };

    /// Twitter's snowflake format: [`TWITTER_EPOCH`], undivided machine ID.
    pub const TWITTER: Self = Self {
        epoch: TWITTER_EPOCH,
        split: false,
    };

    /// A generic layout anchored to a caller-supplied epoch, with an
    /// undivided 10-bit machine ID field.
    pub const fn with_epoch(epoch: u64) -> Self {
        Self {
            epoch,
            split: false,
        }
    }

    /// Like [`Self::with_epoch`], but the machine ID field is split into
    /// worker and process sub-fields, Discord-style.
    pub const fn with_epoch_split(epoch: u64) -> Self {
        Self { epoch, split: true }
    }

    /// The layout's epoch, in milliseconds since the Unix epoch.
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Returns true if the machine ID field is subdivided into worker and
    /// process sub-fields.
    pub const fn splits_machine_id(&self) -> bool {
        self.split
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_layouts_use_published_epochs() {
        assert_eq!(SnowflakeLayout::TWITTER.epoch(), 1_288_834_974_657);
        assert_eq!(SnowflakeLayout::DISCORD.epoch(), 1_420_070_400_000);
    }

    #[test]
    fn custom_layouts_carry_their_epoch() {
        let plain = SnowflakeLayout::with_epoch(1234);
        assert_eq!(plain.epoch(), 1234);
        assert!(!plain.splits_machine_id());

        let split = SnowflakeLayout::with_epoch_split(1234);
        assert_eq!(split.epoch(), 1234);
        assert!(split.splits_machine_id());
    }
}
