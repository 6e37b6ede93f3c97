/// A result type defaulting to the crate's [`Error`].
///
/// Packing and unpacking are infallible; only the textual paths
/// ([`Snowflake::from_str_radix`] and [`Snowflake::to_string_radix`]) can
/// fail.
///
/// [`Snowflake::from_str_radix`]: crate::Snowflake::from_str_radix
/// [`Snowflake::to_string_radix`]: crate::Snowflake::to_string_radix
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `snowid` can emit.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The requested radix falls outside the supported `2..=36` range.
    #[error("radix must be in 2..=36, got {radix}")]
    InvalidRadix { radix: u32 },

    /// A numeric string could not be parsed in the requested radix.
    #[error("invalid numeric string: {0}")]
    ParseInt(#[from] core::num::ParseIntError),
}
