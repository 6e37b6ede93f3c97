/// Optional field overrides for [`Snowflake::from_parts`].
///
/// Any field left as `None` falls back to its documented default. The struct
/// is `Copy`, so construction never mutates the caller's value.
///
/// ```
/// use snowid::{Snowflake, SnowflakeLayout, SnowflakeParts};
///
/// let id = Snowflake::from_parts(
///     SnowflakeLayout::TWITTER,
///     SnowflakeParts {
///         timestamp: Some(1000),
///         worker_id: Some(2),
///         increment: Some(1),
///         ..Default::default()
///     },
/// );
/// assert_eq!(id.worker_id(), 2);
/// ```
///
/// [`Snowflake::from_parts`]: crate::Snowflake::from_parts
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SnowflakeParts {
    /// Timestamp in milliseconds, **relative to the layout's epoch**. No
    /// epoch subtraction is performed here; callers must pre-adjust.
    /// Defaults to 0.
    pub timestamp: Option<u64>,

    /// Worker identifier. Only the low 5 bits survive packing unless the
    /// layout splits the machine ID field and [`Self::process_id`] is also
    /// set (see [`Snowflake::from_parts`]). Defaults to 0.
    ///
    /// [`Snowflake::from_parts`]: crate::Snowflake::from_parts
    pub worker_id: Option<u64>,

    /// Process identifier, honored only by layouts that split the machine ID
    /// field. Ignored otherwise.
    pub process_id: Option<u64>,

    /// Increment counter, masked to 12 bits by packing. Defaults to the next
    /// value of the process-wide counter (see [`generated_count`]).
    ///
    /// [`generated_count`]: crate::generated_count
    pub increment: Option<u64>,
}
