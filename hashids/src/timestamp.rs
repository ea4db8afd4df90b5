//! Timestamp adapter: a point in time travels as a single number, the
//! nanoseconds elapsed since the Unix epoch.

use time::OffsetDateTime;

/// Errors from converting between timestamps and numbers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    /// The time is before the epoch or beyond what 64 bits of nanoseconds
    /// can hold
    #[error("timestamp of {0} ns since the epoch does not fit an unsigned 64 bit number")]
    OutOfRange(i128),

    /// A timestamp is always encoded as exactly one number
    #[error("expected exactly one decoded value for a timestamp, got {0}")]
    NotSingleValue(usize),

    /// The number does not describe a representable point in time
    #[error("invalid timestamp: {0}")]
    Invalid(#[from] time::error::ComponentRange),
}

/// Nanoseconds since the Unix epoch.
pub fn to_nanos(time: OffsetDateTime) -> Result<u64, TimestampError> {
    let nanos = time.unix_timestamp_nanos();
    u64::try_from(nanos).map_err(|_| TimestampError::OutOfRange(nanos))
}

/// The UTC point in time `nanos` nanoseconds after the Unix epoch.
pub fn from_nanos(nanos: u64) -> Result<OffsetDateTime, TimestampError> {
    Ok(OffsetDateTime::from_unix_timestamp_nanos(i128::from(nanos))?)
}
