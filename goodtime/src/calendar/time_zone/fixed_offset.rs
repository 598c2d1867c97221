use crate::calendar::{CalendarError, OffsetOracle};

/// Oracle whose offset never changes. From -23:59:59 to +23:59:59.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FixedOffset(i32);

impl FixedOffset {
  /// Coordinated Universal Time.
  pub const UTC: Self = Self(0);

  /// Validates and creates a new instance from a number of seconds east of Greenwich.
  #[inline]
  pub const fn new(seconds: i32) -> Result<Self, CalendarError> {
    let -86_399..=86_399 = seconds else {
      return Err(CalendarError::InvalidUtcOffset { received: seconds });
    };
    Ok(Self(seconds))
  }

  /// Number of seconds east of Greenwich.
  #[inline]
  pub const fn seconds(self) -> i32 {
    self.0
  }
}

impl OffsetOracle for FixedOffset {
  #[inline]
  fn utc_offset(&self, _: i64) -> Option<i32> {
    Some(self.0)
  }
}
