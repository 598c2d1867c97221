use crate::calendar::{CalendarError, CivilSecond, Duration, NANOSECONDS_PER_SECOND, misc::u32u64};
use core::fmt::{Display, Formatter};

/// [`CivilSecond`] plus the sub-second remainder, which is always lesser than one second.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CivilTime {
  second: CivilSecond,
  subsecond: Duration,
}

impl CivilTime {
  /// Validates and creates a new instance.
  #[inline]
  pub const fn new(second: CivilSecond, subsecond: Duration) -> Result<Self, CalendarError> {
    if subsecond.to_nanos() >= u32u64(NANOSECONDS_PER_SECOND) {
      return Err(CalendarError::InvalidSubsecond { received: subsecond.to_nanos() });
    }
    Ok(Self { second, subsecond })
  }

  /// Whole civil second.
  #[inline]
  pub const fn second(&self) -> CivilSecond {
    self.second
  }

  /// Remainder past [`Self::second`].
  #[inline]
  pub const fn subsecond(&self) -> Duration {
    self.subsecond
  }
}

impl Display for CivilTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.second)?;
    let mut fraction = self.subsecond.subsec_nanos();
    if fraction == 0 {
      return Ok(());
    }
    let mut width = 9;
    while fraction % 10 == 0 {
      fraction /= 10;
      width -= 1;
    }
    write!(f, ".{fraction:0width$}")
  }
}

impl From<CivilSecond> for CivilTime {
  #[inline]
  fn from(from: CivilSecond) -> Self {
    Self { second: from, subsecond: Duration::ZERO }
  }
}
