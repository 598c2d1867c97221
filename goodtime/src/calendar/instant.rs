
use crate::calendar::{
  CalendarError, Duration, NANOSECONDS_PER_MICROSECOND, NANOSECONDS_PER_MILLISECOND,
  NANOSECONDS_PER_SECOND, SignedDuration,
  misc::{i64i128, u32i128},
};
use core::ops::{Add, Sub};

/// Absolute point in time, counted in nanoseconds since the UNIX epoch (1970-01-01T00:00:00Z).
///
/// Negative values represent points before the epoch. Every `i64` count of seconds,
/// milliseconds, microseconds or nanoseconds is representable and conversions into coarser units
/// round towards negative infinity.
///
/// Leap seconds are not modeled.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Instant {
  unix_ns: i128,
}

impl Instant {
  /// 1970-01-01T00:00:00Z
  pub const EPOCH: Self = Self { unix_ns: 0 };

  /// Creates a new instance from the number of microseconds since the UNIX epoch.
  #[inline]
  pub const fn from_unix_micros(micros: i64) -> Self {
    Self { unix_ns: i64i128(micros) * u32i128(NANOSECONDS_PER_MICROSECOND) }
  }

  /// Creates a new instance from the number of milliseconds since the UNIX epoch.
  #[inline]
  pub const fn from_unix_millis(millis: i64) -> Self {
    Self { unix_ns: i64i128(millis) * u32i128(NANOSECONDS_PER_MILLISECOND) }
  }

  /// Creates a new instance from the number of nanoseconds since the UNIX epoch.
  #[inline]
  pub const fn from_unix_nanos(nanos: i64) -> Self {
    Self { unix_ns: i64i128(nanos) }
  }

  /// Creates a new instance from the number of nanoseconds since the UNIX epoch without
  /// limiting the range to `i64`.
  #[inline]
  pub const fn from_unix_nanos_i128(nanos: i128) -> Self {
    Self { unix_ns: nanos }
  }

  /// Creates a new instance from the number of seconds since the UNIX epoch.
  #[inline]
  pub const fn from_unix_seconds(seconds: i64) -> Self {
    Self { unix_ns: i64i128(seconds) * u32i128(NANOSECONDS_PER_SECOND) }
  }

  /// Samples the host clock with the highest resolution it provides.
  ///
  /// This is the only non-deterministic constructor. Code that needs reproducible time should
  /// receive a [`crate::calendar::Clock`] instead.
  #[cfg(feature = "std")]
  #[inline]
  pub fn now() -> Self {
    crate::calendar::Clock::now(&crate::calendar::SystemClock)
  }

  /// Returns the addition if the resulting value is within bounds.
  #[inline]
  pub fn checked_add(self, duration: impl Into<SignedDuration>) -> Result<Self, CalendarError> {
    let Some(unix_ns) = self.unix_ns.checked_add(duration.into().to_nanos()) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    Ok(Self { unix_ns })
  }

  /// Returns the subtraction if the resulting value is within bounds.
  #[inline]
  pub fn checked_sub(self, duration: impl Into<SignedDuration>) -> Result<Self, CalendarError> {
    let Some(unix_ns) = self.unix_ns.checked_sub(duration.into().to_nanos()) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    Ok(Self { unix_ns })
  }

  /// Signed span from `earlier` to `self`. Negative if `earlier` is actually later.
  #[inline]
  pub const fn duration_since(self, earlier: Self) -> Result<SignedDuration, CalendarError> {
    let Some(nanos) = self.unix_ns.checked_sub(earlier.unix_ns) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    SignedDuration::from_i128_nanos(nanos)
  }

  /// Number of nanoseconds past the floored number of seconds. Always positive, even before the
  /// epoch.
  #[expect(clippy::cast_possible_truncation, reason = "the remainder is lesser than one second")]
  #[expect(clippy::cast_sign_loss, reason = "euclidean remainders are never negative")]
  #[inline]
  pub const fn subsec_nanos(self) -> u32 {
    self.unix_ns.rem_euclid(u32i128(NANOSECONDS_PER_SECOND)) as u32
  }

  /// Number of microseconds since the UNIX epoch, rounded towards negative infinity.
  #[inline]
  pub const fn to_unix_micros(self) -> i128 {
    self.unix_ns.div_euclid(u32i128(NANOSECONDS_PER_MICROSECOND))
  }

  /// Number of milliseconds since the UNIX epoch, rounded towards negative infinity.
  #[inline]
  pub const fn to_unix_millis(self) -> i128 {
    self.unix_ns.div_euclid(u32i128(NANOSECONDS_PER_MILLISECOND))
  }

  /// Number of nanoseconds since the UNIX epoch.
  #[inline]
  pub const fn to_unix_nanos(self) -> i128 {
    self.unix_ns
  }

  /// Number of seconds since the UNIX epoch, rounded towards negative infinity.
  #[inline]
  pub const fn to_unix_seconds(self) -> i128 {
    self.unix_ns.div_euclid(u32i128(NANOSECONDS_PER_SECOND))
  }
}

impl Add<Duration> for Instant {
  type Output = Self;

  #[inline]
  fn add(self, rhs: Duration) -> Self::Output {
    self + SignedDuration::Positive(rhs)
  }
}

impl Add<SignedDuration> for Instant {
  type Output = Self;

  #[inline]
  fn add(self, rhs: SignedDuration) -> Self::Output {
    match self.checked_add(rhs) {
      Ok(elem) => elem,
      Err(_err) => panic!("overflow when adding a duration to an instant"),
    }
  }
}

impl Add<Instant> for Duration {
  type Output = Instant;

  #[inline]
  fn add(self, rhs: Instant) -> Self::Output {
    rhs + self
  }
}

impl Add<Instant> for SignedDuration {
  type Output = Instant;

  #[inline]
  fn add(self, rhs: Instant) -> Self::Output {
    rhs + self
  }
}

impl Sub<Duration> for Instant {
  type Output = Self;

  #[inline]
  fn sub(self, rhs: Duration) -> Self::Output {
    self - SignedDuration::Positive(rhs)
  }
}

impl Sub<SignedDuration> for Instant {
  type Output = Self;

  #[inline]
  fn sub(self, rhs: SignedDuration) -> Self::Output {
    match self.checked_sub(rhs) {
      Ok(elem) => elem,
      Err(_err) => panic!("overflow when subtracting a duration from an instant"),
    }
  }
}

impl Sub for Instant {
  type Output = SignedDuration;

  #[inline]
  fn sub(self, rhs: Self) -> Self::Output {
    match self.duration_since(rhs) {
      Ok(elem) => elem,
      Err(_err) => panic!("overflow when subtracting instants"),
    }
  }
}
