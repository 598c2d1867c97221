#[cfg(test)]
mod tests;

use crate::calendar::{
  CalendarError, Duration, NANOSECONDS_PER_MICROSECOND, NANOSECONDS_PER_MILLISECOND,
  NANOSECONDS_PER_SECOND, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
  misc::{i64i128, u32i128, u32i64, u32u64},
};
use core::{
  cmp::Ordering,
  hash::{Hash, Hasher},
  ops::{Add, Neg, Sub},
};

/// Creates a new instance from the specified number of hours.
#[inline]
pub const fn hours(hours: i64) -> Result<SignedDuration, CalendarError> {
  let Some(seconds) = hours.checked_mul(u32i64(SECONDS_PER_HOUR)) else {
    return Err(CalendarError::ArithmeticOverflow);
  };
  SignedDuration::from_seconds(seconds)
}

/// Creates a new instance from the specified number of microseconds.
#[inline]
pub const fn microseconds(microseconds: i64) -> Result<SignedDuration, CalendarError> {
  SignedDuration::from_micros(microseconds)
}

/// Creates a new instance from the specified number of milliseconds.
#[inline]
pub const fn milliseconds(milliseconds: i64) -> Result<SignedDuration, CalendarError> {
  SignedDuration::from_millis(milliseconds)
}

/// Creates a new instance from the specified number of minutes.
#[inline]
pub const fn minutes(minutes: i64) -> Result<SignedDuration, CalendarError> {
  let Some(seconds) = minutes.checked_mul(u32i64(SECONDS_PER_MINUTE)) else {
    return Err(CalendarError::ArithmeticOverflow);
  };
  SignedDuration::from_seconds(seconds)
}

/// Creates a new instance from the specified number of nanoseconds.
#[inline]
pub const fn nanoseconds(nanoseconds: i64) -> SignedDuration {
  SignedDuration::from_nanos(nanoseconds)
}

/// Creates a new instance from the specified number of seconds.
#[inline]
pub const fn seconds(seconds: i64) -> Result<SignedDuration, CalendarError> {
  SignedDuration::from_seconds(seconds)
}

/// A span of time that can be negative.
///
/// The payload of each variant is the absolute value of the span, which means that the type
/// system already forbids a sign that doesn't match its magnitude. Every constructor and every
/// arithmetic operation represents zero as `Positive(Duration::ZERO)`. `Negative(Duration::ZERO)`
/// can still be spelled by hand and is considered equal to its positive counterpart.
///
/// Conversions into coarser units round towards negative infinity, i.e., `-1` nanosecond is `-1`
/// microsecond.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(into = "i128", try_from = "i128"))]
#[derive(Clone, Copy, Debug)]
pub enum SignedDuration {
  /// Span that goes forward in time.
  Positive(Duration),
  /// Span that goes backwards in time.
  Negative(Duration),
}

impl SignedDuration {
  /// Instance without intervals.
  pub const ZERO: Self = Self::Positive(Duration::ZERO);

  /// Creates a new instance from the specified number of microseconds.
  #[inline]
  pub const fn from_micros(micros: i64) -> Result<Self, CalendarError> {
    Self::from_count(micros, NANOSECONDS_PER_MICROSECOND)
  }

  /// Creates a new instance from the specified number of milliseconds.
  #[inline]
  pub const fn from_millis(millis: i64) -> Result<Self, CalendarError> {
    Self::from_count(millis, NANOSECONDS_PER_MILLISECOND)
  }

  /// Creates a new instance from the specified number of nanoseconds. Every `i64` fits.
  #[inline]
  pub const fn from_nanos(nanos: i64) -> Self {
    let magnitude = Duration::from_unsigned_nanos(nanos.unsigned_abs());
    if nanos < 0 { Self::Negative(magnitude) } else { Self::Positive(magnitude) }
  }

  /// Creates a new instance from the specified number of seconds.
  #[inline]
  pub const fn from_seconds(seconds: i64) -> Result<Self, CalendarError> {
    Self::from_count(seconds, NANOSECONDS_PER_SECOND)
  }

  /// Returns the magnitude.
  #[inline]
  pub const fn abs(self) -> Duration {
    match self {
      Self::Positive(elem) | Self::Negative(elem) => elem,
    }
  }

  /// Computes `self + other`, returning an error if the result can't be represented.
  #[inline]
  pub const fn checked_add(self, other: Self) -> Result<Self, CalendarError> {
    let Some(nanos) = self.to_nanos().checked_add(other.to_nanos()) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    Self::from_i128_nanos(nanos)
  }

  /// Computes `self - other`, returning an error if the result can't be represented.
  #[inline]
  pub const fn checked_sub(self, other: Self) -> Result<Self, CalendarError> {
    let Some(nanos) = self.to_nanos().checked_sub(other.to_nanos()) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    Self::from_i128_nanos(nanos)
  }

  /// If the span goes backwards in time. Zero is never negative.
  #[inline]
  pub const fn is_negative(self) -> bool {
    match self {
      Self::Positive(_) => false,
      Self::Negative(elem) => !elem.is_zero(),
    }
  }

  /// Returns `true` if there are no intervals.
  #[inline]
  pub const fn is_zero(self) -> bool {
    self.abs().is_zero()
  }

  /// Number of microseconds rounded towards negative infinity.
  #[inline]
  pub const fn to_micros(self) -> i128 {
    self.to_nanos().div_euclid(u32i128(NANOSECONDS_PER_MICROSECOND))
  }

  /// Number of milliseconds rounded towards negative infinity.
  #[inline]
  pub const fn to_millis(self) -> i128 {
    self.to_nanos().div_euclid(u32i128(NANOSECONDS_PER_MILLISECOND))
  }

  /// Signed number of nanoseconds.
  #[inline]
  pub const fn to_nanos(self) -> i128 {
    match self {
      Self::Positive(elem) => elem.to_nanos_i128(),
      Self::Negative(elem) => -elem.to_nanos_i128(),
    }
  }

  /// Number of seconds rounded towards negative infinity.
  #[inline]
  pub const fn to_seconds(self) -> i128 {
    self.to_nanos().div_euclid(u32i128(NANOSECONDS_PER_SECOND))
  }

  pub(crate) const fn from_i128_nanos(nanos: i128) -> Result<Self, CalendarError> {
    let abs = nanos.unsigned_abs();
    if abs > u64::MAX as u128 {
      return Err(CalendarError::ArithmeticOverflow);
    }
    #[expect(clippy::cast_possible_truncation, reason = "upper bound was checked above")]
    let magnitude = Duration::from_unsigned_nanos(abs as u64);
    Ok(if nanos < 0 { Self::Negative(magnitude) } else { Self::Positive(magnitude) })
  }

  const fn from_count(count: i64, ns_per_unit: u32) -> Result<Self, CalendarError> {
    let Some(ns) = count.unsigned_abs().checked_mul(u32u64(ns_per_unit)) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    let magnitude = Duration::from_unsigned_nanos(ns);
    Ok(if count < 0 { Self::Negative(magnitude) } else { Self::Positive(magnitude) })
  }
}

impl Add for SignedDuration {
  type Output = Self;

  #[inline]
  fn add(self, rhs: Self) -> Self::Output {
    match self.checked_add(rhs) {
      Ok(elem) => elem,
      Err(_err) => panic!("overflow when adding durations"),
    }
  }
}

impl Add<Duration> for SignedDuration {
  type Output = Self;

  #[inline]
  fn add(self, rhs: Duration) -> Self::Output {
    self + Self::Positive(rhs)
  }
}

impl Default for SignedDuration {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

impl Eq for SignedDuration {}

impl From<Duration> for SignedDuration {
  #[inline]
  fn from(from: Duration) -> Self {
    Self::Positive(from)
  }
}

impl From<SignedDuration> for i128 {
  #[inline]
  fn from(from: SignedDuration) -> Self {
    from.to_nanos()
  }
}

impl Hash for SignedDuration {
  #[inline]
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.to_nanos().hash(state);
  }
}

impl Neg for SignedDuration {
  type Output = Self;

  #[inline]
  fn neg(self) -> Self::Output {
    match self {
      Self::Positive(elem) if !elem.is_zero() => Self::Negative(elem),
      Self::Positive(_) => Self::ZERO,
      Self::Negative(elem) => Self::Positive(elem),
    }
  }
}

impl Ord for SignedDuration {
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    self.to_nanos().cmp(&other.to_nanos())
  }
}

impl PartialEq for SignedDuration {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.to_nanos() == other.to_nanos()
  }
}

impl PartialEq<Duration> for SignedDuration {
  #[inline]
  fn eq(&self, other: &Duration) -> bool {
    *self == Self::Positive(*other)
  }
}

impl PartialOrd for SignedDuration {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl PartialOrd<Duration> for SignedDuration {
  #[inline]
  fn partial_cmp(&self, other: &Duration) -> Option<Ordering> {
    Some(self.cmp(&Self::Positive(*other)))
  }
}

impl Sub for SignedDuration {
  type Output = Self;

  #[inline]
  fn sub(self, rhs: Self) -> Self::Output {
    match self.checked_sub(rhs) {
      Ok(elem) => elem,
      Err(_err) => panic!("overflow when subtracting durations"),
    }
  }
}

impl Sub<Duration> for SignedDuration {
  type Output = Self;

  #[inline]
  fn sub(self, rhs: Duration) -> Self::Output {
    self - Self::Positive(rhs)
  }
}

impl TryFrom<i128> for SignedDuration {
  type Error = CalendarError;

  #[inline]
  fn try_from(from: i128) -> Result<Self, Self::Error> {
    Self::from_i128_nanos(from)
  }
}

impl TryFrom<chrono::TimeDelta> for SignedDuration {
  type Error = CalendarError;

  #[inline]
  fn try_from(from: chrono::TimeDelta) -> Result<Self, Self::Error> {
    let seconds = i64i128(from.num_seconds());
    let Some(nanos) = seconds.checked_mul(u32i128(NANOSECONDS_PER_SECOND)) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    Self::from_i128_nanos(nanos.wrapping_add(i128::from(from.subsec_nanos())))
  }
}

impl TryFrom<SignedDuration> for chrono::TimeDelta {
  type Error = CalendarError;

  #[inline]
  fn try_from(from: SignedDuration) -> Result<Self, Self::Error> {
    let nanos = from.to_nanos();
    let Ok(seconds) = i64::try_from(nanos.div_euclid(u32i128(NANOSECONDS_PER_SECOND))) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    let Ok(subsec) = u32::try_from(nanos.rem_euclid(u32i128(NANOSECONDS_PER_SECOND))) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    chrono::TimeDelta::new(seconds, subsec).ok_or(CalendarError::ArithmeticOverflow)
  }
}

#[cfg(feature = "_proptest")]
#[cfg(test)]
mod _proptest {
  use crate::calendar::{Duration, SignedDuration};

  #[test_strategy::proptest]
  fn difference_plus_subtrahend_is_minuend(a: u64, b: u64) {
    let (a, b) = (Duration::from_unsigned_nanos(a), Duration::from_unsigned_nanos(b));
    assert_eq!((a - b) + b, SignedDuration::from(a));
  }

  #[test_strategy::proptest]
  fn total_order(x: i64, y: i64) {
    let (x, y) = (SignedDuration::from_nanos(x), SignedDuration::from_nanos(y));
    let outcomes = [x < y, x == y, x > y];
    assert_eq!(outcomes.into_iter().filter(|elem| *elem).count(), 1);
  }

  #[test_strategy::proptest]
  fn zero_is_canonical(a: u64) {
    let a = Duration::from_unsigned_nanos(a);
    assert!(matches!(a - a, SignedDuration::Positive(Duration::ZERO)));
    assert!(!(-(a - a)).is_negative());
  }
}
