#[cfg(test)]
mod tests;

use crate::calendar::{
  CalendarError, NANOSECONDS_PER_MICROSECOND, NANOSECONDS_PER_MILLISECOND, NANOSECONDS_PER_SECOND,
  SignedDuration,
  misc::{u32u64, u64i128},
};
use core::{
  cmp::Ordering,
  ops::{Add, Sub},
};

/// A non-negative span of time with nanosecond precision.
///
/// Differently from [`SignedDuration`], this structure can not hold negative values, which makes
/// it suitable for timeouts, measurements or any other kind of magnitude. Subtracting two
/// instances always yields a [`SignedDuration`].
///
/// Conversions into coarser units truncate towards zero.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Duration {
  ns: u64,
}

impl Duration {
  /// Instance with the maximum allowed value.
  pub const MAX: Self = Self { ns: u64::MAX };
  /// Instance without intervals.
  pub const ZERO: Self = Self { ns: 0 };

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

  /// Creates a new instance from the specified number of nanoseconds.
  #[inline]
  pub const fn from_nanos(nanos: i64) -> Result<Self, CalendarError> {
    Self::from_count(nanos, 1)
  }

  /// Creates a new instance from the specified number of whole seconds.
  #[inline]
  pub const fn from_seconds(seconds: i64) -> Result<Self, CalendarError> {
    Self::from_count(seconds, NANOSECONDS_PER_SECOND)
  }

  /// Creates a new instance from an unsigned number of nanoseconds, which can't fail.
  #[inline]
  pub const fn from_unsigned_nanos(ns: u64) -> Self {
    Self { ns }
  }

  /// Computes `self + other`, returning an error if the result can't be represented.
  #[inline]
  pub const fn checked_add(self, other: Self) -> Result<Self, CalendarError> {
    let Some(ns) = self.ns.checked_add(other.ns) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    Ok(Self { ns })
  }

  /// Computes `self - other`. Differences of magnitudes are always representable.
  #[inline]
  pub const fn signed_sub(self, other: Self) -> SignedDuration {
    if self.ns >= other.ns {
      SignedDuration::Positive(Self { ns: self.ns.wrapping_sub(other.ns) })
    } else {
      SignedDuration::Negative(Self { ns: other.ns.wrapping_sub(self.ns) })
    }
  }

  /// Returns `true` if there are no intervals.
  #[inline]
  pub const fn is_zero(self) -> bool {
    self.ns == 0
  }

  /// Returns the number of _whole_ microseconds contained in this instance.
  #[expect(clippy::arithmetic_side_effects, reason = "divisor is a non-zero constant")]
  #[inline]
  pub const fn to_micros(self) -> u64 {
    self.ns / u32u64(NANOSECONDS_PER_MICROSECOND)
  }

  /// Returns the number of _whole_ milliseconds contained in this instance.
  #[expect(clippy::arithmetic_side_effects, reason = "divisor is a non-zero constant")]
  #[inline]
  pub const fn to_millis(self) -> u64 {
    self.ns / u32u64(NANOSECONDS_PER_MILLISECOND)
  }

  /// Returns the number of nanoseconds contained in this instance.
  #[inline]
  pub const fn to_nanos(self) -> u64 {
    self.ns
  }

  /// Returns the number of _whole_ seconds contained in this instance.
  #[expect(clippy::arithmetic_side_effects, reason = "divisor is a non-zero constant")]
  #[inline]
  pub const fn to_seconds(self) -> u64 {
    self.ns / u32u64(NANOSECONDS_PER_SECOND)
  }

  /// Returns the number of nanoseconds past the number of whole seconds.
  #[expect(clippy::arithmetic_side_effects, reason = "divisor is a non-zero constant")]
  #[expect(clippy::cast_possible_truncation, reason = "the remainder is lesser than one second")]
  #[inline]
  pub const fn subsec_nanos(self) -> u32 {
    (self.ns % u32u64(NANOSECONDS_PER_SECOND)) as u32
  }

  pub(crate) const fn to_nanos_i128(self) -> i128 {
    u64i128(self.ns)
  }

  const fn from_count(count: i64, ns_per_unit: u32) -> Result<Self, CalendarError> {
    if count < 0 {
      return Err(CalendarError::NegativeDuration { received: count });
    }
    let Some(ns) = count.unsigned_abs().checked_mul(u32u64(ns_per_unit)) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    Ok(Self { ns })
  }
}

impl Add for Duration {
  type Output = Self;

  #[inline]
  fn add(self, rhs: Self) -> Self::Output {
    match self.checked_add(rhs) {
      Ok(elem) => elem,
      Err(_err) => panic!("overflow when adding durations"),
    }
  }
}

impl Add<SignedDuration> for Duration {
  type Output = SignedDuration;

  #[inline]
  fn add(self, rhs: SignedDuration) -> Self::Output {
    SignedDuration::Positive(self) + rhs
  }
}

impl Sub for Duration {
  type Output = SignedDuration;

  #[inline]
  fn sub(self, rhs: Self) -> Self::Output {
    self.signed_sub(rhs)
  }
}

impl Sub<SignedDuration> for Duration {
  type Output = SignedDuration;

  #[inline]
  fn sub(self, rhs: SignedDuration) -> Self::Output {
    SignedDuration::Positive(self) - rhs
  }
}

impl PartialEq<SignedDuration> for Duration {
  #[inline]
  fn eq(&self, other: &SignedDuration) -> bool {
    SignedDuration::Positive(*self) == *other
  }
}

impl PartialOrd<SignedDuration> for Duration {
  #[inline]
  fn partial_cmp(&self, other: &SignedDuration) -> Option<Ordering> {
    Some(SignedDuration::Positive(*self).cmp(other))
  }
}

impl From<Duration> for core::time::Duration {
  #[inline]
  fn from(from: Duration) -> Self {
    Self::from_nanos(from.ns)
  }
}

impl TryFrom<core::time::Duration> for Duration {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: core::time::Duration) -> crate::Result<Self> {
    Ok(Self { ns: from.as_nanos().try_into()? })
  }
}
