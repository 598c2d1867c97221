#[cfg(test)]
mod tests;

use crate::calendar::CalendarError;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use core::{
  fmt::{Display, Formatter},
  ops::Sub,
};

/// Year, month, day, hour, minute and second as shown by a calendar and a wall clock.
///
/// Uses the proleptic Gregorian calendar, years can be zero or negative. There is no notion of
/// time zone or absolute time, two instances can only be compared as calendar values. See
/// [`crate::calendar::Timezone`] to go from and to [`crate::calendar::Instant`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CivilSecond {
  local: NaiveDateTime,
}

impl CivilSecond {
  /// Validates and creates a new instance. Invalid dates like April 31 or clocks like 24:00:00
  /// are rejected.
  #[inline]
  pub fn from_fields(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
  ) -> Result<Self, CalendarError> {
    let Some(date) = NaiveDate::from_ymd_opt(year, month.into(), day.into()) else {
      return Err(CalendarError::InvalidCivilDate);
    };
    let Some(time) = NaiveTime::from_hms_opt(hour.into(), minute.into(), second.into()) else {
      return Err(CalendarError::InvalidCivilClock);
    };
    Ok(Self { local: NaiveDateTime::new(date, time) })
  }

  /// Advances `seconds` along the calendar. Negative values go backwards.
  #[inline]
  pub fn add_seconds(self, seconds: i64) -> Result<Self, CalendarError> {
    let delta = TimeDelta::try_seconds(seconds).ok_or(CalendarError::ArithmeticOverflow)?;
    let local = self.local.checked_add_signed(delta).ok_or(CalendarError::ArithmeticOverflow)?;
    Ok(Self { local })
  }

  /// Day of the month, from 1 to 31.
  #[expect(clippy::cast_possible_truncation, reason = "days are at most 31")]
  #[inline]
  pub fn day(&self) -> u8 {
    self.local.day() as u8
  }

  /// Hour of the day, from 0 to 23.
  #[expect(clippy::cast_possible_truncation, reason = "hours are at most 23")]
  #[inline]
  pub fn hour(&self) -> u8 {
    self.local.hour() as u8
  }

  /// Minute of the hour, from 0 to 59.
  #[expect(clippy::cast_possible_truncation, reason = "minutes are at most 59")]
  #[inline]
  pub fn minute(&self) -> u8 {
    self.local.minute() as u8
  }

  /// Month of the year, from 1 to 12.
  #[expect(clippy::cast_possible_truncation, reason = "months are at most 12")]
  #[inline]
  pub fn month(&self) -> u8 {
    self.local.month() as u8
  }

  /// Second of the minute, from 0 to 59.
  #[expect(clippy::cast_possible_truncation, reason = "seconds are at most 59")]
  #[inline]
  pub fn second(&self) -> u8 {
    self.local.second() as u8
  }

  /// Goes back `seconds` along the calendar. Negative values go forward.
  #[inline]
  pub fn sub_seconds(self, seconds: i64) -> Result<Self, CalendarError> {
    let delta = TimeDelta::try_seconds(seconds).ok_or(CalendarError::ArithmeticOverflow)?;
    let local = self.local.checked_sub_signed(delta).ok_or(CalendarError::ArithmeticOverflow)?;
    Ok(Self { local })
  }

  /// Proleptic Gregorian year.
  #[inline]
  pub fn year(&self) -> i32 {
    self.local.year()
  }

  pub(crate) fn from_utc_timestamp(timestamp: i64) -> Result<Self, CalendarError> {
    let Some(date_time) = chrono::DateTime::from_timestamp(timestamp, 0) else {
      return Err(CalendarError::InvalidTimestamp);
    };
    Ok(Self { local: date_time.naive_utc() })
  }

  /// UNIX timestamp that these fields would have in UTC. Only meaningful as the starting point
  /// of a time zone lookup.
  pub(crate) fn timestamp_as_if_utc(&self) -> i64 {
    self.local.and_utc().timestamp()
  }
}

impl Display for CivilSecond {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    let year = self.year();
    if (0..=9999).contains(&year) {
      write!(f, "{year:04}")?;
    } else {
      write!(f, "{year:+05}")?;
    }
    write!(
      f,
      "-{:02}-{:02}T{:02}:{:02}:{:02}",
      self.month(),
      self.day(),
      self.hour(),
      self.minute(),
      self.second()
    )
  }
}

/// Number of calendar seconds between both values. Not a [`crate::calendar::Duration`], civil
/// differences are not physical lengths of time.
impl Sub for CivilSecond {
  type Output = i64;

  #[inline]
  fn sub(self, rhs: Self) -> Self::Output {
    self.local.signed_duration_since(rhs.local).num_seconds()
  }
}
