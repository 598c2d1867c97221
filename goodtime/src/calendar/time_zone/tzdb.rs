use crate::calendar::{CalendarError, OffsetOracle, Timezone, ZoneVars};
use chrono::{Offset, TimeZone};
use chrono_tz::Tz;

impl OffsetOracle for Tz {
  #[inline]
  fn utc_offset(&self, timestamp: i64) -> Option<i32> {
    let date_time = chrono::DateTime::from_timestamp(timestamp, 0)?;
    Some(self.offset_from_utc_datetime(&date_time.naive_utc()).fix().local_minus_utc())
  }
}

impl Timezone<Tz> {
  /// Time zone of the IANA tz database, like `America/Los_Angeles` or `Europe/Berlin`.
  #[inline]
  pub fn from_tzdata_identifier(identifier: &str) -> crate::Result<Self> {
    let Ok(tz) = identifier.parse::<Tz>() else {
      return Err(CalendarError::UnknownTimeZone.into());
    };
    Ok(Self::new(tz))
  }

  /// See [`ZoneVars`].
  #[inline]
  pub fn from_zone_vars(zone_vars: &ZoneVars) -> crate::Result<Self> {
    Self::from_tzdata_identifier(&zone_vars.identifier)
  }

  /// IANA identifier.
  #[inline]
  pub fn identifier(&self) -> &'static str {
    self.oracle().name()
  }
}
