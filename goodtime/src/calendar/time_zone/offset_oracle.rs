use crate::calendar::{CalendarError, CivilSecond};

/// Authority that knows the UTC offset of a time zone at any second.
///
/// Implementations must be cheap to query, the resolution of a single civil time can ask for
/// hundreds of thousands of offsets.
pub trait OffsetOracle {
  /// Offset in seconds, positive east of Greenwich, at the UNIX `timestamp`. `None` means that
  /// the oracle doesn't know.
  fn utc_offset(&self, timestamp: i64) -> Option<i32>;

  /// Calendar fields shown by local clocks at the UNIX `timestamp`.
  #[inline]
  fn civil_second(&self, timestamp: i64) -> crate::Result<CivilSecond> {
    let Some(offset) = self.utc_offset(timestamp) else {
      return Err(CalendarError::MissingUtcOffsets.into());
    };
    let Some(local_ts) = timestamp.checked_add(offset.into()) else {
      return Err(CalendarError::ArithmeticOverflow.into());
    };
    Ok(CivilSecond::from_utc_timestamp(local_ts)?)
  }
}

impl<T> OffsetOracle for &T
where
  T: OffsetOracle + ?Sized,
{
  #[inline]
  fn utc_offset(&self, timestamp: i64) -> Option<i32> {
    (*self).utc_offset(timestamp)
  }

  #[inline]
  fn civil_second(&self, timestamp: i64) -> crate::Result<CivilSecond> {
    (*self).civil_second(timestamp)
  }
}
