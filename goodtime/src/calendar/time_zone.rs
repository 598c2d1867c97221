
mod fixed_offset;
mod offset_oracle;
mod transition_table;
#[cfg(feature = "tzdb")]
mod tzdb;
mod zone_vars;

use crate::calendar::{
  CalendarError, CivilTime, CivilTimeInstant, Duration, Instant, RepeatedCivilTimeInstant,
  SECONDS_PER_HOUR, SkippedCivilTimeInstant, UniqueCivilTimeInstant,
  misc::{u32i64, u32u64},
};
use arrayvec::ArrayVec;
#[cfg(feature = "tzdb")]
pub use chrono_tz::Tz;
pub use fixed_offset::FixedOffset;
pub use offset_oracle::OffsetOracle;
pub use transition_table::TransitionTable;
pub use zone_vars::ZoneVars;

/// Number of seconds scanned before and after a civil time when looking for offset changes.
pub const SEARCH_WINDOW: i64 = 38 * u32i64(SECONDS_PER_HOUR);

/// Region with identical civil time, described by an [`OffsetOracle`].
///
/// A time zone is not the same thing as a UTC offset, most regions switch between standard and
/// daylight saving offsets throughout the year.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Timezone<O> {
  oracle: O,
}

impl<O> Timezone<O> {
  /// Binds a time zone to the oracle that knows its offsets.
  #[inline]
  pub const fn new(oracle: O) -> Self {
    Self { oracle }
  }

  /// Underlying oracle.
  #[inline]
  pub const fn oracle(&self) -> &O {
    &self.oracle
  }
}

impl Timezone<FixedOffset> {
  /// Time zone that is always `offset` seconds away from UTC.
  #[inline]
  pub const fn fixed(offset: i32) -> Result<Self, CalendarError> {
    match FixedOffset::new(offset) {
      Ok(elem) => Ok(Self::new(elem)),
      Err(err) => Err(err),
    }
  }

  /// Coordinated Universal Time.
  #[inline]
  pub const fn utc() -> Self {
    Self::new(FixedOffset::UTC)
  }
}

impl<O> Timezone<O>
where
  O: OffsetOracle,
{
  /// Absolute instant when `civil_time` was shown by the clocks of this time zone.
  ///
  /// Civil times around an offset change can be [`CivilTimeInstant::Repeated`] or
  /// [`CivilTimeInstant::Skipped`]. Oracles that don't answer in the neighbourhood of
  /// `civil_time` or that report more than one change are rejected.
  #[inline]
  pub fn civil_time_to_instant(&self, civil_time: CivilTime) -> crate::Result<CivilTimeInstant> {
    let utc_ts = civil_time.second().timestamp_as_if_utc();
    let subsecond = civil_time.subsecond();
    let offsets = self.offsets_around(utc_ts)?;
    let at = |timestamp: i64| Instant::from_unix_seconds(timestamp) + subsecond;
    let rslt = match offsets.as_slice() {
      [] => return Err(CalendarError::MissingUtcOffsets.into()),
      [(offset, _)] => {
        CivilTimeInstant::Unique(UniqueCivilTimeInstant::new(at(local_ts(utc_ts, *offset)?)))
      }
      [(pre_offset, _), (post_offset, transition_ts)] => {
        let pre_ts = local_ts(utc_ts, *pre_offset)?;
        let post_ts = local_ts(utc_ts, *post_offset)?;
        let transition = Instant::from_unix_seconds(*transition_ts);
        match (pre_ts < *transition_ts, post_ts >= *transition_ts) {
          (true, true) => CivilTimeInstant::Repeated(RepeatedCivilTimeInstant::new(
            at(pre_ts),
            at(post_ts),
            transition,
          )),
          (true, false) => CivilTimeInstant::Unique(UniqueCivilTimeInstant::new(at(pre_ts))),
          (false, true) => CivilTimeInstant::Unique(UniqueCivilTimeInstant::new(at(post_ts))),
          (false, false) => CivilTimeInstant::Skipped(SkippedCivilTimeInstant::new(
            at(pre_ts),
            at(post_ts),
            transition,
          )),
        }
      }
      _ => return Err(CalendarError::TooManyUtcOffsets.into()),
    };
    _debug!(%civil_time, ?rslt, "Resolved civil time");
    Ok(rslt)
  }

  /// Civil time shown by the clocks of this time zone at `instant`. Always unambiguous.
  #[inline]
  pub fn instant_to_civil_time(&self, instant: Instant) -> crate::Result<CivilTime> {
    let Ok(timestamp) = i64::try_from(instant.to_unix_seconds()) else {
      return Err(CalendarError::InvalidTimestamp.into());
    };
    let second = self.oracle.civil_second(timestamp)?;
    let subsecond = Duration::from_unsigned_nanos(u32u64(instant.subsec_nanos()));
    Ok(CivilTime::new(second, subsecond)?)
  }

  // Consecutive offsets paired with the first second they apply to. A third offset aborts the
  // scan.
  fn offsets_around(&self, utc_ts: i64) -> crate::Result<ArrayVec<(i32, i64), 2>> {
    let Some(start) = utc_ts.checked_sub(SEARCH_WINDOW) else {
      return Err(CalendarError::ArithmeticOverflow.into());
    };
    let Some(end) = utc_ts.checked_add(SEARCH_WINDOW) else {
      return Err(CalendarError::ArithmeticOverflow.into());
    };
    let mut offsets = ArrayVec::new();
    for timestamp in start..end {
      let Some(offset) = self.oracle.utc_offset(timestamp) else {
        continue;
      };
      if offsets.last().is_some_and(|(last, _)| *last == offset) {
        continue;
      }
      _trace!(offset, timestamp, "New UTC offset");
      if offsets.try_push((offset, timestamp)).is_err() {
        return Err(CalendarError::TooManyUtcOffsets.into());
      }
    }
    Ok(offsets)
  }
}

fn local_ts(utc_ts: i64, offset: i32) -> Result<i64, CalendarError> {
  utc_ts.checked_sub(offset.into()).ok_or(CalendarError::ArithmeticOverflow)
}
