use crate::calendar::{Instant, Timezone};
use core::time::Duration;
use std::fmt::Write;
use tracing_tree::time::FormatTime;

/// Stamps log lines with the current UTC civil time, in milliseconds.
#[derive(Debug)]
pub struct TracingTreeTimer;

impl FormatTime for TracingTreeTimer {
  #[inline]
  fn format_time(&self, w: &mut impl Write) -> core::fmt::Result {
    let Ok(civil_time) = Timezone::utc().instant_to_civil_time(Instant::now()) else {
      return Ok(());
    };
    let millis = civil_time.subsecond().to_millis();
    w.write_fmt(format_args!("{}.{millis:03}Z", civil_time.second()))
  }

  #[inline]
  fn style_timestamp(&self, _: bool, elapsed: Duration, w: &mut impl Write) -> std::fmt::Result {
    let millis = elapsed.as_millis();
    let secs = elapsed.as_secs();
    let (num, unit) = if millis < 1000 {
      (u64::try_from(millis).unwrap_or(u64::MAX), "ms")
    } else if secs < 60 {
      (secs, "s ")
    } else {
      (secs / 60, "m ")
    };
    w.write_fmt(format_args!("{num:>3}{unit}"))
  }
}
