//! Absolute time, civil time and the time zones that map one into the other.
//!
//! [`Instant`], [`Duration`] and [`SignedDuration`] form a small algebra where mixing up signs or
//! units is a compile-time error. [`CivilSecond`] and [`CivilTime`] are plain calendar values
//! without any notion of absolute time and [`Timezone`] is the only bridge between both worlds.

mod calendar_error;
mod civil_second;
mod civil_time;
mod civil_time_instant;
mod clock;
mod duration;
mod instant;
mod misc;
mod signed_duration;
mod time_zone;
#[cfg(feature = "_tracing-tree")]
mod tracing_tree_timer;

pub use calendar_error::CalendarError;
pub use civil_second::CivilSecond;
pub use civil_time::CivilTime;
pub use civil_time_instant::{
  CivilTimeInstant, RepeatedCivilTimeInstant, SkippedCivilTimeInstant, UniqueCivilTimeInstant,
};
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, FixedClock};
pub use duration::Duration;
pub use instant::Instant;
pub use signed_duration::{
  SignedDuration, hours, microseconds, milliseconds, minutes, nanoseconds, seconds,
};
pub use time_zone::*;
#[cfg(feature = "_tracing-tree")]
pub use tracing_tree_timer::TracingTreeTimer;

pub(crate) const NANOSECONDS_PER_MICROSECOND: u32 = 1_000;
pub(crate) const NANOSECONDS_PER_MILLISECOND: u32 = 1_000_000;
pub(crate) const NANOSECONDS_PER_SECOND: u32 = 1_000_000_000;
pub(crate) const SECONDS_PER_DAY: u32 = 86_400;
pub(crate) const SECONDS_PER_HOUR: u32 = 3_600;
pub(crate) const SECONDS_PER_MINUTE: u32 = 60;
