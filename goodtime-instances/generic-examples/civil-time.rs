//! Instants and civil times are different things. A [`Timezone`] converts one into the other.

extern crate goodtime;

use goodtime::calendar::{CivilSecond, CivilTime, Duration, Instant, Timezone, hours};

fn main() -> goodtime::Result<()> {
  let tz = Timezone::fixed(-3 * 3_600)?;
  let now = Instant::now();
  let civil_time = tz.instant_to_civil_time(now)?;
  println!("UTC-03:00 now: {civil_time}");

  let later = tz.instant_to_civil_time(now + hours(5)?)?;
  println!("Five hours later: {later}");
  println!("Calendar seconds in between: {}", later.second() - civil_time.second());

  let new_year = CivilTime::new(CivilSecond::from_fields(2030, 1, 1, 0, 0, 0)?, Duration::ZERO)?;
  if let Some(instant) = tz.civil_time_to_instant(new_year)?.unique() {
    println!("{new_year} happens at {} milliseconds since the UNIX epoch", instant.to_unix_millis());
  }
  Ok(())
}
