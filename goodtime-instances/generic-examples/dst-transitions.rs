//! Wall clocks in Berlin skip one hour in March and repeat one hour in October.

extern crate goodtime;

use goodtime::calendar::{CivilSecond, CivilTime, CivilTimeInstant, Duration, Timezone};

fn main() -> goodtime::Result<()> {
  let tz = Timezone::from_tzdata_identifier("Europe/Berlin")?;
  for (month, day) in [(3, 29), (10, 25)] {
    let second = CivilSecond::from_fields(2026, month, day, 2, 30, 0)?;
    let civil_time = CivilTime::new(second, Duration::ZERO)?;
    match tz.civil_time_to_instant(civil_time)? {
      CivilTimeInstant::Unique(elem) => {
        println!("{civil_time} happened once at {:?}", elem.instant());
      }
      CivilTimeInstant::Repeated(elem) => {
        println!(
          "{civil_time} happened twice, at {:?} and at {:?}",
          elem.pre_transition(),
          elem.post_transition()
        );
      }
      CivilTimeInstant::Skipped(elem) => {
        let shown = tz.instant_to_civil_time(elem.transition())?;
        println!("{civil_time} never happened, clocks jumped to {shown}");
      }
    }
  }
  Ok(())
}
