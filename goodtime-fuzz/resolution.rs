//! Resolution of civil times around a single offset change.

#![no_main]

use goodtime::calendar::{CivilTimeInstant, Instant, Timezone, TransitionTable};

const HORIZON: i64 = 4_000_000_000;
const MAX_OFFSET: i32 = 14 * 3_600;

libfuzzer_sys::fuzz_target!(|data: (i64, i64, i32, i32, u32)| {
  let (seconds, transition, pre_offset, post_offset, nanos) = data;
  let seconds = seconds.rem_euclid(HORIZON);
  let transition = transition.rem_euclid(HORIZON).max(1);
  let rules = [
    (0, pre_offset.rem_euclid(2 * MAX_OFFSET + 1) - MAX_OFFSET),
    (transition, post_offset.rem_euclid(2 * MAX_OFFSET + 1) - MAX_OFFSET),
  ];
  let Ok(table) = TransitionTable::new(&rules) else {
    return;
  };
  let tz = Timezone::new(table);
  let instant = Instant::from_unix_nanos_i128(
    Instant::from_unix_seconds(seconds).to_unix_nanos() + i128::from(nanos % 1_000_000_000),
  );
  let Ok(civil_time) = tz.instant_to_civil_time(instant) else {
    return;
  };
  match tz.civil_time_to_instant(civil_time) {
    Ok(CivilTimeInstant::Unique(elem)) => assert_eq!(elem.instant(), instant),
    Ok(CivilTimeInstant::Repeated(elem)) => {
      assert!(elem.pre_transition() == instant || elem.post_transition() == instant);
    }
    Ok(CivilTimeInstant::Skipped(_)) | Err(_) => panic!("{civil_time} was observed at {instant:?}"),
  }
});
