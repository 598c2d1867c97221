//! Logs emitted while resolving a civil time. Try `RUST_LOG=trace`.

extern crate goodtime;

use goodtime::{
  calendar::{CivilSecond, CivilTime, Duration, Timezone},
  misc::tracing_tree_init,
};

fn main() -> goodtime::Result<()> {
  tracing_tree_init(Some("debug"))?;
  let tz = Timezone::from_tzdata_identifier("America/Sao_Paulo")?;
  let second = CivilSecond::from_fields(2018, 11, 4, 0, 30, 0)?;
  let _rslt = tz.civil_time_to_instant(CivilTime::new(second, Duration::ZERO)?)?;
  Ok(())
}
