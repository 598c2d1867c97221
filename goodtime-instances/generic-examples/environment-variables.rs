//! `EnvVars` allows the interactive reading of environment variables.

extern crate goodtime;

use goodtime::{
  calendar::{Instant, Timezone, ZoneVars},
  misc::EnvVars,
};

fn main() -> goodtime::Result<()> {
  let zone_vars = EnvVars::<ZoneVars>::from_process()?.finish();
  let tz = Timezone::from_zone_vars(&zone_vars)?;
  println!("{}: {}", tz.identifier(), tz.instant_to_civil_time(Instant::now())?);
  Ok(())
}
