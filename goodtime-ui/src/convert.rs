use goodtime::{
  calendar::{CivilSecond, CivilTime, CivilTimeInstant, Duration, Instant, Timezone, ZoneVars},
  misc::EnvVars,
};

pub(crate) fn to_civil(zone: Option<&str>, unix_millis: i64) -> goodtime::Result<String> {
  let tz = timezone(zone)?;
  let civil_time = tz.instant_to_civil_time(Instant::from_unix_millis(unix_millis))?;
  Ok(format!("{civil_time} {}", tz.identifier()))
}

pub(crate) fn to_instant(
  zone: Option<&str>,
  (year, month, day, hour, minute, second): (i32, u8, u8, u8, u8, u8),
  nanos: i64,
) -> goodtime::Result<Vec<String>> {
  let tz = timezone(zone)?;
  let second = CivilSecond::from_fields(year, month, day, hour, minute, second)?;
  let civil_time = CivilTime::new(second, Duration::from_nanos(nanos)?)?;
  Ok(match tz.civil_time_to_instant(civil_time)? {
    CivilTimeInstant::Unique(elem) => vec![format!("unique {}", elem.instant().to_unix_nanos())],
    CivilTimeInstant::Repeated(elem) => vec![
      format!("repeated {}", elem.pre_transition().to_unix_nanos()),
      format!("repeated {}", elem.post_transition().to_unix_nanos()),
      format!("transition {}", elem.transition().to_unix_nanos()),
    ],
    CivilTimeInstant::Skipped(elem) => vec![
      format!("skipped {}", elem.pre_transition().to_unix_nanos()),
      format!("skipped {}", elem.post_transition().to_unix_nanos()),
      format!("transition {}", elem.transition().to_unix_nanos()),
    ],
  })
}

fn timezone(zone: Option<&str>) -> goodtime::Result<Timezone<goodtime::calendar::Tz>> {
  match zone {
    Some(elem) => Timezone::from_tzdata_identifier(elem),
    None => Timezone::from_zone_vars(&EnvVars::<ZoneVars>::from_process()?.finish()),
  }
}
