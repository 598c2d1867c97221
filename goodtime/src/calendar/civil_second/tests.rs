use crate::calendar::{CalendarError, CivilSecond, CivilTime, Duration};
use alloc::string::ToString;

fn instance(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> CivilSecond {
  CivilSecond::from_fields(year, month, day, hour, minute, second).unwrap()
}

#[test]
fn add_and_sub_seconds() {
  macro_rules! test {
    ($lhs:expr, $seconds:expr, $rslt:expr) => {
      assert_eq!($lhs.add_seconds($seconds).unwrap(), $rslt);
      assert_eq!($lhs.sub_seconds(-$seconds).unwrap(), $rslt);
      assert_eq!($rslt - $lhs, $seconds);
    };
  }

  test!(instance(2026, 3, 29, 1, 59, 59), 1, instance(2026, 3, 29, 2, 0, 0));
  test!(instance(2025, 12, 31, 23, 59, 59), 1, instance(2026, 1, 1, 0, 0, 0));
  test!(instance(2024, 2, 28, 12, 0, 0), 86_400, instance(2024, 2, 29, 12, 0, 0));
  test!(instance(2023, 2, 28, 12, 0, 0), 86_400, instance(2023, 3, 1, 12, 0, 0));
  test!(instance(1, 1, 1, 0, 0, 0), -1, instance(0, 12, 31, 23, 59, 59));
  test!(instance(2026, 10, 25, 2, 10, 0), 0, instance(2026, 10, 25, 2, 10, 0));
}

#[test]
fn add_seconds_overflows() {
  assert_eq!(
    instance(2026, 1, 1, 0, 0, 0).add_seconds(i64::MAX),
    Err(CalendarError::ArithmeticOverflow)
  );
  assert_eq!(
    instance(2026, 1, 1, 0, 0, 0).sub_seconds(i64::MAX / 1_000),
    Err(CalendarError::ArithmeticOverflow)
  );
}

#[test]
fn display() {
  assert_eq!(instance(2026, 2, 4, 20, 25, 35).to_string(), "2026-02-04T20:25:35");
  assert_eq!(instance(7, 1, 2, 3, 4, 5).to_string(), "0007-01-02T03:04:05");
  assert_eq!(instance(-44, 3, 15, 0, 0, 0).to_string(), "-0044-03-15T00:00:00");
  let second = instance(2026, 10, 25, 2, 10, 0);
  assert_eq!(CivilTime::from(second).to_string(), "2026-10-25T02:10:00");
  let subsecond = Duration::from_millis(222).unwrap();
  assert_eq!(CivilTime::new(second, subsecond).unwrap().to_string(), "2026-10-25T02:10:00.222");
  let subsecond = Duration::from_nanos(999_999_999).unwrap();
  assert_eq!(
    CivilTime::new(second, subsecond).unwrap().to_string(),
    "2026-10-25T02:10:00.999999999"
  );
}

#[test]
fn fields() {
  let elem = instance(2026, 2, 4, 20, 25, 35);
  assert_eq!(
    (elem.year(), elem.month(), elem.day(), elem.hour(), elem.minute(), elem.second()),
    (2026, 2, 4, 20, 25, 35)
  );
}

#[test]
fn invalid_fields() {
  assert_eq!(CivilSecond::from_fields(2026, 4, 31, 0, 0, 0), Err(CalendarError::InvalidCivilDate));
  assert_eq!(CivilSecond::from_fields(2025, 2, 29, 0, 0, 0), Err(CalendarError::InvalidCivilDate));
  assert_eq!(CivilSecond::from_fields(2026, 13, 1, 0, 0, 0), Err(CalendarError::InvalidCivilDate));
  assert_eq!(CivilSecond::from_fields(2026, 0, 1, 0, 0, 0), Err(CalendarError::InvalidCivilDate));
  assert_eq!(CivilSecond::from_fields(2026, 1, 1, 24, 0, 0), Err(CalendarError::InvalidCivilClock));
  assert_eq!(CivilSecond::from_fields(2026, 1, 1, 0, 60, 0), Err(CalendarError::InvalidCivilClock));
  assert_eq!(
    CivilSecond::from_fields(2016, 12, 31, 23, 59, 60),
    Err(CalendarError::InvalidCivilClock)
  );
}

#[test]
fn invalid_subsecond() {
  let second = instance(2026, 1, 1, 0, 0, 0);
  assert_eq!(
    CivilTime::new(second, Duration::from_seconds(1).unwrap()),
    Err(CalendarError::InvalidSubsecond { received: 1_000_000_000 })
  );
  assert!(CivilTime::new(second, Duration::from_nanos(999_999_999).unwrap()).is_ok());
}

#[test]
fn ordering() {
  let second = instance(2026, 1, 1, 0, 0, 0);
  let early = CivilTime::new(second, Duration::from_nanos(999).unwrap()).unwrap();
  let late = CivilTime::from(second.add_seconds(1).unwrap());
  assert!(early < late);
  assert!(instance(-1, 1, 1, 0, 0, 0) < instance(0, 1, 1, 0, 0, 0));
}

#[test]
fn utc_timestamps() {
  assert_eq!(instance(1970, 1, 1, 0, 0, 0).timestamp_as_if_utc(), 0);
  assert_eq!(instance(1969, 12, 31, 23, 59, 59).timestamp_as_if_utc(), -1);
  assert_eq!(instance(2026, 3, 29, 2, 15, 0).timestamp_as_if_utc(), 1_774_750_500);
  assert_eq!(
    CivilSecond::from_utc_timestamp(1_774_750_500).unwrap(),
    instance(2026, 3, 29, 2, 15, 0)
  );
  assert_eq!(CivilSecond::from_utc_timestamp(i64::MAX), Err(CalendarError::InvalidTimestamp));
}
