use crate::calendar::{CalendarError, Duration, SignedDuration};

#[test]
fn add() {
  macro_rules! test {
    ($lhs:expr, $rhs:expr, $rslt:expr) => {
      assert_eq!(Duration::from_nanos($lhs).unwrap() + Duration::from_nanos($rhs).unwrap(), $rslt);
      assert_eq!(Duration::from_nanos($rhs).unwrap() + Duration::from_nanos($lhs).unwrap(), $rslt);
    };
  }

  test!(0, 0, Duration::ZERO);
  test!(1000, 1, Duration::from_nanos(1001).unwrap());
  test!(999, 1, Duration::from_micros(1).unwrap());
  test!(500_000, 500_000, Duration::from_millis(1).unwrap());
}

#[test]
fn checked_add_overflows() {
  assert_eq!(
    Duration::MAX.checked_add(Duration::from_nanos(1).unwrap()),
    Err(CalendarError::ArithmeticOverflow)
  );
  assert_eq!(Duration::MAX.checked_add(Duration::ZERO), Ok(Duration::MAX));
}

#[test]
fn cmp_with_signed_duration() {
  let one = Duration::from_nanos(1).unwrap();
  assert!(SignedDuration::from_nanos(-1) < Duration::ZERO);
  assert!(SignedDuration::from_nanos(-1_000_000) < one);
  assert!(Duration::ZERO < SignedDuration::from_nanos(1));
  assert!(one > SignedDuration::from_nanos(0));
  assert!(one == SignedDuration::from_nanos(1));
  assert!(SignedDuration::from_nanos(1) == one);
  assert!(Duration::ZERO == SignedDuration::Negative(Duration::ZERO));
}

#[test]
fn core_duration() {
  let duration = Duration::from_millis(1_500).unwrap();
  let core_duration = core::time::Duration::from(duration);
  assert_eq!(core_duration, core::time::Duration::from_millis(1_500));
  assert_eq!(Duration::try_from(core_duration).unwrap(), duration);
  assert!(Duration::try_from(core::time::Duration::MAX).is_err());
}

#[test]
fn factories() {
  assert_eq!(Duration::from_micros(1).unwrap().to_nanos(), 1_000);
  assert_eq!(Duration::from_millis(1).unwrap().to_nanos(), 1_000_000);
  assert_eq!(Duration::from_seconds(1).unwrap().to_nanos(), 1_000_000_000);
  assert_eq!(Duration::from_nanos(i64::MAX).unwrap().to_nanos(), 9_223_372_036_854_775_807);
  assert_eq!(Duration::from_unsigned_nanos(u64::MAX), Duration::MAX);
}

#[test]
fn factories_reject_negative_counts() {
  assert_eq!(Duration::from_nanos(-1), Err(CalendarError::NegativeDuration { received: -1 }));
  assert_eq!(Duration::from_micros(-2), Err(CalendarError::NegativeDuration { received: -2 }));
  assert_eq!(Duration::from_millis(-3), Err(CalendarError::NegativeDuration { received: -3 }));
  assert_eq!(
    Duration::from_seconds(i64::MIN),
    Err(CalendarError::NegativeDuration { received: i64::MIN })
  );
}

#[test]
fn factories_reject_overflows() {
  assert_eq!(Duration::from_seconds(i64::MAX), Err(CalendarError::ArithmeticOverflow));
  assert_eq!(Duration::from_millis(i64::MAX), Err(CalendarError::ArithmeticOverflow));
}

#[test]
fn sub() {
  macro_rules! test {
    ($lhs:expr, $rhs:expr, $rslt:expr) => {
      assert_eq!(
        Duration::from_nanos($lhs).unwrap() - Duration::from_nanos($rhs).unwrap(),
        SignedDuration::from_nanos($rslt)
      );
    };
  }

  test!(0, 0, 0);
  test!(1000, 1, 999);
  test!(1, 1000, -999);
  test!(i64::MAX, 0, i64::MAX);
  test!(0, i64::MAX, -i64::MAX);
  assert!(matches!(Duration::ZERO - Duration::ZERO, SignedDuration::Positive(Duration::ZERO)));
  assert_eq!(Duration::ZERO - Duration::MAX, SignedDuration::Negative(Duration::MAX));
}

#[test]
fn subsec_nanos() {
  assert_eq!(Duration::from_nanos(1_999_999_999).unwrap().subsec_nanos(), 999_999_999);
  assert_eq!(Duration::from_seconds(7).unwrap().subsec_nanos(), 0);
}

#[test]
fn truncating_conversions() {
  macro_rules! test {
    ($nanos:expr, $micros:expr, $millis:expr, $seconds:expr) => {
      let duration = Duration::from_nanos($nanos).unwrap();
      assert_eq!(duration.to_micros(), $micros);
      assert_eq!(duration.to_millis(), $millis);
      assert_eq!(duration.to_seconds(), $seconds);
    };
  }

  test!(0, 0, 0, 0);
  test!(999, 0, 0, 0);
  test!(1_000, 1, 0, 0);
  test!(59_001, 59, 0, 0);
  test!(59_999, 59, 0, 0);
  test!(999_999_999, 999_999, 999, 0);
  test!(1_000_000_000, 1_000_000, 1_000, 1);
  test!(3_600_000_000_001, 3_600_000_000, 3_600_000, 3_600);
}
