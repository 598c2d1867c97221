use crate::calendar::{
  CalendarError, Duration, SignedDuration, hours, microseconds, milliseconds, minutes,
  nanoseconds, seconds,
};

#[test]
fn add_and_sub() {
  macro_rules! test {
    ($lhs:expr, $rhs:expr, $sum:expr, $difference:expr) => {
      let (lhs, rhs) = (SignedDuration::from_nanos($lhs), SignedDuration::from_nanos($rhs));
      assert_eq!(lhs + rhs, SignedDuration::from_nanos($sum));
      assert_eq!(rhs + lhs, SignedDuration::from_nanos($sum));
      assert_eq!(lhs - rhs, SignedDuration::from_nanos($difference));
      assert_eq!(lhs - rhs, -(rhs - lhs));
    };
  }

  test!(0, 0, 0, 0);
  test!(1000, 1, 1001, 999);
  test!(1000, -1, 999, 1001);
  test!(-1000, 1, -999, -1001);
  test!(-1000, -1, -1001, -999);
  test!(1, -1, 0, 2);
}

#[test]
fn add_and_sub_with_duration() {
  let one = Duration::from_nanos(1).unwrap();
  assert_eq!(SignedDuration::from_nanos(-1000) + one, SignedDuration::from_nanos(-999));
  assert_eq!(one + SignedDuration::from_nanos(-1000), SignedDuration::from_nanos(-999));
  assert_eq!(SignedDuration::from_nanos(-1000) - one, SignedDuration::from_nanos(-1001));
  assert_eq!(one - SignedDuration::from_nanos(-1000), SignedDuration::from_nanos(1001));
  assert_eq!(one - SignedDuration::from_nanos(1000), SignedDuration::from_nanos(-999));
}

#[test]
fn checked_arithmetic_overflows() {
  let max = SignedDuration::Positive(Duration::MAX);
  let min = SignedDuration::Negative(Duration::MAX);
  let one = SignedDuration::from_nanos(1);
  assert_eq!(max.checked_add(one), Err(CalendarError::ArithmeticOverflow));
  assert_eq!(min.checked_sub(one), Err(CalendarError::ArithmeticOverflow));
  assert_eq!(max.checked_add(min), Ok(SignedDuration::ZERO));
}

#[test]
fn chrono_time_delta() {
  macro_rules! test {
    ($nanos:expr) => {
      let duration = SignedDuration::from_nanos($nanos);
      let time_delta = chrono::TimeDelta::try_from(duration).unwrap();
      assert_eq!(time_delta, chrono::TimeDelta::nanoseconds($nanos));
      assert_eq!(SignedDuration::try_from(time_delta).unwrap(), duration);
    };
  }

  test!(0);
  test!(1);
  test!(-1);
  test!(1_500_000_001);
  test!(-1_500_000_001);
  assert_eq!(
    SignedDuration::try_from(chrono::TimeDelta::MAX),
    Err(CalendarError::ArithmeticOverflow)
  );
}

#[test]
fn cmp() {
  macro_rules! test {
    ($lhs:expr, $rhs:expr) => {
      assert!($lhs < $rhs);
      assert!($rhs > $lhs);
      assert_ne!($lhs, $rhs);
    };
  }

  test!(SignedDuration::from_nanos(-1), SignedDuration::from_nanos(0));
  test!(SignedDuration::from_nanos(-1_000_000), SignedDuration::from_nanos(-1));
  test!(SignedDuration::from_nanos(0), SignedDuration::from_nanos(1));
  test!(SignedDuration::from_nanos(i64::MIN), SignedDuration::from_nanos(i64::MAX));
  test!(SignedDuration::from_nanos(-1), Duration::ZERO);
  test!(SignedDuration::from_nanos(0), Duration::from_nanos(1).unwrap());
  test!(SignedDuration::Negative(Duration::MAX), Duration::ZERO);
}

#[test]
fn factories() {
  assert_eq!(SignedDuration::from_micros(-1).unwrap().to_nanos(), -1_000);
  assert_eq!(SignedDuration::from_millis(1).unwrap().to_nanos(), 1_000_000);
  assert_eq!(SignedDuration::from_seconds(-1).unwrap().to_nanos(), -1_000_000_000);
  assert_eq!(SignedDuration::from_nanos(i64::MIN).to_nanos(), -9_223_372_036_854_775_808);
  assert_eq!(SignedDuration::from_seconds(i64::MIN), Err(CalendarError::ArithmeticOverflow));
  assert_eq!(SignedDuration::from(Duration::MAX), SignedDuration::Positive(Duration::MAX));
}

#[test]
fn helpers() {
  assert_eq!(hours(17).unwrap().to_seconds(), 61_200);
  assert_eq!(hours(-17).unwrap().to_seconds(), -61_200);
  assert_eq!(minutes(17).unwrap().to_seconds(), 1_020);
  assert_eq!(minutes(-17).unwrap().to_seconds(), -1_020);
  assert_eq!(seconds(-17).unwrap().to_millis(), -17_000);
  assert_eq!(milliseconds(-17).unwrap().to_micros(), -17_000);
  assert_eq!(microseconds(17).unwrap().to_nanos(), 17_000);
  assert_eq!(nanoseconds(-17).to_nanos(), -17);
  assert_eq!(hours(i64::MAX), Err(CalendarError::ArithmeticOverflow));
  assert_eq!(hours(1).unwrap(), minutes(60).unwrap());
}

#[test]
fn neg() {
  assert_eq!(-SignedDuration::from_nanos(5), SignedDuration::from_nanos(-5));
  assert_eq!(-SignedDuration::from_nanos(-5), SignedDuration::from_nanos(5));
  assert!(matches!(-SignedDuration::ZERO, SignedDuration::Positive(Duration::ZERO)));
  assert!(matches!(
    -SignedDuration::Negative(Duration::ZERO),
    SignedDuration::Positive(Duration::ZERO)
  ));
}

#[test]
fn sign_and_magnitude() {
  assert!(SignedDuration::from_nanos(-1).is_negative());
  assert!(!SignedDuration::from_nanos(1).is_negative());
  assert!(!SignedDuration::Negative(Duration::ZERO).is_negative());
  assert_eq!(SignedDuration::from_nanos(-7).abs(), Duration::from_nanos(7).unwrap());
  assert!(SignedDuration::default().is_zero());
}

#[test]
fn truncating_conversions() {
  macro_rules! test {
    ($nanos:expr, $micros:expr, $millis:expr, $seconds:expr) => {
      let duration = SignedDuration::from_nanos($nanos);
      assert_eq!(duration.to_micros(), $micros);
      assert_eq!(duration.to_millis(), $millis);
      assert_eq!(duration.to_seconds(), $seconds);
    };
  }

  test!(59_001, 59, 0, 0);
  test!(999, 0, 0, 0);
  test!(0, 0, 0, 0);
  test!(-1, -1, -1, -1);
  test!(-999, -1, -1, -1);
  test!(-1_000, -1, -1, -1);
  test!(-1_001, -2, -1, -1);
  test!(-59_001, -60, -1, -1);
  test!(-999_999_999, -1_000_000, -1_000, -1);
  test!(-1_000_000_001, -1_000_001, -1_001, -2);
}

#[test]
fn zero_is_positive() {
  assert!(matches!(SignedDuration::from_nanos(0), SignedDuration::Positive(Duration::ZERO)));
  assert!(matches!(SignedDuration::from_seconds(0).unwrap(), SignedDuration::Positive(_)));
  assert!(matches!(
    SignedDuration::from_nanos(-3) + SignedDuration::from_nanos(3),
    SignedDuration::Positive(Duration::ZERO)
  ));
  assert_eq!(SignedDuration::Negative(Duration::ZERO), SignedDuration::Positive(Duration::ZERO));
}

#[cfg(feature = "serde")]
#[test]
fn serde() {
  let duration = SignedDuration::from_nanos(-1_500);
  let json = serde_json::to_string(&duration).unwrap();
  assert_eq!(json, "-1500");
  assert_eq!(serde_json::from_str::<SignedDuration>(&json).unwrap(), duration);
}
