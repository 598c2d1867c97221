//! Arithmetic

#![no_main]

use goodtime::calendar::{Duration, Instant, SignedDuration};

libfuzzer_sys::fuzz_target!(|data: (Instant, SignedDuration, Duration, Duration)| {
  let (instant, signed, a, b) = data;
  assert_eq!((a - b) + b, SignedDuration::from(a));
  assert!(!(a - a).is_negative());
  assert_eq!(signed.checked_add(-signed), Ok(SignedDuration::ZERO));
  if let Ok(shifted) = instant.checked_add(signed) {
    assert_eq!(shifted.duration_since(instant), Ok(signed));
    assert_eq!(shifted.checked_sub(signed), Ok(instant));
  }
  let nanos = instant.to_unix_nanos();
  assert!(instant.to_unix_seconds().saturating_mul(1_000_000_000) <= nanos);
  assert!(instant.to_unix_millis().saturating_mul(1_000_000) <= nanos);
  assert!(instant.to_unix_micros().saturating_mul(1_000) <= nanos);
});
