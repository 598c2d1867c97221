use crate::calendar::Instant;

/// Source of the current absolute time.
///
/// Resolution logic never samples time by itself, which allows callers to inject deterministic
/// clocks in tests.
pub trait Clock {
  /// Samples the current instant.
  fn now(&self) -> Instant;
}

impl<T> Clock for &T
where
  T: Clock + ?Sized,
{
  #[inline]
  fn now(&self) -> Instant {
    (*self).now()
  }
}

/// Always returns the same instant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedClock(Instant);

impl FixedClock {
  /// New instance that will always return `instant`.
  #[inline]
  pub const fn new(instant: Instant) -> Self {
    Self(instant)
  }
}

impl Clock for FixedClock {
  #[inline]
  fn now(&self) -> Instant {
    self.0
  }
}

/// Wall clock of the host, see [`std::time::SystemTime`].
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
  #[inline]
  fn now(&self) -> Instant {
    let nanos = match std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
      Ok(elem) => i128::try_from(elem.as_nanos()).unwrap_or(i128::MAX),
      Err(err) => i128::try_from(err.duration().as_nanos()).map_or(i128::MIN, |elem| -elem),
    };
    Instant::from_unix_nanos_i128(nanos)
  }
}
