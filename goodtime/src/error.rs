use crate::calendar::CalendarError;
use core::fmt::{Debug, Display, Formatter};

#[cfg(target_pointer_width = "64")]
const _: () = {
  assert!(size_of::<Error>() <= 24);
};

/// Grouped individual errors
#[derive(Debug)]
pub enum Error {
  // External - Misc
  //
  /// See [`tracing_subscriber::util::TryInitError`].
  #[cfg(feature = "_tracing-tree")]
  TryInitError(tracing_subscriber::util::TryInitError),

  // External - Std
  //
  /// See [`std::io::Error`].
  #[cfg(feature = "std")]
  IoError(std::io::Error),
  /// See [`core::num::TryFromIntError`].
  TryFromIntError(core::num::TryFromIntError),

  // Generic
  //
  /// A variable required by a `FromVars` implementation is missing.
  MissingVar(&'static str),

  // Internal
  //
  /// See [`CalendarError`].
  CalendarError(CalendarError),
}

impl Display for Error {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for Error {}

impl From<Error> for () {
  #[inline]
  fn from(_: Error) -> Self {}
}

#[cfg(feature = "_tracing-tree")]
impl From<tracing_subscriber::util::TryInitError> for Error {
  #[inline]
  fn from(from: tracing_subscriber::util::TryInitError) -> Self {
    Self::TryInitError(from)
  }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
  #[inline]
  fn from(from: std::io::Error) -> Self {
    Self::IoError(from)
  }
}

impl From<core::num::TryFromIntError> for Error {
  #[inline]
  fn from(from: core::num::TryFromIntError) -> Self {
    Self::TryFromIntError(from)
  }
}

// Internal

impl From<CalendarError> for Error {
  #[inline]
  fn from(from: CalendarError) -> Self {
    Self::CalendarError(from)
  }
}
