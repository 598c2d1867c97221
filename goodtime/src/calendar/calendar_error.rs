/// Calendar error
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CalendarError {
  // Generic
  //
  /// Underlying time structure couldn't hold the value generated during an arithmetic operation.
  ArithmeticOverflow,
  /// The calendar date (year, month and day) does not exist in the proleptic Gregorian calendar.
  InvalidCivilDate,
  /// The clock values (hour, minute and second) can not represent a single second of a day.
  InvalidCivilClock,
  /// The sub-second remainder of a civil time must be lesser than `1_000_000_000` nanoseconds.
  InvalidSubsecond {
    /// Invalid received number of nanoseconds
    received: u64,
  },
  /// The timestamp can not be represented as a calendar value.
  InvalidTimestamp,
  /// A duration is a magnitude and can not be created from a negative count.
  NegativeDuration {
    /// Invalid received count
    received: i64,
  },

  // Time zones
  //
  /// Transition rules must be non-empty and sorted by their starting timestamp.
  InvalidTransitionTable,
  /// UTC offsets must be within the `-86_399` ~ `86_399` range of seconds.
  InvalidUtcOffset {
    /// Invalid received number of seconds
    received: i32,
  },
  /// The offset oracle did not return any UTC offset around the requested civil time.
  MissingUtcOffsets,
  /// The offset oracle returned more than two different UTC offsets around the requested civil
  /// time.
  TooManyUtcOffsets,
  /// The identifier is not part of the tz database.
  UnknownTimeZone,
}

impl core::fmt::Display for CalendarError {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    <Self as core::fmt::Debug>::fmt(self, f)
  }
}

impl core::error::Error for CalendarError {}
