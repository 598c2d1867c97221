use crate::calendar::Instant;

/// Outcome of resolving a [`crate::calendar::CivilTime`] in a time zone.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CivilTimeInstant {
  /// The civil time happened exactly once.
  Unique(UniqueCivilTimeInstant),
  /// The civil time happened twice because clocks were set back.
  Repeated(RepeatedCivilTimeInstant),
  /// The civil time never happened because clocks were set forward.
  Skipped(SkippedCivilTimeInstant),
}

impl CivilTimeInstant {
  /// The single instant of an unambiguous civil time, if any.
  #[inline]
  pub const fn unique(&self) -> Option<Instant> {
    match self {
      Self::Unique(elem) => Some(elem.instant),
      Self::Repeated(_) | Self::Skipped(_) => None,
    }
  }
}

/// Civil time that maps to a single instant.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct UniqueCivilTimeInstant {
  instant: Instant,
}

impl UniqueCivilTimeInstant {
  pub(crate) const fn new(instant: Instant) -> Self {
    Self { instant }
  }

  /// The only instant.
  #[inline]
  pub const fn instant(&self) -> Instant {
    self.instant
  }
}

/// Civil time shown twice by a wall clock, once before the offset change and once after it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RepeatedCivilTimeInstant {
  pre_transition: Instant,
  post_transition: Instant,
  transition: Instant,
}

impl RepeatedCivilTimeInstant {
  pub(crate) const fn new(
    pre_transition: Instant,
    post_transition: Instant,
    transition: Instant,
  ) -> Self {
    Self { pre_transition, post_transition, transition }
  }

  /// First occurrence, under the old offset.
  #[inline]
  pub const fn pre_transition(&self) -> Instant {
    self.pre_transition
  }

  /// Second occurrence, under the new offset.
  #[inline]
  pub const fn post_transition(&self) -> Instant {
    self.post_transition
  }

  /// First instant of the new offset.
  #[inline]
  pub const fn transition(&self) -> Instant {
    self.transition
  }
}

/// Civil time that a wall clock never showed.
///
/// Both candidates are diagnostic values: `pre_transition` is what a clock that ignored the
/// offset change would mean and `post_transition` is what a clock that applied it too early
/// would mean.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SkippedCivilTimeInstant {
  pre_transition: Instant,
  post_transition: Instant,
  transition: Instant,
}

impl SkippedCivilTimeInstant {
  pub(crate) const fn new(
    pre_transition: Instant,
    post_transition: Instant,
    transition: Instant,
  ) -> Self {
    Self { pre_transition, post_transition, transition }
  }

  /// Candidate under the old offset. Lies after [`Self::transition`].
  #[inline]
  pub const fn pre_transition(&self) -> Instant {
    self.pre_transition
  }

  /// Candidate under the new offset. Lies before [`Self::transition`].
  #[inline]
  pub const fn post_transition(&self) -> Instant {
    self.post_transition
  }

  /// First instant of the new offset.
  #[inline]
  pub const fn transition(&self) -> Instant {
    self.transition
  }
}
