use crate::calendar::{CalendarError, FixedOffset, OffsetOracle};

/// Oracle backed by a list of `(since, offset)` rules, where each offset applies from the UNIX
/// timestamp `since` until the next rule.
///
/// Useful for embedded zones or for reproducing tricky transitions in tests. Timestamps before
/// the first rule have no known offset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransitionTable<'rules> {
  rules: &'rules [(i64, i32)],
}

impl<'rules> TransitionTable<'rules> {
  /// Rules must not be empty, must be sorted by strictly increasing timestamps and must only
  /// contain valid offsets.
  #[inline]
  pub const fn new(rules: &'rules [(i64, i32)]) -> Result<Self, CalendarError> {
    let [first, rest @ ..] = rules else {
      return Err(CalendarError::InvalidTransitionTable);
    };
    let mut prev_since = first.0;
    if let Err(err) = FixedOffset::new(first.1) {
      return Err(err);
    }
    let mut idx = 0;
    while idx < rest.len() {
      let (since, offset) = rest[idx];
      if since <= prev_since {
        return Err(CalendarError::InvalidTransitionTable);
      }
      if let Err(err) = FixedOffset::new(offset) {
        return Err(err);
      }
      prev_since = since;
      idx += 1;
    }
    Ok(Self { rules })
  }

  /// Validated rules.
  #[inline]
  pub const fn rules(&self) -> &'rules [(i64, i32)] {
    self.rules
  }
}

impl OffsetOracle for TransitionTable<'_> {
  #[inline]
  fn utc_offset(&self, timestamp: i64) -> Option<i32> {
    let idx = self.rules.partition_point(|(since, _)| *since <= timestamp);
    let (_, offset) = self.rules.get(idx.checked_sub(1)?)?;
    Some(*offset)
  }
}
