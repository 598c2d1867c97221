use crate::misc::FromVars;
use alloc::string::String;

/// Time zone identifier read from the `GOODTIME_TZ` environment variable or, when absent, from
/// `TZ`.
///
/// A leading `:`, as allowed by POSIX for `TZ`, is removed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ZoneVars {
  /// IANA identifier like `Europe/Berlin`.
  pub identifier: String,
}

impl FromVars for ZoneVars {
  #[inline]
  fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> crate::Result<Self> {
    let mut goodtime_tz = None;
    let mut tz = None;
    for (key, value) in vars {
      match key.as_str() {
        "GOODTIME_TZ" => goodtime_tz = Some(value),
        "TZ" => tz = Some(value),
        _ => {}
      }
    }
    let Some(mut identifier) = goodtime_tz.or(tz) else {
      return Err(crate::Error::MissingVar("GOODTIME_TZ"));
    };
    if identifier.starts_with(':') {
      let _ = identifier.remove(0);
    }
    Ok(Self { identifier })
  }
}
