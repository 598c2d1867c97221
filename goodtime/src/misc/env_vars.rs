#[cfg(feature = "std")]
mod std;

use alloc::{string::String, vec::Vec};

/// Allows the interactive reading of environment variables.
#[derive(Debug)]
pub struct EnvVars<T>(T);

impl<T> EnvVars<T>
where
  T: FromVars,
{
  /// Constructs `T` through the deserialization of a literal `.env` data.
  ///
  /// Intended for debugging or tests.
  #[inline]
  pub fn from_env_data(data: &str) -> crate::Result<Self> {
    Ok(Self(T::from_vars(env(data))?))
  }

  /// Constructs itself based on `vars`.
  ///
  /// Intended for debugging or tests.
  #[inline]
  pub fn from_iterator(vars: impl IntoIterator<Item = (String, String)>) -> crate::Result<Self> {
    Ok(Self(T::from_vars(vars)?))
  }

  /// Unwraps `T`.
  #[inline]
  pub fn finish(self) -> T {
    self.0
  }
}

/// Constructs itself using a set of `(key, value)` string pairs.
pub trait FromVars: Sized {
  /// See [`FromVars`].
  fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> crate::Result<Self>;
}

fn env(data: &str) -> Vec<(String, String)> {
  let mut vars = Vec::new();
  for line in data.lines() {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
      continue;
    }
    let Some((key, value)) = line.split_once('=') else {
      continue;
    };
    vars.push((into_string(key), into_string(value)));
  }
  vars
}

fn into_string(str: &str) -> String {
  let str = str.trim();
  let unquoted = match str.as_bytes() {
    [b'\'', .., b'\''] | [b'"', .., b'"'] => str.get(1..str.len().wrapping_sub(1)).unwrap_or(str),
    _ => str,
  };
  String::from(unquoted)
}
