use crate::misc::{EnvVars, FromVars, env_vars::env};
use std::{fs, path::Path};

impl<T> EnvVars<T>
where
  T: FromVars,
{
  /// Constructs `T` through the deserialization of the passed `.env` file.
  ///
  /// Intended for development purposes.
  #[inline]
  pub fn from_env_path<P>(path: P) -> crate::Result<Self>
  where
    P: AsRef<Path>,
  {
    Ok(Self(T::from_vars(env(&fs::read_to_string(path)?))?))
  }

  /// Constructs `T` according to all the environment variables of the current process.
  ///
  /// Variables whose names or values aren't valid UTF-8 are ignored.
  #[inline]
  pub fn from_process() -> crate::Result<Self> {
    let vars = std::env::vars_os()
      .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
    Ok(Self(T::from_vars(vars)?))
  }
}
