#[cfg(feature = "convert")]
mod clap;
#[cfg(feature = "convert")]
mod convert;

fn main() -> goodtime::Result<()> {
  #[cfg(feature = "dotenv")]
  let _rslt = dotenvy::dotenv();
  #[cfg(feature = "tracing")]
  goodtime::misc::tracing_tree_init(None)?;
  #[cfg(feature = "convert")]
  clap::init()?;
  Ok(())
}
