use clap::Parser;

pub(crate) fn init() -> goodtime::Result<()> {
  let args = Cli::parse();
  match args.commands {
    Commands::ToCivil(elem) => {
      println!("{}", crate::convert::to_civil(elem.zone.as_deref(), elem.unix_millis)?);
    }
    Commands::ToInstant(elem) => {
      let fields = (elem.year, elem.month, elem.day, elem.hour, elem.minute, elem.second);
      for line in crate::convert::to_instant(elem.zone.as_deref(), fields, elem.nanos)? {
        println!("{line}");
      }
    }
  }
  Ok(())
}

/// Conversions between absolute instants and civil times
#[derive(Debug, clap::Parser)]
#[command(author, long_about = None, name = "goodtime", version)]
struct Cli {
  #[command(subcommand)]
  commands: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
  ToCivil(ToCivil),
  ToInstant(ToInstant),
}

/// Civil time shown at the given instant
#[derive(Debug, clap::Args)]
struct ToCivil {
  /// Milliseconds since the UNIX epoch
  #[arg(allow_negative_numbers = true)]
  unix_millis: i64,
  /// IANA time zone. Defaults to `GOODTIME_TZ` or `TZ`
  #[arg(short = 'z', value_name = "Identifier")]
  zone: Option<String>,
}

/// Instants when the given civil time was shown
#[derive(Debug, clap::Args)]
struct ToInstant {
  #[arg(allow_negative_numbers = true)]
  year: i32,
  month: u8,
  day: u8,
  hour: u8,
  minute: u8,
  second: u8,
  /// Nanoseconds past `second`
  #[arg(default_value_t = 0)]
  nanos: i64,
  /// IANA time zone. Defaults to `GOODTIME_TZ` or `TZ`
  #[arg(short = 'z', value_name = "Identifier")]
  zone: Option<String>,
}
