// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_folio: bilingual personal portfolio

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <CODE>         Language for this session only (en, es)
  --config-dir <DIR>    Directory holding settings.toml
  --i18n-dir <DIR>      Directory holding en.toml and es.toml text tables
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let leftover = args.finish();
    if !leftover.is_empty() {
        tracing::warn!(?leftover, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
