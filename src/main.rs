// SPDX-License-Identifier: MPL-2.0
use swipe_lens::app::{self, paths, Flags};
use swipe_lens::config::Preset;

const HELP: &str = "\
swipe_lens - touch gesture viewer demo

USAGE:
  swipe_lens [OPTIONS]

OPTIONS:
  --items N           Number of demo slides (default 6)
  --preset NAME       viewer | hero | carousel | controls
  --config-dir DIR    Directory holding settings.toml
  -h, --help          Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("swipe_lens=info"))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let items: Option<usize> = args.opt_value_from_str("--items").unwrap_or_else(|err| {
        log::warn!("ignoring --items: {}", err);
        None
    });
    let preset: Option<Preset> = args.opt_value_from_str("--preset").unwrap_or_else(|err| {
        log::warn!("ignoring --preset: {}", err);
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("ignoring --config-dir: {}", err);
        None
    });

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {:?}", remaining);
    }

    paths::init_cli_override(config_dir.clone());

    app::run(Flags {
        items,
        preset,
        config_dir,
    })
}
