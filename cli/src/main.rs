mod commands;
mod terminal;

use commands::{CommandLine, map};
use dirmap_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);
    print::initialize();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    print::banner(&cfg);
    print::header("mapping directory", cfg.quiet);
    map::run(commands, &cfg)
}
