mod commands;
mod plot;
mod terminal;

use commands::{CommandLine, Commands, batch, check, single};
use kaprekar_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        max_iterations: commands.max_iterations,
        quiet: commands.quiet,
        no_banner: commands.no_banner,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Single { number } => {
            print::header("kaprekar routine", cfg.quiet);
            single::single(number, &cfg)
        }
        Commands::Batch { output, no_plot } => {
            print::header("analyzing all 4-digit numbers", cfg.quiet);
            let output = if no_plot { None } else { Some(output) };
            batch::batch(output.as_deref(), &cfg)
        }
        Commands::Check => {
            print::header("sanity checks", cfg.quiet);
            check::check(&cfg)
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
