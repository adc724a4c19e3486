mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, fleet, quote};
use rentr_common::info;
use rentr_core::scenario::ScenarioOptions;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);
    if cfg.strict {
        info!("strict mode: duplicate ids and rentals under one day are rejected");
    }

    let result = match commands.command {
        Commands::Demo {
            customer,
            vehicle_id,
            days,
        } => {
            print::header("rental walkthrough", cfg.quiet);
            let opts = ScenarioOptions {
                customer,
                vehicle_id,
                days,
            };
            demo::demo(opts, &cfg)
        }
        Commands::Quote { kind, days } => {
            print::header("rental quote", cfg.quiet);
            quote::quote(kind, days, &cfg)
        }
        Commands::Fleet => {
            print::header("demo fleet", cfg.quiet);
            fleet::fleet(&cfg)
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
