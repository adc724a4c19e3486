pub mod demo;
pub mod fleet;
pub mod quote;

use clap::{ArgAction, Parser, Subcommand};
use rentr_common::config::Config;
use rentr_core::vehicle::VehicleKind;

#[derive(Parser)]
#[command(name = "rentr")]
#[command(about = "A tiny in-memory vehicle rental ledger.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less decoration; repeat for even less
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reject duplicate vehicle ids and rentals shorter than one day
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the rent and return walkthrough on the demo fleet
    #[command(alias = "d")]
    Demo {
        /// Name of the renting customer
        #[arg(long, default_value = "Alice")]
        customer: String,
        /// Id of the vehicle to rent
        #[arg(long = "vehicle", default_value = "C001")]
        vehicle_id: String,
        /// Length of the rental in days
        #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
        days: i32,
    },
    /// Price a rental for a vehicle kind
    #[command(alias = "q")]
    Quote {
        /// car, motorcycle (or bike), truck
        kind: VehicleKind,
        #[arg(allow_negative_numbers = true)]
        days: i32,
    },
    /// Show the demo fleet
    #[command(alias = "f")]
    Fleet,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
            strict: self.strict,
        }
    }
}
