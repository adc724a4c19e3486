use rentr_common::{config::Config, warn};
use rentr_core::vehicle::VehicleKind;

use crate::terminal::{format, print};

const KEY_WIDTH: usize = 5;

pub fn quote(kind: VehicleKind, days: i32, cfg: &Config) -> anyhow::Result<()> {
    if cfg.strict && days <= 0 {
        anyhow::bail!("rental must last at least one day, got {days}");
    }
    if days <= 0 {
        warn!("{days} days gives a cost of zero or less");
    }

    print::aligned_line("Kind", kind.to_string(), KEY_WIDTH);
    print::aligned_line("Rate", format::daily_rate(kind), KEY_WIDTH);
    print::aligned_line("Days", days.to_string(), KEY_WIDTH);
    print::aligned_line("Cost", format::cost(kind.rental_cost(days)), KEY_WIDTH);
    Ok(())
}
