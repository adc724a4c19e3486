use rentr_common::config::Config;
use rentr_core::scenario;

use crate::terminal::{format, print};

pub fn fleet(cfg: &Config) -> anyhow::Result<()> {
    let agency = scenario::populate_fleet(cfg)?;

    for (idx, vehicle) in agency.vehicles().iter().enumerate() {
        print::tree_head(idx, vehicle.model());
        print::as_tree_one_level(format::vehicle_to_details(vehicle));
        if idx + 1 != agency.len() {
            print::print("");
        }
    }
    Ok(())
}
