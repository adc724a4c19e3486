use colored::*;
use rentr_core::vehicle::{Vehicle, VehicleKind};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn cost(value: f64) -> ColoredString {
    format!("{value:.1}").color(colors::COST).bold()
}

pub fn daily_rate(kind: VehicleKind) -> ColoredString {
    format!("{:.1}/day", kind.daily_rate()).color(colors::RATE)
}

pub fn vehicle_to_details(vehicle: &Vehicle) -> Vec<Detail> {
    let availability: ColoredString = if vehicle.is_available() {
        "available".green()
    } else {
        "rented".red()
    };

    vec![
        ("ID".to_string(), vehicle.id().color(colors::VEHICLE_ID)),
        ("Kind".to_string(), vehicle.kind().to_string().normal()),
        ("Rate".to_string(), daily_rate(vehicle.kind())),
        (
            "Base rate".to_string(),
            format!("{:.1}", vehicle.base_rate()).color(colors::SEPARATOR),
        ),
        ("Status".to_string(), availability),
    ]
}
