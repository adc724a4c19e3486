//! # Demo Scenario
//!
//! Registers one vehicle of each kind, rents one of them out, returns it, and
//! lists the free vehicles after every step.

use rentr_common::config::Config;
use tracing::info_span;

use crate::customer::Customer;
use crate::error::{RentalError, Result};
use crate::fleet::RentalAgency;
use crate::reporter::{RentalEvent, Reporter};
use crate::vehicle::{Vehicle, VehicleKind};

pub const DEMO_FLEET: [(VehicleKind, &str, &str, f64); 3] = [
    (VehicleKind::Car, "C001", "Sedan", 50.0),
    (VehicleKind::Motorcycle, "M001", "Sport Bike", 30.0),
    (VehicleKind::Truck, "T001", "Freight Truck", 100.0),
];

#[derive(Debug, Clone)]
pub struct ScenarioOptions {
    pub customer: String,
    pub vehicle_id: String,
    pub days: i32,
}

impl Default for ScenarioOptions {
    fn default() -> Self {
        Self {
            customer: String::from("Alice"),
            vehicle_id: String::from("C001"),
            days: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSummary {
    pub customer: String,
    pub vehicle_id: String,
    pub model: String,
    pub days: i32,
    pub cost: f64,
    pub fleet_size: usize,
}

pub fn populate_fleet(cfg: &Config) -> Result<RentalAgency> {
    let mut agency = RentalAgency::with_config(cfg);
    for (kind, id, model, base_rate) in DEMO_FLEET {
        agency.add_vehicle(Vehicle::new(kind, id, model, base_rate)?)?;
    }
    Ok(agency)
}

pub fn run(cfg: &Config, opts: &ScenarioOptions, reporter: &dyn Reporter) -> Result<ScenarioSummary> {
    let _span = info_span!("scenario", customer = %opts.customer).entered();

    let mut agency = populate_fleet(cfg)?;
    let mut customer = Customer::with_config(opts.customer.as_str(), cfg);

    reporter.report(&RentalEvent::section("Available Vehicles"));
    agency.list_available_vehicles(reporter);

    let vehicle = agency
        .find_vehicle_by_id_mut(&opts.vehicle_id)
        .ok_or_else(|| RentalError::VehicleNotFound(opts.vehicle_id.clone()))?;
    let cost = customer.rent_vehicle(vehicle, opts.days, reporter)?;
    let model = vehicle.model().to_string();

    reporter.report(&RentalEvent::section("Available Vehicles After Renting"));
    agency.list_available_vehicles(reporter);

    let vehicle = agency
        .find_vehicle_by_id_mut(&opts.vehicle_id)
        .ok_or_else(|| RentalError::VehicleNotFound(opts.vehicle_id.clone()))?;
    customer.return_vehicle(vehicle, reporter)?;

    reporter.report(&RentalEvent::section("Available Vehicles After Returning"));
    agency.list_available_vehicles(reporter);

    Ok(ScenarioSummary {
        customer: opts.customer.clone(),
        vehicle_id: opts.vehicle_id.clone(),
        model,
        days: opts.days,
        cost,
        fleet_size: agency.len(),
    })
}
