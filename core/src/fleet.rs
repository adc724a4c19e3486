//! # Fleet Registry
//!
//! [`RentalAgency`] owns every vehicle for the whole run. Vehicles are kept in
//! registration order and are never removed.

use rentr_common::config::Config;
use tracing::{debug, warn};

use crate::error::{RentalError, Result};
use crate::reporter::{RentalEvent, Reporter};
use crate::vehicle::{Vehicle, VehicleHandle};

#[derive(Debug, Default)]
pub struct RentalAgency {
    fleet: Vec<Vehicle>,
    unique_ids: bool,
}

impl RentalAgency {
    /// An agency that accepts any registration, duplicate ids included.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(cfg: &Config) -> Self {
        Self {
            fleet: Vec::new(),
            unique_ids: cfg.strict,
        }
    }

    /// Appends `vehicle` to the fleet.
    ///
    /// Only fails when the agency was built with a strict [`Config`] and the
    /// id is already taken.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<()> {
        if self.unique_ids && self.find_vehicle_by_id(vehicle.id()).is_some() {
            warn!(id = vehicle.id(), "refusing duplicate vehicle id");
            return Err(RentalError::InvalidArgument(format!(
                "vehicle id {} is already registered",
                vehicle.id()
            )));
        }

        debug!(id = vehicle.id(), kind = %vehicle.kind(), "vehicle registered");
        self.fleet.push(vehicle);
        Ok(())
    }

    /// Reports one `Available` event per free vehicle, in registration order.
    pub fn list_available_vehicles(&self, reporter: &dyn Reporter) {
        for vehicle in self.available_vehicles() {
            reporter.report(&RentalEvent::available(vehicle));
        }
    }

    pub fn available_vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.fleet.iter().filter(|vehicle| vehicle.is_available())
    }

    /// First vehicle registered under `id`, if any.
    pub fn find_vehicle_by_id(&self, id: &str) -> Option<&Vehicle> {
        self.fleet.iter().find(|vehicle| vehicle.id() == id)
    }

    pub fn find_vehicle_by_id_mut(&mut self, id: &str) -> Option<&mut Vehicle> {
        self.fleet.iter_mut().find(|vehicle| vehicle.id() == id)
    }

    /// Exact vehicle behind `handle`, for fleets that share ids between vehicles.
    pub fn find_vehicle_by_handle_mut(&mut self, handle: VehicleHandle) -> Option<&mut Vehicle> {
        self.fleet.iter_mut().find(|vehicle| vehicle.handle() == handle)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.fleet
    }

    pub fn len(&self) -> usize {
        self.fleet.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fleet.is_empty()
    }
}
