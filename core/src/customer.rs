//! # Customer
//!
//! Tracks the vehicles a person currently holds. Vehicles are referenced by
//! [`VehicleHandle`]; the [`crate::fleet::RentalAgency`] stays their owner.

use rentr_common::config::Config;
use tracing::{debug, warn};

use crate::error::{RentalError, Result};
use crate::reporter::{RentalEvent, Reporter};
use crate::vehicle::{Vehicle, VehicleHandle};

#[derive(Debug, Clone)]
pub struct Customer {
    name: String,
    /// Vehicles held right now, in rental order. Emptied on return.
    rental_history: Vec<VehicleHandle>,
    positive_days: bool,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rental_history: Vec::new(),
            positive_days: false,
        }
    }

    pub fn with_config(name: impl Into<String>, cfg: &Config) -> Self {
        Self {
            positive_days: cfg.strict,
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rental_history(&self) -> &[VehicleHandle] {
        &self.rental_history
    }

    pub fn holds(&self, vehicle: &Vehicle) -> bool {
        self.rental_history.contains(&vehicle.handle())
    }

    /// Takes `vehicle` for `days` and returns the cost of the rental.
    ///
    /// Fails with [`RentalError::VehicleUnavailable`] if someone already holds it.
    /// A customer built from a strict [`Config`] first rejects `days <= 0` with
    /// [`RentalError::InvalidArgument`].
    pub fn rent_vehicle(
        &mut self,
        vehicle: &mut Vehicle,
        days: i32,
        reporter: &dyn Reporter,
    ) -> Result<f64> {
        if self.positive_days && days <= 0 {
            return Err(RentalError::InvalidArgument(format!(
                "rental of {} must last at least one day, got {days}",
                vehicle.id()
            )));
        }
        if !vehicle.is_available() {
            warn!(customer = %self.name, id = vehicle.id(), "vehicle not available");
            return Err(RentalError::VehicleUnavailable {
                id: vehicle.id().to_string(),
            });
        }

        self.rental_history.push(vehicle.handle());
        vehicle.set_availability(false);

        let event = RentalEvent::rented(&self.name, vehicle, days);
        reporter.report(&event);
        debug!(customer = %self.name, id = vehicle.id(), days, "vehicle rented");

        Ok(vehicle.calculate_rental_cost(days))
    }

    /// Hands `vehicle` back to the fleet.
    ///
    /// Fails with [`RentalError::NotRentedByCustomer`] unless this customer holds
    /// this very vehicle; another vehicle registered under the same id does not count.
    pub fn return_vehicle(&mut self, vehicle: &mut Vehicle, reporter: &dyn Reporter) -> Result<()> {
        let handle = vehicle.handle();
        let Some(pos) = self.rental_history.iter().position(|held| *held == handle) else {
            warn!(customer = %self.name, id = vehicle.id(), "vehicle not held by customer");
            return Err(RentalError::NotRentedByCustomer {
                id: vehicle.id().to_string(),
                customer: self.name.clone(),
            });
        };

        self.rental_history.remove(pos);
        vehicle.set_availability(true);

        reporter.report(&RentalEvent::returned(&self.name, vehicle));
        debug!(customer = %self.name, id = vehicle.id(), "vehicle returned");
        Ok(())
    }
}
