//! # Vehicle Model
//!
//! A rentable item of the fleet. The category ([`VehicleKind`]) is a closed
//! set and fixes the per-day price; the base rate a vehicle is registered with
//! is kept for reference only and never enters the cost.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{RentalError, Result};

/// Category of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Car,
    Motorcycle,
    Truck,
}

impl VehicleKind {
    /// Flat price for one day of rental.
    pub fn daily_rate(self) -> f64 {
        match self {
            VehicleKind::Car => 50.0,
            VehicleKind::Motorcycle => 30.0,
            VehicleKind::Truck => 100.0,
        }
    }

    /// `days` is not validated: zero yields zero, negative yields a negative cost.
    pub fn rental_cost(self, days: i32) -> f64 {
        self.daily_rate() * f64::from(days)
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VehicleKind::Car => "Car",
            VehicleKind::Motorcycle => "Motorcycle",
            VehicleKind::Truck => "Truck",
        };
        f.write_str(name)
    }
}

impl FromStr for VehicleKind {
    type Err = RentalError;

    /// Parses a category name, case-insensitive. `bike` is accepted for motorcycles.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(VehicleKind::Car),
            "motorcycle" | "bike" => Ok(VehicleKind::Motorcycle),
            "truck" => Ok(VehicleKind::Truck),
            other => Err(RentalError::InvalidArgument(format!(
                "unknown vehicle kind '{other}'"
            ))),
        }
    }
}

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(0);

/// Identity of one vehicle instance.
///
/// Ids are not guaranteed unique within a fleet, so anything that must tell
/// two vehicles apart compares handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleHandle(u64);

impl VehicleHandle {
    fn next() -> Self {
        Self(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }
}

/// Not `Clone`: a copy would share the handle of the original.
#[derive(Debug, PartialEq)]
pub struct Vehicle {
    handle: VehicleHandle,
    id: String,
    model: String,
    base_rate: f64,
    kind: VehicleKind,
    available: bool,
}

impl Vehicle {
    /// Creates an available vehicle.
    ///
    /// Fails with [`RentalError::InvalidArgument`] when `id` or `model` is empty
    /// or `base_rate` is not strictly positive.
    pub fn new(
        kind: VehicleKind,
        id: impl Into<String>,
        model: impl Into<String>,
        base_rate: f64,
    ) -> Result<Self> {
        let id: String = id.into();
        let model: String = model.into();

        if id.is_empty() {
            return Err(RentalError::InvalidArgument("vehicle id is empty".into()));
        }
        if model.is_empty() {
            return Err(RentalError::InvalidArgument(format!(
                "model of vehicle {id} is empty"
            )));
        }
        if base_rate.is_nan() || base_rate <= 0.0 {
            return Err(RentalError::InvalidArgument(format!(
                "base rate of vehicle {id} must be positive, got {base_rate}"
            )));
        }

        Ok(Self {
            handle: VehicleHandle::next(),
            id,
            model,
            base_rate,
            kind,
            available: true,
        })
    }

    pub fn car(id: impl Into<String>, model: impl Into<String>, base_rate: f64) -> Result<Self> {
        Self::new(VehicleKind::Car, id, model, base_rate)
    }

    pub fn motorcycle(
        id: impl Into<String>,
        model: impl Into<String>,
        base_rate: f64,
    ) -> Result<Self> {
        Self::new(VehicleKind::Motorcycle, id, model, base_rate)
    }

    pub fn truck(id: impl Into<String>, model: impl Into<String>, base_rate: f64) -> Result<Self> {
        Self::new(VehicleKind::Truck, id, model, base_rate)
    }

    pub fn handle(&self) -> VehicleHandle {
        self.handle
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_rate(&self) -> f64 {
        self.base_rate
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn calculate_rental_cost(&self, days: i32) -> f64 {
        self.kind.rental_cost(days)
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_availability(&mut self, available: bool) {
        self.available = available;
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
