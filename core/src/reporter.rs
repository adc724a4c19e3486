//! # Reporter Port
//!
//! Everything the ledger has to tell the outside world goes through
//! [`Reporter`]. The core never prints; the CLI plugs in a terminal adapter and
//! tests plug in an [`EventLog`].

use std::cell::RefCell;
use std::fmt;

use crate::vehicle::Vehicle;

#[derive(Debug, Clone, PartialEq)]
pub enum RentalEvent {
    /// Heading that introduces the lines that follow.
    Section { title: String },
    Available { id: String, model: String },
    Rented {
        customer: String,
        model: String,
        days: i32,
        cost: f64,
    },
    Returned { customer: String, model: String },
}

impl RentalEvent {
    pub fn section(title: impl Into<String>) -> Self {
        RentalEvent::Section {
            title: title.into(),
        }
    }

    pub fn available(vehicle: &Vehicle) -> Self {
        RentalEvent::Available {
            id: vehicle.id().to_string(),
            model: vehicle.model().to_string(),
        }
    }

    pub fn rented(customer: &str, vehicle: &Vehicle, days: i32) -> Self {
        RentalEvent::Rented {
            customer: customer.to_string(),
            model: vehicle.model().to_string(),
            days,
            cost: vehicle.calculate_rental_cost(days),
        }
    }

    pub fn returned(customer: &str, vehicle: &Vehicle) -> Self {
        RentalEvent::Returned {
            customer: customer.to_string(),
            model: vehicle.model().to_string(),
        }
    }
}

impl fmt::Display for RentalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RentalEvent::Section { title } => write!(f, "{title}:"),
            RentalEvent::Available { id, model } => {
                write!(f, "{model} (ID: {id}) is available for rental.")
            }
            RentalEvent::Rented {
                customer,
                model,
                days,
                cost,
            } => write!(f, "{customer} rented {model} for {days} days. Cost: {cost:.1}"),
            RentalEvent::Returned { customer, model } => write!(f, "{customer} returned {model}"),
        }
    }
}

/// Receives the observable output of the ledger.
pub trait Reporter {
    fn report(&self, event: &RentalEvent);
}

/// Discards every event.
pub struct Silent;

impl Reporter for Silent {
    fn report(&self, _event: &RentalEvent) {}
}

/// Keeps every reported event in order.
#[derive(Debug, Default)]
pub struct EventLog {
    events: RefCell<Vec<RentalEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RentalEvent> {
        self.events.borrow().clone()
    }

    /// Rendered lines, one per event.
    pub fn lines(&self) -> Vec<String> {
        self.events.borrow().iter().map(ToString::to_string).collect()
    }

    /// Ids of the `Available` events, in the order they were reported.
    pub fn available_ids(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                RentalEvent::Available { id, .. } => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Drains the log.
    pub fn take(&self) -> Vec<RentalEvent> {
        self.events.take()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl Reporter for EventLog {
    fn report(&self, event: &RentalEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
