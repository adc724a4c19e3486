use colored::*;
use rentr_core::reporter::{RentalEvent, Reporter};

use crate::terminal::{colors, format, print};

/// Writes ledger events to the terminal.
pub struct TerminalReporter;

impl Reporter for TerminalReporter {
    fn report(&self, event: &RentalEvent) {
        match event {
            RentalEvent::Section { title } => {
                print::print("");
                print::section(title);
            }
            RentalEvent::Available { id, model } => {
                print::print_status(format!(
                    "{} (ID: {}) is available for rental.",
                    model.color(colors::MODEL),
                    id.color(colors::VEHICLE_ID)
                ));
            }
            RentalEvent::Rented {
                customer,
                model,
                days,
                cost,
            } => {
                print::print(&format!(
                    "{} rented {} for {} days. Cost: {}",
                    customer.color(colors::CUSTOMER).bold(),
                    model.color(colors::MODEL),
                    days.to_string().color(colors::ACCENT),
                    format::cost(*cost)
                ));
            }
            RentalEvent::Returned { customer, model } => {
                print::print(&format!(
                    "{} returned {}",
                    customer.color(colors::CUSTOMER).bold(),
                    model.color(colors::MODEL)
                ));
            }
        }
    }
}
