//! # Rentr Core
//!
//! The rental ledger: vehicles, the fleet that owns them, and the customers
//! that borrow them. Output leaves the core only through the
//! [`reporter::Reporter`] port.
//!
//! * **[`vehicle`]**: vehicle kinds and their daily rates.
//! * **[`fleet`]**: the registry, lookup and availability listing.
//! * **[`customer`]**: rent and return.
//! * **[`scenario`]**: the scripted demo run.

pub mod customer;
pub mod error;
pub mod fleet;
pub mod reporter;
pub mod scenario;
pub mod vehicle;

pub use error::{ErrorKind, RentalError};
