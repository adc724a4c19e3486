use thiserror::Error;

/// Broad class of a [`RentalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input, rejected before any state changed.
    InvalidArgument,
    /// The operation does not fit the current availability state.
    IllegalState,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RentalError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("vehicle {id} is not available")]
    VehicleUnavailable { id: String },

    #[error("vehicle {id} is not rented by {customer}")]
    NotRentedByCustomer { id: String, customer: String },

    #[error("no vehicle with id {0} in the fleet")]
    VehicleNotFound(String),
}

impl RentalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RentalError::InvalidArgument(_) | RentalError::VehicleNotFound(_) => {
                ErrorKind::InvalidArgument
            }
            RentalError::VehicleUnavailable { .. } | RentalError::NotRentedByCustomer { .. } => {
                ErrorKind::IllegalState
            }
        }
    }

    pub fn is_illegal_state(&self) -> bool {
        self.kind() == ErrorKind::IllegalState
    }
}

pub type Result<T> = std::result::Result<T, RentalError>;
