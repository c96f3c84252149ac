//! Business logic layer

pub mod filter;
pub mod registry;
pub mod summary;

pub use filter::{RegistrationFilter, YearCriterion};
pub use registry::{ConfirmationPort, RegistrationService};
pub use summary::{available_years, total};
