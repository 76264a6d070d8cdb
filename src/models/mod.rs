// Models module - exports all model types

mod location;
mod pharmacy;
mod schedule;

// Re-export model types
pub use self::location::Location;
pub use self::pharmacy::{Pharmacy, Weekday};
pub use self::schedule::Schedule;

// Common type aliases for improved code readability
pub type Kilometers = f64;
