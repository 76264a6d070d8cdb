// Public modules
pub mod evaluator;
pub mod models;
pub mod store;

// Re-exports for convenience
pub use evaluator::{evaluate, evaluate_now, EvaluatedPharmacy, Evaluation, MarkerStatus};
pub use models::{Location, Pharmacy, Schedule, Weekday};
pub use store::{JsonFileStorage, PharmacyStore, Storage, StoreError};
