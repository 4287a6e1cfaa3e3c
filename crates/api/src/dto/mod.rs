pub mod check;

pub use check::{CheckQuery, HealthResponse};
