pub mod check;
pub mod health;

pub use check::check_hostname;
pub use health::health_check;
