pub mod client;
pub mod failover;
pub mod forwarding;
pub mod query;
pub mod transport;

pub use client::HickoryNameResolutionClient;
pub use failover::FailoverStrategy;
