#![allow(dead_code)]

pub mod mock_ports;

pub use mock_ports::{Call, MockLookupLedger, MockNameResolutionClient};

use std::net::IpAddr;

pub fn ip(raw: &str) -> IpAddr {
    raw.parse().unwrap()
}
