pub mod dns;
pub mod ledger;
pub mod system;
