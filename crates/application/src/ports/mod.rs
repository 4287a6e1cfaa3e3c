mod lookup_ledger;
mod name_resolution_client;

pub use lookup_ledger::LookupLedger;
pub use name_resolution_client::NameResolutionClient;
