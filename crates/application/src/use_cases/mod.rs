pub mod authority;
pub mod check;
pub mod srv;

pub use authority::ResolveAuthoritativeServersUseCase;
pub use check::CheckXmppDnsUseCase;
pub use srv::LookupSrvRecordsUseCase;
