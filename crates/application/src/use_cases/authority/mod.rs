mod resolve_authoritative_servers;

pub use resolve_authoritative_servers::ResolveAuthoritativeServersUseCase;
