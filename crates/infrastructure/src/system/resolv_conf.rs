use std::net::IpAddr;
use std::path::Path;
use tracing::{debug, warn};

pub const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

/// Used when neither the configuration nor the system names a server.
pub const FALLBACK_SERVERS: [IpAddr; 2] = [
    IpAddr::V4(std::net::Ipv4Addr::new(8, 8, 8, 8)),
    IpAddr::V4(std::net::Ipv4Addr::new(1, 1, 1, 1)),
];

/// Extracts `nameserver` addresses from resolv.conf content.
///
/// Zone ids (`fe80::1%eth0`) are dropped along with unparsable entries.
pub fn parse_nameservers(content: &str) -> Vec<IpAddr> {
    let mut servers = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        let mut fields = line.split_whitespace();
        if fields.next() != Some("nameserver") {
            continue;
        }
        let Some(value) = fields.next() else {
            continue;
        };

        let address = value.split('%').next().unwrap_or(value);
        match address.parse::<IpAddr>() {
            Ok(ip) if !servers.contains(&ip) => servers.push(ip),
            Ok(_) => {}
            Err(_) => warn!(entry = %value, "Ignoring invalid nameserver entry"),
        }
    }

    servers
}

/// Servers listed in the resolv.conf at `path`, or an empty list when the
/// file cannot be read.
pub fn system_nameservers(path: &Path) -> Vec<IpAddr> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let servers = parse_nameservers(&content);
            debug!(path = %path.display(), servers = ?servers, "System name servers loaded");
            servers
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read resolver configuration");
            Vec::new()
        }
    }
}

/// Bootstrap servers in order of preference: configured, system, fallback.
pub fn resolve_bootstrap_servers(configured: Vec<IpAddr>, resolv_conf: &Path) -> Vec<IpAddr> {
    if !configured.is_empty() {
        return configured;
    }

    let system = system_nameservers(resolv_conf);
    if !system.is_empty() {
        return system;
    }

    warn!("No name servers configured or found, using public fallback servers");
    FALLBACK_SERVERS.to_vec()
}
