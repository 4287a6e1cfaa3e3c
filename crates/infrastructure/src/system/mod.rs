pub mod resolv_conf;

pub use resolv_conf::{parse_nameservers, resolve_bootstrap_servers, RESOLV_CONF_PATH};
