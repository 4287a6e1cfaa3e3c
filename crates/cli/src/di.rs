use std::path::Path;
use std::sync::Arc;
use tracing::info;
use xmpp_srv_check_application::ports::LookupLedger;
use xmpp_srv_check_application::use_cases::CheckXmppDnsUseCase;
use xmpp_srv_check_domain::Config;
use xmpp_srv_check_infrastructure::dns::HickoryNameResolutionClient;
use xmpp_srv_check_infrastructure::ledger::{FileLookupLedger, NoopLookupLedger};
use xmpp_srv_check_infrastructure::system::{resolve_bootstrap_servers, RESOLV_CONF_PATH};

pub struct Services {
    pub check_xmpp_dns: Arc<CheckXmppDnsUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let bootstrap_servers = resolve_bootstrap_servers(
            config.dns.parsed_bootstrap_servers()?,
            Path::new(RESOLV_CONF_PATH),
        );
        info!(
            servers = ?bootstrap_servers,
            timeout_ms = config.dns.query_timeout_ms,
            server_timeout_ms = config.dns.server_timeout_ms,
            "Bootstrap name servers selected"
        );

        let client = Arc::new(
            HickoryNameResolutionClient::new(
                bootstrap_servers,
                config.dns.port,
                config.dns.query_timeout(),
            )
            .with_server_timeout(config.dns.server_timeout()),
        );

        let ledger: Arc<dyn LookupLedger> = if config.ledger.enabled {
            info!(path = %config.ledger.path, "Request ledger enabled");
            Arc::new(FileLookupLedger::new(&config.ledger.path))
        } else {
            Arc::new(NoopLookupLedger)
        };

        let check_xmpp_dns = CheckXmppDnsUseCase::new(client, ledger)
            .with_authority_fallback(config.dns.authority_fallback);

        Ok(Self {
            check_xmpp_dns: Arc::new(check_xmpp_dns),
        })
    }
}
