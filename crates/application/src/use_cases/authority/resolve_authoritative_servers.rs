use crate::ports::NameResolutionClient;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use xmpp_srv_check_domain::{DomainError, Hostname};

/// Walks the delegation chain from the second-level zone down to the target
/// domain, re-pointing every query at the servers found in the previous step,
/// so the final server set is authoritative for the domain itself and was
/// reached without any intermediate caching resolver.
///
/// The root and TLD servers are not walked explicitly; the first step asks
/// the bootstrap servers. Any failure in any step, including a single NS
/// target that cannot be resolved, abandons the walk with
/// [`DomainError::AuthorityUndetermined`]. No partial server list is returned.
pub struct ResolveAuthoritativeServersUseCase {
    client: Arc<dyn NameResolutionClient>,
}

impl ResolveAuthoritativeServersUseCase {
    pub fn new(client: Arc<dyn NameResolutionClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self, domain), fields(domain = %domain))]
    pub async fn execute(&self, domain: &Hostname) -> Result<Vec<IpAddr>, DomainError> {
        let steps = domain.zone_steps();
        if steps.is_empty() {
            warn!("Single-label domain, no delegation to walk");
            return Err(undetermined(domain));
        }

        let mut servers = self.client.bootstrap_servers();

        for zone in &steps {
            servers = match self.delegation_step(zone, &servers).await {
                Ok(next) if next.is_empty() => {
                    warn!(zone = %zone, "Delegation step produced no server addresses");
                    return Err(undetermined(domain));
                }
                Ok(next) => next,
                Err(e) if e.is_lookup_failure() => {
                    warn!(zone = %zone, error = %e, "Delegation step failed");
                    return Err(undetermined(domain));
                }
                Err(e) => return Err(e),
            };
        }

        info!(
            steps = steps.len(),
            servers = servers.len(),
            "Authoritative name servers determined"
        );

        Ok(servers)
    }

    /// Asks `servers` for the NS set of `zone` and resolves every target
    /// through the same servers.
    async fn delegation_step(
        &self,
        zone: &str,
        servers: &[IpAddr],
    ) -> Result<Vec<IpAddr>, DomainError> {
        let targets = self.client.lookup_ns(zone, servers).await?;
        debug!(zone = %zone, targets = ?targets, "NS targets received");

        let mut next = Vec::new();
        for target in &targets {
            for address in self.client.lookup_addresses(target, servers).await? {
                if !next.contains(&address) {
                    next.push(address);
                }
            }
        }

        debug!(zone = %zone, servers = ?next, "Delegation step complete");
        Ok(next)
    }
}

fn undetermined(domain: &Hostname) -> DomainError {
    DomainError::AuthorityUndetermined {
        domain: domain.to_string(),
    }
}
