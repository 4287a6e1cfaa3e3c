use std::sync::Arc;
use xmpp_srv_check_application::use_cases::CheckXmppDnsUseCase;

#[derive(Clone)]
pub struct AppState {
    pub check_xmpp_dns: Arc<CheckXmppDnsUseCase>,
}
