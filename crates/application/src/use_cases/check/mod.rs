mod check_xmpp_dns;

pub use check_xmpp_dns::CheckXmppDnsUseCase;
