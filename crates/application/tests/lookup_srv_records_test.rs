use std::sync::Arc;
use xmpp_srv_check_application::use_cases::LookupSrvRecordsUseCase;
use xmpp_srv_check_domain::{DomainError, Hostname, SrvRecord, SrvService};

mod helpers;
use helpers::{ip, MockNameResolutionClient};

#[tokio::test]
async fn test_issues_four_queries_against_given_servers() {
    let client = MockNameResolutionClient::new(vec![ip("192.0.2.53")]);
    let servers = vec![ip("198.51.100.1"), ip("198.51.100.2")];
    let use_case = LookupSrvRecordsUseCase::new(Arc::new(client.clone()));

    use_case
        .execute(&Hostname::parse("example.com").unwrap(), &servers)
        .await
        .unwrap();

    let mut names: Vec<String> = client
        .srv_calls()
        .iter()
        .map(|call| {
            assert_eq!(call.servers(), servers.as_slice());
            call.name().to_string()
        })
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "_xmpp-client._tcp.example.com",
            "_xmpp-server._tcp.example.com",
            "_xmpps-client._tcp.example.com",
            "_xmpps-server._tcp.example.com",
        ]
    );
}

#[tokio::test]
async fn test_failed_query_marks_only_its_slot_absent() {
    let client = MockNameResolutionClient::new(vec![]);
    client.set_srv(
        "_xmpp-client._tcp.example.com",
        vec![SrvRecord::new(0, 5, 5222, "xmpp.example.com.")],
    );
    client.set_srv(
        "_xmpp-server._tcp.example.com",
        vec![SrvRecord::new(0, 5, 5269, "xmpp.example.com.")],
    );
    client.set_error("_xmpps-client._tcp.example.com", DomainError::QueryTimeout);
    client.set_error("_xmpps-server._tcp.example.com", DomainError::DomainNotFound);

    let answers = LookupSrvRecordsUseCase::new(Arc::new(client))
        .execute(&Hostname::parse("example.com").unwrap(), &[ip("198.51.100.1")])
        .await
        .unwrap();

    let client_starttls = answers.get(SrvService::CLIENT_STARTTLS);
    assert!(client_starttls.present);
    assert_eq!(client_starttls.records[0].port, 5222);
    assert!(answers.get(SrvService::SERVER_STARTTLS).present);
    assert!(!answers.get(SrvService::CLIENT_DIRECT_TLS).present);
    assert!(!answers.get(SrvService::SERVER_DIRECT_TLS).present);
}

#[tokio::test]
async fn test_all_queries_failing_is_not_an_error() {
    let client = MockNameResolutionClient::new(vec![]);

    let answers = LookupSrvRecordsUseCase::new(Arc::new(client))
        .execute(&Hostname::parse("example.com").unwrap(), &[ip("198.51.100.1")])
        .await
        .unwrap();

    assert!(answers.iter().all(|set| !set.present));
}

#[tokio::test]
async fn test_non_lookup_error_propagates() {
    let client = MockNameResolutionClient::new(vec![]);
    client.set_error(
        "_xmpp-server._tcp.example.com",
        DomainError::UnexpectedRecord {
            query: "_xmpp-server._tcp.example.com".to_string(),
            record_type: "TXT".to_string(),
        },
    );

    let result = LookupSrvRecordsUseCase::new(Arc::new(client))
        .execute(&Hostname::parse("example.com").unwrap(), &[ip("198.51.100.1")])
        .await;

    assert!(matches!(result, Err(DomainError::UnexpectedRecord { .. })));
}
