use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, instrument};
use xmpp_srv_check_domain::{DomainError, XmppDnsReport};

use crate::{dto::CheckQuery, errors::ApiError, state::AppState};

#[instrument(skip(state, params))]
pub async fn check_hostname(
    State(state): State<AppState>,
    Query(params): Query<CheckQuery>,
) -> Result<Json<XmppDnsReport>, ApiError> {
    let hostname = params
        .h
        .filter(|h| !h.trim().is_empty())
        .ok_or_else(|| {
            ApiError(DomainError::InvalidHostname(
                "missing 'h' query parameter".to_string(),
            ))
        })?;

    let report = state.check_xmpp_dns.execute(&hostname).await?;
    debug!(
        hostname = %report.hostname,
        client_records = report.client.records.len(),
        server_records = report.server.records.len(),
        "Check served"
    );

    Ok(Json(report))
}
