use serde::{Deserialize, Serialize};

/// `?h=<hostname>`, the parameter name the lookup form has always used.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CheckQuery {
    pub h: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
