use serde::Serialize;
use std::fmt;

use crate::errors::DomainError;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

/// A validated, dot-separated domain name as entered by the user.
///
/// Surrounding whitespace is trimmed and a single trailing dot is dropped.
/// Empty names, empty labels, labels over 63 octets and names over 253
/// octets are rejected. Character rules are left to the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Hostname(String);

impl Hostname {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();

        let name = trimmed.strip_suffix('.').unwrap_or(trimmed);
        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidHostname(trimmed.to_string()));
        }

        if name
            .split('.')
            .any(|label| label.is_empty() || label.len() > MAX_LABEL_LEN)
        {
            return Err(DomainError::InvalidHostname(trimmed.to_string()));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Labels in presentation order, broadest label last.
    pub fn labels(&self) -> Vec<&str> {
        self.0.split('.').collect()
    }

    pub fn label_count(&self) -> usize {
        self.0.split('.').count()
    }

    /// Suffixes from the second-level zone down to the full name.
    ///
    /// `a.b.example.com` yields `example.com`, `b.example.com`,
    /// `a.b.example.com`. A single-label name yields nothing.
    pub fn zone_steps(&self) -> Vec<String> {
        let labels = self.labels();
        (1..labels.len())
            .rev()
            .map(|i| labels[i - 1..].join("."))
            .collect()
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
