use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;
use xmpp_srv_check_application::ports::LookupLedger;
use xmpp_srv_check_domain::DomainError;

/// Appends every requested hostname, percent-encoded, one per line.
pub struct FileLookupLedger {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileLookupLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn encode_line(hostname: &str) -> String {
        format!("{}\n", urlencoding::encode(hostname))
    }
}

#[async_trait]
impl LookupLedger for FileLookupLedger {
    async fn record(&self, hostname: &str) -> Result<(), DomainError> {
        let line = Self::encode_line(hostname);

        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| {
                DomainError::Io(format!(
                    "Failed to open ledger {}: {}",
                    self.path.display(),
                    e
                ))
            })?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| DomainError::Io(format!("Failed to append to ledger: {}", e)))?;
        file.flush()
            .await
            .map_err(|e| DomainError::Io(format!("Failed to flush ledger: {}", e)))?;

        debug!(path = %self.path.display(), "Lookup recorded");
        Ok(())
    }
}

/// Ledger used when recording is disabled.
pub struct NoopLookupLedger;

#[async_trait]
impl LookupLedger for NoopLookupLedger {
    async fn record(&self, _hostname: &str) -> Result<(), DomainError> {
        Ok(())
    }
}
