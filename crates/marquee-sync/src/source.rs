use marquee_feeds::BoxFuture;

use crate::error::SyncError;

/// Where the form export comes from.
pub trait ExportSource: Send + Sync {
    /// Human-readable origin, for log lines.
    fn describe(&self) -> &str;

    /// Fetch the whole export body. Any non-success response is an error.
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<u8>, SyncError>>;
}

/// The published spreadsheet, fetched over HTTP.
#[derive(Clone)]
pub struct HttpExport {
    agent: ureq::Agent,
    url: String,
}

impl HttpExport {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            url: url.into(),
        }
    }
}

impl ExportSource for HttpExport {
    fn describe(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> BoxFuture<'_, Result<Vec<u8>, SyncError>> {
        Box::pin(async move {
            let agent = self.agent.clone();
            let url = self.url.clone();

            let result = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, ureq::Error> {
                let mut response = agent.get(&url).call()?;
                response.body_mut().read_to_vec()
            })
            .await
            .map_err(|e| SyncError::Join(e.to_string()))?;

            result.map_err(|e| match e {
                ureq::Error::StatusCode(status) => SyncError::FetchStatus {
                    url: self.url.clone(),
                    status,
                },
                other => SyncError::Fetch {
                    url: self.url.clone(),
                    message: other.to_string(),
                },
            })
        })
    }
}
