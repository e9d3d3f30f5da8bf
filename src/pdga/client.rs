// SPDX-License-Identifier: MPL-2.0

use crate::pdga::ProfileRef;
use crate::state::ProfilerSettings;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("empty profile reference")]
    EmptyReference,
    #[error("invalid profile url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },
}

/// Where profile pages come from.
pub trait ProfileSource: Send + Sync + 'static {
    /// Fetch the raw markup of a profile page.
    fn fetch(&self, profile: &ProfileRef) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Fetches profile pages over HTTP.
#[derive(Clone)]
pub struct HttpProfileSource {
    http: reqwest::Client,
}

impl HttpProfileSource {
    pub fn new(settings: &ProfilerSettings) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http: builder.build()?,
        })
    }

    /// GET a page and return its body, failing on any non-2xx status.
    pub async fn get_text(&self, target: &str) -> Result<String, FetchError> {
        let url = url::Url::parse(target).map_err(|source| FetchError::InvalidUrl {
            url: target.to_string(),
            source,
        })?;

        tracing::debug!(%url, "fetching page");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

impl ProfileSource for HttpProfileSource {
    fn fetch(&self, profile: &ProfileRef) -> impl Future<Output = Result<String, FetchError>> + Send {
        let source = self.clone();
        let target = profile.as_str().to_string();
        async move { source.get_text(&target).await }
    }
}
