//! Blocking client for an AAS submodel repository.

use indexmap::IndexSet;
use reqwest::blocking::Client;
use tracing::debug;

use super::SubmodelSource;
use super::json::{PageDto, lower_submodels};
use crate::error::SourceError;
use crate::model::Snapshot;

/// Tree source reading `GET <endpoint>/submodels`, page by page.
#[derive(Debug, Clone)]
pub struct HttpSource {
    endpoint: String,
    client: Client,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SourceError> {
        let client = Client::builder()
            .build()
            .map_err(|e| SourceError::http(e.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// URL of the submodel collection resource.
    pub fn submodels_url(&self) -> String {
        format!("{}/submodels", self.endpoint.trim_end_matches('/'))
    }

    fn fetch_page(&self, url: &str, cursor: Option<&str>) -> Result<PageDto, SourceError> {
        let mut request = self.client.get(url);
        if let Some(cursor) = cursor {
            request = request.query(&[("cursor", cursor)]);
        }
        let response = request
            .send()
            .map_err(|e| SourceError::http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .map_err(|e| SourceError::http(e.to_string()))?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl SubmodelSource for HttpSource {
    fn fetch(&self) -> Result<Snapshot, SourceError> {
        let url = self.submodels_url();
        let mut submodels = Vec::new();
        let mut cursors = CursorTrail::default();

        loop {
            let page = self.fetch_page(&url, cursors.current())?;
            let next = page.next_cursor();
            debug!(url = %url, submodels = page.result.len(), next = ?next, "fetched page");
            let more = cursors.advance(next)?;
            submodels.extend(page.result);
            if !more {
                break;
            }
        }

        lower_submodels(submodels)
    }
}

/// Paging cursors handed out by the repository, in order.
#[derive(Debug, Default)]
struct CursorTrail {
    seen: IndexSet<String>,
}

impl CursorTrail {
    /// Cursor to request the next page with; `None` for the first page.
    fn current(&self) -> Option<&str> {
        self.seen.last().map(String::as_str)
    }

    /// Record the cursor reported by the last page. Returns whether another
    /// page follows; a cursor that was seen before is a paging cycle.
    fn advance(&mut self, next: Option<&str>) -> Result<bool, SourceError> {
        let Some(next) = next else {
            return Ok(false);
        };
        if !self.seen.insert(next.to_owned()) {
            return Err(SourceError::invalid(format!(
                "repository repeated paging cursor '{next}'"
            )));
        }
        Ok(true)
    }
}
