//! HTTP ticketing backend adapter.
//!
//! Implements the `TicketingBackend` port over the backend's JSON REST API.
//! No retries: a failed call is reported once and the caller decides what
//! to show.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpBackendConfig::new("https://api.ticketfangrub.com")
//!     .with_timeout(Duration::from_secs(10));
//! let backend = HttpTicketingBackend::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::domain::foundation::{EventId, GroupId, SectionId};
use crate::domain::queue::Group;
use crate::domain::seating::{Seat, Section};
use crate::ports::{
    BackendError, CompleteCheckoutRequest, CreateGroupRequest, CreateGroupResponse,
    LeaveQueueRequest, LockSeatsRequest, LockSeatsResponse, TicketingBackend,
};

use super::wire::{CreateGroupBody, LockBody, PositionBody, SeatsBody, SectionsBody};

/// Configuration for the HTTP backend.
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// Base URL of the backend, without trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl HttpBackendConfig {
    /// Creates a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Ticketing backend reached over HTTP.
pub struct HttpTicketingBackend {
    config: HttpBackendConfig,
    base: Url,
    client: Client,
}

impl HttpTicketingBackend {
    /// Creates a new backend client.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Network` if the base URL cannot carry a path
    /// or the HTTP client cannot be built (e.g. the TLS backend fails to
    /// initialize).
    pub fn new(config: HttpBackendConfig) -> Result<Self, BackendError> {
        let base = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                BackendError::network(format!("Invalid backend URL: {}", config.base_url))
            })?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BackendError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            base,
            client,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn map_send_error(&self, e: reqwest::Error) -> BackendError {
        if e.is_timeout() {
            BackendError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            BackendError::network(format!("Connection failed: {}", e))
        } else {
            BackendError::network(e.to_string())
        }
    }

    /// Passes successful responses through; turns others into `BackendError::Http`.
    async fn handle_response_status(&self, response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        let err = BackendError::http(status.as_u16(), body);
        tracing::warn!(
            status = status.as_u16(),
            url = %url,
            detail = err.detail().unwrap_or(""),
            "Backend request rejected"
        );
        Err(err)
    }

    async fn parse_json<T: DeserializeOwned>(&self, response: Response) -> Result<T, BackendError> {
        response
            .json()
            .await
            .map_err(|e| BackendError::parse(format!("Failed to parse response: {}", e)))
    }

    async fn get(&self, segments: &[&str]) -> Result<Response, BackendError> {
        let url = self.url(segments);
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        self.handle_response_status(response).await
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<Response, BackendError> {
        let url = self.url(segments);
        tracing::debug!(url = %url, "POST");

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        self.handle_response_status(response).await
    }
}

#[async_trait]
impl TicketingBackend for HttpTicketingBackend {
    async fn create_group(
        &self,
        request: CreateGroupRequest,
    ) -> Result<CreateGroupResponse, BackendError> {
        let response = self.post(&["queue", "create-group"], &request).await?;
        let body: CreateGroupBody = self.parse_json(response).await?;
        let group_id = body.into_group_id()?;

        tracing::info!(
            event_id = %request.event_id,
            group_id = %group_id,
            mode = %request.mode,
            "Joined queue"
        );
        Ok(CreateGroupResponse { group_id })
    }

    async fn get_group(&self, group_id: &GroupId) -> Result<Group, BackendError> {
        let response = self.get(&["queue", "group", group_id.as_str()]).await?;
        self.parse_json(response).await
    }

    async fn get_position(
        &self,
        event_id: &EventId,
        group_id: &GroupId,
    ) -> Result<Option<u32>, BackendError> {
        let response = self
            .get(&["queue", "position", event_id.as_str(), group_id.as_str()])
            .await?;
        let body: PositionBody = self.parse_json(response).await?;
        body.into_position()
    }

    async fn leave_queue(&self, request: LeaveQueueRequest) -> Result<(), BackendError> {
        self.post(&["queue", "leave"], &request).await?;
        tracing::info!(event_id = %request.event_id, group_id = %request.group_id, "Left queue");
        Ok(())
    }

    async fn list_sections(&self, event_id: &EventId) -> Result<Vec<Section>, BackendError> {
        let response = self
            .get(&["map", "events", event_id.as_str(), "sections"])
            .await?;
        let body: SectionsBody = self.parse_json(response).await?;

        body.sections
            .unwrap_or_default()
            .into_iter()
            .map(|s| s.into_domain())
            .collect()
    }

    async fn list_seats(
        &self,
        event_id: &EventId,
        section_id: &SectionId,
    ) -> Result<Vec<Seat>, BackendError> {
        let response = self
            .get(&[
                "map",
                "events",
                event_id.as_str(),
                "sections",
                section_id.as_str(),
                "seats",
            ])
            .await?;
        let body: SeatsBody = self.parse_json(response).await?;

        body.seats
            .unwrap_or_default()
            .into_iter()
            .map(|s| s.into_domain(section_id))
            .collect()
    }

    async fn lock_seats(
        &self,
        request: LockSeatsRequest,
    ) -> Result<LockSeatsResponse, BackendError> {
        let response = self.post(&["checkout", "lock"], &request).await?;
        let body: LockBody = self.parse_json(response).await?;
        let expires_at = body.into_expiry()?;

        tracing::info!(
            group_id = %request.group_id,
            seats = request.ticket_ids.len(),
            expires_at = %expires_at.as_datetime(),
            "Seats locked"
        );
        Ok(LockSeatsResponse { expires_at })
    }

    async fn complete_checkout(
        &self,
        request: CompleteCheckoutRequest,
    ) -> Result<(), BackendError> {
        self.post(&["checkout", "complete"], &request).await?;
        tracing::info!(group_id = %request.group_id, buyer_id = %request.buyer_id, "Checkout completed");
        Ok(())
    }
}
