use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::models::event::{CalendarRef, EventPayload};
use crate::models::settings::RemoteConfig;

use super::RemoteEventStore;

/// Google Calendar v3 compatible event store.
pub struct HttpEventStore {
    client: Client,
    base_url: String,
    access_token: String,
}

#[derive(Deserialize)]
struct CreatedEvent {
    id: String,
}

impl HttpEventStore {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .context("Failed to build calendar API HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        })
    }

    /// Build from config, reading the token from the configured env var.
    pub fn from_config(config: &RemoteConfig) -> Result<Self> {
        let token = std::env::var(&config.access_token_env).with_context(|| {
            format!(
                "Calendar access token not found in ${}",
                config.access_token_env
            )
        })?;
        Self::new(config.base_url.clone(), token)
    }

    fn events_url(&self, calendar: &CalendarRef) -> String {
        format!(
            "{}/calendars/{}/events",
            self.base_url,
            urlencoding::encode(calendar.as_str())
        )
    }

    fn event_url(&self, calendar: &CalendarRef, event_id: &str) -> String {
        format!(
            "{}/{}",
            self.events_url(calendar),
            urlencoding::encode(event_id)
        )
    }
}

impl RemoteEventStore for HttpEventStore {
    async fn create_event(&self, calendar: &CalendarRef, payload: &EventPayload) -> Result<String> {
        let response = self
            .client
            .post(self.events_url(calendar))
            .bearer_auth(&self.access_token)
            .json(&payload.to_wire())
            .send()
            .await
            .context("Network error while creating event")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Event create failed with HTTP status {}", status));
        }

        let created: CreatedEvent = response
            .json()
            .await
            .context("Failed to parse created event response")?;

        Ok(created.id)
    }

    async fn delete_event(&self, calendar: &CalendarRef, event_id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.event_url(calendar, event_id))
            .bearer_auth(&self.access_token)
            .send()
            .await
            .context("Network error while deleting event")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Event delete failed with HTTP status {}", status));
        }

        Ok(())
    }
}
