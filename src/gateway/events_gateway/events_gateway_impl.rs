use super::{EventSnapshot, EventsGateway, ExternalEvent};
use crate::gateway::{self, Error};
use axum::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use uuid::Uuid;

pub struct EventsGatewayConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

pub struct EventsGatewayImpl {
    config: EventsGatewayConfig,
    client: Client,
}

impl EventsGatewayImpl {
    pub fn new(config: EventsGatewayConfig) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl EventsGateway for EventsGatewayImpl {
    async fn event_snapshot(&self, event_id: Uuid) -> Result<EventSnapshot, gateway::Error> {
        let url = format!("{}/api/eventos/{}", self.config.base_url, event_id);

        tracing::debug!(%event_id, "fetching event snapshot");
        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::EventNotExist(event_id));
        }

        let event = response
            .error_for_status()?
            .json::<ExternalEvent>()
            .await?;

        Ok(event.into())
    }
}
