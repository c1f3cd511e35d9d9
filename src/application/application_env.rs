use anyhow::anyhow;
use std::{net::SocketAddr, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub events_service_url: String,
    pub events_service_timeout: Duration,

    pub max_http_content_len: usize,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("TICKETS_SERVICE_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TICKETS_SERVICE_LOG_FILENAME")?;
        let bind_address = Self::env_var("TICKETS_SERVICE_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("TICKETS_SERVICE_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("TICKETS_SERVICE_DB_NAME")?;
        let events_service_url = Self::env_var("TICKETS_SERVICE_EVENTS_SERVICE_URL")?;
        let events_service_timeout =
            Self::env_var("TICKETS_SERVICE_EVENTS_SERVICE_TIMEOUT")?.parse()?;
        let events_service_timeout = Duration::from_secs(events_service_timeout);
        let max_http_content_len =
            Self::env_var("TICKETS_SERVICE_MAX_HTTP_CONTENT_LEN")?.parse()?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            events_service_url,
            events_service_timeout,
            max_http_content_len,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
