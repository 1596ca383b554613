use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::General;
use crate::error::{Result, SearchError};

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Raw answer of a GET request. Non-success statuses are still a `Page`,
/// it is up to the caller to decide whether the body is usable.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Page {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<Page>;
}

#[async_trait]
impl Fetcher for Client {
    async fn get(&self, url: &str) -> Result<Page> {
        let response = Client::get(self, url)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        Ok(Page {
            status,
            body: body.to_vec(),
        })
    }
}

pub fn client(general: &General) -> anyhow::Result<Client> {
    let mut builder = Client::builder().user_agent(APP_USER_AGENT);
    if let Some(timeout) = general.timeout {
        log::debug!("Using a request timeout of {}s", timeout);
        builder = builder.timeout(Duration::from_secs(timeout));
    }
    Ok(builder.build()?)
}
