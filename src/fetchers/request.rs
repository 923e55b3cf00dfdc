use crate::config::ScraperConfig;
use crate::error::Result;
use log::debug;
use reqwest::Client;
use std::time::Duration;

/// Plain HTTP fetcher for source pages.
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Fetch the page body. Non-success statuses are errors.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        debug!("RequestFetcher: {} responded {}", url, response.status());
        let html = response.text().await?;
        Ok(html)
    }
}
