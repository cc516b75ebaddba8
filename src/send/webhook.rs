use reqwest::{header, Client};
use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};
use crate::fetch::make_client;

/// Posts messages as JSON to an http bridge in front of the chat service.
#[derive(Debug)]
pub struct Webhook {
    url: Url,
    client: Client,
}

#[derive(Debug, Serialize)]
struct Payload<'a> {
    group: &'a str,
    text: &'a str,
}

impl Webhook {
    pub fn new(url: Url) -> Result<Self> {
        Ok(Self {
            url,
            client: make_client()?,
        })
    }

    pub const fn url(&self) -> &Url {
        &self.url
    }

    pub async fn send(&self, group: &str, text: &str) -> Result<()> {
        let body = serde_json::to_string(&Payload { group, text })?;
        let response = self
            .client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Send(format!("{} answered {status}", self.url())));
        }
        log::info!("Check the group chat for the sent message!");
        Ok(())
    }
}
