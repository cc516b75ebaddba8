mod webhook;

use std::io::{self, Write};

use url::Url;

use crate::error::{Error, Result};

pub use webhook::Webhook;

/// Where the daily message goes.
#[derive(Debug)]
pub enum Sender {
    Stdout,
    Webhook(Webhook),
}

impl Sender {
    /// `:stdout:` prints the message, anything else is a webhook url.
    pub fn from_setting(setting: Option<&str>) -> Result<Self> {
        match setting {
            Some(":stdout:") => Ok(Self::Stdout),
            Some(url) => {
                let url = Url::parse(url)
                    .map_err(|e| Error::Config(format!("MENU_SENDER {url:?}: {e}")))?;
                Webhook::new(url).map(Self::Webhook)
            }
            None => {
                log::warn!("env var MENU_SENDER not set, printing the message to stdout.");
                Ok(Self::Stdout)
            }
        }
    }

    pub async fn send(&self, group: &str, text: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{text}")
                    .and_then(|()| out.flush())
                    .map_err(|e| Error::Send(format!("stdout: {e}")))?;
                log::info!("Message for group {group} printed to stdout");
                Ok(())
            }
            Self::Webhook(hook) => hook.send(group, text).await,
        }
    }
}
