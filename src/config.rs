use std::env;

use url::Url;

use crate::error::{Error, Result};

pub const BASE_URL: &str = "https://www.sivu-bordeauxmerignac.fr/";
pub const GROUP_ID: &str = "KKJ70JWgBOk661QxWYOxsL";

/// Settings read from the environment at startup.
///
/// | variable        | default      |
/// |-----------------|--------------|
/// | `MENU_BASE_URL` | [`BASE_URL`] |
/// | `MENU_GROUP_ID` | [`GROUP_ID`] |
/// | `MENU_SENDER`   | unset        |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: Url,
    pub group_id: String,
    /// `:stdout:` or a webhook url, see [`crate::send::Sender::from_setting`].
    pub sender: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup("MENU_BASE_URL").unwrap_or_else(|| BASE_URL.to_owned());
        let base_url = Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("MENU_BASE_URL {base_url:?}: {e}")))?;
        let group_id = lookup("MENU_GROUP_ID").unwrap_or_else(|| GROUP_ID.to_owned());
        if group_id.trim().is_empty() {
            return Err(Error::Config("MENU_GROUP_ID is empty".to_owned()));
        }
        let sender = lookup("MENU_SENDER");
        if let Some(setting) = sender.as_deref().filter(|s| *s != ":stdout:") {
            Url::parse(setting)
                .map_err(|e| Error::Config(format!("MENU_SENDER {setting:?}: {e}")))?;
        }
        Ok(Self {
            base_url,
            group_id,
            sender,
        })
    }
}
