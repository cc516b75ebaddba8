use chrono::NaiveDate;
use reqwest::{header, Client, Error as RequestError, StatusCode};
use tracing::{instrument, Level};
use url::Url;

static MENU_QUERY_KEY: &str = "menu-repas";
static MENU_QUERY_PREFIX: &str = "bordeaux-maternelle-";
static USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:92.0) Gecko/20100101 Firefox/92.0";

pub fn make_client() -> Result<Client, RequestError> {
    Client::builder().user_agent(USER_AGENT).gzip(true).build()
}

/// Page of the week starting on `monday`, ex. `?menu-repas=bordeaux-maternelle-241014`.
pub fn week_url(base: &Url, monday: NaiveDate) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().append_pair(
        MENU_QUERY_KEY,
        &format!("{MENU_QUERY_PREFIX}{}", monday.format("%y%m%d")),
    );
    url
}

/// Fetches the menu page of the week starting on `monday`.
///
/// A status other than 200 is logged and the body is returned anyway; only
/// transport failures are errors.
#[instrument(skip(client, base, monday), fields(
    date = %monday.format("%y%m%d"),
), level = Level::DEBUG)]
pub async fn week_page(
    client: &Client,
    base: &Url,
    monday: NaiveDate,
) -> Result<String, RequestError> {
    let date = monday.format("%y%m%d");
    let response = client
        .get(week_url(base, monday))
        .header(header::ACCEPT, "text/html")
        .send()
        .await?;
    if response.status() == StatusCode::OK {
        log::info!("Successfully retrieved content from date {date}");
    } else {
        log::error!(
            "Something went wrong while retrieving content from date {date}, status code {}",
            response.status().as_u16()
        );
    }
    let start = std::time::Instant::now();
    let text = response.text().await?;
    log::trace!("Got text of week page in \t {:?}", start.elapsed());
    Ok(text)
}
