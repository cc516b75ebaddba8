#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod error;
mod fetch;
mod format;
mod parse;
mod send;

use std::env;

use chrono::{Datelike, Local, NaiveDate, Weekday};
use clap::Parser;
use reqwest::Client;
use scraper::Html;
use url::Url;

use crate::{
    config::Config,
    error::Error,
    parse::{monday_of, Week},
    send::Sender,
};

/// Sends today's nursery school canteen menu to the parents' group chat.
#[derive(Parser, Debug)]
#[command(name = "cantine_menu", version)]
struct Cli {
    /// Any day of the week to fetch, as YYMMDD. Defaults to the current week.
    #[arg(value_parser = parse_week_date)]
    start_date: Option<NaiveDate>,

    /// Send the menu of this weekday instead of today's (mon..fri)
    #[arg(long, value_parser = parse_weekday)]
    weekday: Option<Weekday>,

    /// Print the message instead of sending it
    #[arg(long)]
    dry_run: bool,

    /// Print the extracted week as JSON and exit
    #[arg(long)]
    json: bool,
}

fn parse_week_date(s: &str) -> core::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%y%m%d").map_err(|e| format!("expected YYMMDD: {e}"))
}

fn parse_weekday(s: &str) -> core::result::Result<Weekday, String> {
    s.parse()
        .map_err(|_| format!("expected a weekday such as `mon` or `friday`, got {s:?}"))
}

fn init_logging() {
    let filters = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned());
    pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .init();
}

/// Never fails: a transport error is logged and yields an empty page.
async fn fetch_page(client: &Client, base: &Url, monday: NaiveDate) -> String {
    fetch::week_page(client, base, monday)
        .await
        .unwrap_or_else(|e| {
            log::error!("{}", Error::from(e));
            String::new()
        })
}

/// Never fails: a page without a menu table yields an empty week.
fn extract_week(html: &str, monday: NaiveDate) -> Week {
    let document = Html::parse_document(html);
    Week::from_html_element(monday, document.root_element()).unwrap_or_else(|e| {
        log::error!("{}", Error::from(e));
        Week::starting(monday)
    })
}

fn compose_message(week: &Week, weekday: Weekday) -> Option<String> {
    week.day(weekday).map(format::render)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging();
    log::info!("Cantine Maternelle Bordeaux menu");

    let config = Config::from_env()?;
    let sender = if cli.dry_run {
        Sender::Stdout
    } else {
        Sender::from_setting(config.sender.as_deref())?
    };
    let today = Local::now().date_naive();
    let monday = monday_of(cli.start_date.unwrap_or(today));

    let client = fetch::make_client()?;
    let html = fetch_page(&client, &config.base_url, monday).await;
    let week = extract_week(&html, monday);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&week)?);
        return Ok(());
    }

    let weekday = cli.weekday.unwrap_or_else(|| today.weekday());
    let Some(message) = compose_message(&week, weekday) else {
        log::warn!("No menu on {weekday}, nothing to send");
        return Ok(());
    };
    if week.is_empty() {
        log::warn!(
            "Menu of the week of {} is empty, sending it anyway",
            week.monday()
        );
    }

    if let Err(e) = sender.send(&config.group_id, &message).await {
        log::error!("{e}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use std::fs;

    fn fixture() -> String {
        fs::read_to_string("./src/parse/html_examples/week_menu/maternelle_241014.html").unwrap()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 14).unwrap()
    }

    #[test]
    fn test_wednesday_message() {
        let week = extract_week(&fixture(), monday());
        let message = compose_message(&week, Weekday::Wed).unwrap();
        assert_eq!(
            message,
            concat!(
                "\n",
                "*Menu du mercredi 16/10/24* \n",
                "\n",
                "Potage / Entrée: \n",
                "Entrée classique: _Carottes râpées_\n",
                "Entrée sans porc: _Carottes râpées_\n",
                "Entrée sans viande: _Carottes râpées_\n",
                "Entrée végétarien: _Carottes râpées_\n",
                "\n",
                "Plat classique: _Hachis parmentier_\n",
                "Plat sans porc: _Hachis parmentier_\n",
                "Plat sans viande: _Parmentier de poisson_\n",
                "Plat végétarien: _Parmentier végétal_\n",
                "Garniture classique: \n",
                "Garniture sans porc: \n",
                "Garniture sans viande: \n",
                "Garniture végétarien: \n",
                "\n",
                "Produit laitier: \n",
                "\n",
                "Dessert: _Gâteau maison_\n",
                "\n",
                "Goûter 1: _Pain, chocolat_\n",
                "Goûter 2: _Compote_\n",
                "\n",
                "Bonne journée !\n",
            )
        );
    }

    #[test]
    fn test_monday_message() {
        let week = extract_week(&fixture(), monday());
        let message = compose_message(&week, Weekday::Mon).unwrap();
        assert!(message.starts_with("\n*Menu du lundi 14/10/24* \n"));
        assert!(message.contains("\nPotage / Entrée: _Velouté de potiron_\n"));
        assert!(message.contains("\nPlat classique: _Rôti de porc_\n"));
        assert!(message.contains("\nGoûter 1: _Pain, beurre_\n"));
        assert!(message.contains("\nGoûter 2: _Lait_\n"));
    }

    #[test]
    fn test_weekend_has_no_message() {
        let week = extract_week(&fixture(), monday());
        assert_eq!(compose_message(&week, Weekday::Sat), None);
        assert_eq!(compose_message(&week, Weekday::Sun), None);
    }

    #[test]
    fn test_page_without_menu_gives_empty_message() {
        let week = extract_week("<html><body>Erreur 404</body></html>", monday());
        assert!(week.is_empty());
        let message = compose_message(&week, Weekday::Tue).unwrap();
        assert!(message.starts_with("\n*Menu du mardi 15/10/24* \n"));
        assert!(!message.contains('_'));
    }

    #[tokio::test]
    async fn test_unreachable_site_gives_empty_page() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let base: Url = format!("http://{addr}/").parse().unwrap();
        let client = fetch::make_client().unwrap();

        let html = fetch_page(&client, &base, monday()).await;
        assert_eq!(html, "");
        let week = extract_week(&html, monday());
        assert!(week.is_empty());
        assert!(compose_message(&week, Weekday::Thu)
            .unwrap()
            .starts_with("\n*Menu du jeudi 17/10/24* \n"));
    }

    #[test]
    fn test_cli() {
        let cli = Cli::try_parse_from(["cantine_menu"]).unwrap();
        assert_eq!(cli.start_date, None);
        assert_eq!(cli.weekday, None);
        assert!(!cli.dry_run && !cli.json);

        let cli =
            Cli::try_parse_from(["cantine_menu", "241016", "--weekday", "wed", "--dry-run"])
                .unwrap();
        assert_eq!(cli.start_date, NaiveDate::from_ymd_opt(2024, 10, 16));
        assert_eq!(cli.weekday, Some(Weekday::Wed));
        assert!(cli.dry_run);
    }

    #[test]
    fn test_cli_errors() {
        assert!(Cli::try_parse_from(["cantine_menu", "2024-10-14"]).is_err());
        assert!(Cli::try_parse_from(["cantine_menu", "--weekday", "lundi"]).is_err());
        let version = Cli::try_parse_from(["cantine_menu", "--version"]).unwrap_err();
        assert_eq!(version.kind(), ErrorKind::DisplayVersion);
    }
}
