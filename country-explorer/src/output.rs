//! Output formatting helpers.
//!
//! The `*_lines` functions build plain text so they can be tested; the
//! `print_*` functions add color and write to the terminal.

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use country_core::{time_at_offset, CountryDetails, CountryRecord, DetailView, ListView, ViewState};
use serde::Serialize;

const LOADING: &str = "Loading...";

pub fn list_lines(view: &ListView) -> Vec<String> {
    match view.state() {
        ViewState::Idle => Vec::new(),
        ViewState::Loading => vec![LOADING.to_string()],
        ViewState::Error(message) => vec![message.clone()],
        ViewState::Success(countries) if countries.is_empty() => {
            vec!["No countries found.".to_string()]
        }
        ViewState::Success(countries) => countries.iter().map(card).collect(),
    }
}

fn card(country: &CountryRecord) -> String {
    let flag = if country.flag.is_empty() {
        "No Flag Available"
    } else {
        country.flag.as_str()
    };
    format!(
        "{:<4} {}  \u{1F310} {}  {}",
        country.country_code, country.name, country.region, flag
    )
}

pub fn detail_lines(view: &DetailView, now: DateTime<Utc>) -> Vec<String> {
    match view.state() {
        ViewState::Idle => Vec::new(),
        ViewState::Loading => vec![LOADING.to_string()],
        ViewState::Error(message) => vec![message.clone()],
        ViewState::Success(details) => details_page(details, now),
    }
}

fn details_page(details: &CountryDetails, now: DateTime<Utc>) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(if details.flag.is_empty() {
        "No Flag Available".to_string()
    } else {
        details.flag.clone()
    });
    lines.push(details.name.clone());
    lines.push(format!("\u{1F310} {}", details.region));

    let timezone = details.timezones.first().map(String::as_str).unwrap_or_default();
    lines.push(format!("Time Zone: {timezone}"));
    lines.push(format!("Current Time: {}", current_time(details, now)));

    let capital = details
        .capital
        .as_ref()
        .and_then(|capital| capital.first())
        .map(String::as_str)
        .unwrap_or_default();
    lines.push(format!("Capital: {capital}"));
    lines.push(format!("Population: {}", group_thousands(details.population)));

    lines.push("Languages".to_string());
    if details.languages.is_empty() {
        lines.push("  No language data available".to_string());
    }
    for language in details.languages.values() {
        lines.push(format!("  - {language}"));
    }

    lines.push("Currency".to_string());
    if details.currency.is_empty() {
        lines.push("  No currency data available".to_string());
    }
    for currency in details.currency.values() {
        lines.push(format!(
            "  - {} ({})",
            currency.name.as_deref().unwrap_or("Unknown Currency"),
            currency.symbol.as_deref().unwrap_or("Unknown Symbol")
        ));
    }

    lines.push(format!("Google Maps: {}", details.maps.google_maps));
    lines.push(format!("OpenStreetMap: {}", details.maps.open_street_maps));
    lines
}

/// Local time at the first listed timezone; blank when none is listed.
pub fn current_time(details: &CountryDetails, now: DateTime<Utc>) -> String {
    details
        .timezones
        .first()
        .map(|offset| time_at_offset(offset, now))
        .unwrap_or_default()
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn print_list(view: &ListView) {
    let lines = list_lines(view);
    match view.state() {
        ViewState::Error(_) => lines.iter().for_each(|line| error(line)),
        ViewState::Success(countries) if !countries.is_empty() => {
            lines.iter().for_each(|line| println!("{line}"))
        }
        _ => lines.iter().for_each(|line| eprintln!("{}", line.dimmed())),
    }
}

pub fn print_detail(view: &DetailView, now: DateTime<Utc>) {
    let lines = detail_lines(view, now);
    match view.state() {
        ViewState::Error(_) => lines.iter().for_each(|line| error(line)),
        ViewState::Success(_) => {
            for (i, line) in lines.iter().enumerate() {
                if i == 1 {
                    println!("{}", line.bold());
                } else {
                    println!("{line}");
                }
            }
        }
        _ => lines.iter().for_each(|line| eprintln!("{}", line.dimmed())),
    }
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use country_core::{ApiError, Currency, Maps};

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn details() -> CountryDetails {
        CountryDetails {
            name: "India".to_string(),
            flag: String::new(),
            region: "Asia".to_string(),
            population: 1_380_004_385,
            languages: [("hin".to_string(), "Hindi".to_string())].into(),
            currency: [(
                "INR".to_string(),
                Currency {
                    name: Some("Indian rupee".to_string()),
                    symbol: None,
                },
            )]
            .into(),
            timezones: vec!["UTC+05:30".to_string()],
            capital: Some(vec!["New Delhi".to_string()]),
            maps: Maps::default(),
        }
    }

    #[test]
    fn list_shows_loading_then_cards() {
        let mut view = ListView::new();
        let ticket = view.load();
        assert_eq!(list_lines(&view), vec!["Loading..."]);

        view.resolve(
            ticket,
            Ok(vec![CountryRecord {
                name: "Chile".to_string(),
                flag: String::new(),
                region: "Americas".to_string(),
                country_code: "CHL".to_string(),
            }]),
        );
        let lines = list_lines(&view);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("CHL  Chile"));
        assert!(lines[0].ends_with("No Flag Available"));
    }

    #[test]
    fn empty_result_says_no_countries() {
        let mut view = ListView::new();
        let ticket = view.load();
        view.resolve(ticket, Ok(Vec::new()));
        assert_eq!(list_lines(&view), vec!["No countries found."]);
    }

    #[test]
    fn list_error_shows_fixed_message() {
        let mut view = ListView::new();
        let ticket = view.load();
        view.resolve(ticket, Err(ApiError::NotFound));
        assert_eq!(list_lines(&view), vec!["Failed to fetch countries"]);
    }

    #[test]
    fn detail_page_renders_fallbacks_and_clock() {
        let mut view = DetailView::new();
        let ticket = view.enter("IND").unwrap();
        view.resolve(ticket, Ok(details()));

        let lines = detail_lines(&view, noon());
        assert_eq!(lines[0], "No Flag Available");
        assert!(lines.contains(&"Current Time: 05:30:00 PM".to_string()));
        assert!(lines.contains(&"Capital: New Delhi".to_string()));
        assert!(lines.contains(&"Population: 1,380,004,385".to_string()));
        assert!(lines.contains(&"  - Indian rupee (Unknown Symbol)".to_string()));
    }

    #[test]
    fn malformed_timezone_renders_invalid() {
        let mut details = details();
        details.timezones = vec!["GMT+5".to_string()];
        assert_eq!(current_time(&details, noon()), "Invalid Timezone");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(29_136_808), "29,136,808");
    }
}
