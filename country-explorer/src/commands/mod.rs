//! One-shot commands: each drives a view through a single fetch.

pub mod browse;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use country_core::{
    ApiError, CountryClient, CountryDetails, CountryRecord, DetailView, HttpRequest, HttpResponse,
    ListView, SearchParams, ViewState,
};
use tokio::time::{interval, MissedTickBehavior};

use crate::cli::{RegionArgs, SearchArgs, ShowArgs};
use crate::output;
use crate::transport::Transport;

pub struct Context {
    pub client: CountryClient,
    pub transport: Transport,
    pub json: bool,
}

pub async fn list(ctx: &Context) -> Result<ExitCode> {
    let request = ctx.client.build_list_countries();
    run_list(ctx, request, |client, response| client.parse_list_countries(response)).await
}

pub async fn region(ctx: &Context, args: RegionArgs) -> Result<ExitCode> {
    let request = ctx.client.build_countries_by_region(&args.region);
    run_list(ctx, request, |client, response| {
        client.parse_countries_by_region(response)
    })
    .await
}

pub async fn search(ctx: &Context, args: SearchArgs) -> Result<ExitCode> {
    let params = SearchParams {
        name: args.name,
        capital: args.capital,
        region: args.region,
        timezone: args.timezone,
    };
    let request = ctx.client.build_search_countries(&params);
    run_list(ctx, request, |client, response| {
        client.parse_search_countries(response)
    })
    .await
}

async fn run_list<F>(ctx: &Context, request: HttpRequest, parse: F) -> Result<ExitCode>
where
    F: FnOnce(&CountryClient, HttpResponse) -> Result<Vec<CountryRecord>, ApiError>,
{
    let mut view = ListView::new();
    let ticket = view.load();
    let result = ctx
        .transport
        .send(request)
        .await
        .and_then(|response| parse(&ctx.client, response));
    view.resolve(ticket, result);

    match view.state() {
        ViewState::Success(countries) if ctx.json => output::json_pretty(countries)?,
        _ => output::print_list(&view),
    }
    Ok(exit_code(view.state()))
}

pub async fn show(ctx: &Context, args: ShowArgs) -> Result<ExitCode> {
    let mut view = DetailView::new();
    if let Some(ticket) = view.enter(&args.code) {
        let request = ctx.client.build_get_country(view.code());
        let result = ctx
            .transport
            .send(request)
            .await
            .and_then(|response| ctx.client.parse_get_country(response));
        view.resolve(ticket, result);
    }

    match view.state() {
        ViewState::Success(details) if ctx.json => output::json_pretty(details)?,
        ViewState::Success(details) if args.live => {
            output::print_detail(&view, Utc::now());
            tick_clock(details).await?;
        }
        _ => output::print_detail(&view, Utc::now()),
    }
    Ok(exit_code(view.state()))
}

/// Reprint the local time every second until Ctrl-C.
async fn tick_clock(details: &CountryDetails) -> Result<()> {
    if details.timezones.is_empty() {
        return Ok(());
    }
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                println!("Current Time: {}", output::current_time(details, Utc::now()));
            }
            result = tokio::signal::ctrl_c() => return Ok(result?),
        }
    }
}

fn exit_code<T>(state: &ViewState<T>) -> ExitCode {
    match state {
        ViewState::Error(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
