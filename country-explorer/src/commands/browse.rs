//! Interactive search: stdin lines are keystrokes, the debouncer decides
//! when to search.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use colored::Colorize;
use country_core::{
    ApiError, CountryClient, CountryRecord, Debouncer, HttpRequest, ListView, Ticket, ViewState,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::sleep_until;
use tracing::debug;

use super::Context;
use crate::output;
use crate::transport::Transport;

type Outcome = (Ticket, Result<Vec<CountryRecord>, ApiError>);

pub async fn run(ctx: &Context) -> Result<ExitCode> {
    let mut view = ListView::new();
    let mut debouncer = Debouncer::default();
    let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();

    let (ticket, params) = view.mount();
    spawn_search(ctx, ticket, ctx.client.build_search_countries(&params), tx.clone());
    output::print_list(&view);

    eprintln!("{}", "Type to search; an empty line clears, EOF quits.".dimmed());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        let deadline = debouncer.deadline();
        let wake = tokio::time::Instant::from_std(deadline.unwrap_or_else(Instant::now));

        tokio::select! {
            line = lines.next_line(), if stdin_open => match line? {
                Some(line) => debouncer.input(&line, Instant::now()),
                None => stdin_open = false,
            },
            _ = sleep_until(wake), if deadline.is_some() => {
                if let Some(term) = debouncer.poll(Instant::now()).map(str::to_string) {
                    match view.commit(&term) {
                        Some((ticket, params)) => {
                            debug!(%term, ?params, "search committed");
                            spawn_search(ctx, ticket, ctx.client.build_search_countries(&params), tx.clone());
                        }
                        None => debug!("search cleared"),
                    }
                    output::print_list(&view);
                }
            }
            Some((ticket, result)) = rx.recv() => {
                if view.resolve(ticket, result) {
                    output::print_list(&view);
                } else {
                    debug!(?ticket, "dropped superseded response");
                }
            }
        }

        let loading = matches!(view.state(), ViewState::Loading);
        if !stdin_open && debouncer.deadline().is_none() && !loading {
            break;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn spawn_search(ctx: &Context, ticket: Ticket, request: HttpRequest, tx: mpsc::UnboundedSender<Outcome>) {
    let client: CountryClient = ctx.client.clone();
    let transport: Transport = ctx.transport.clone();
    tokio::task::spawn_blocking(move || {
        let result = transport
            .execute(&request)
            .and_then(|response| client.parse_search_countries(response));
        // The receiver only goes away when the loop has exited.
        let _ = tx.send((ticket, result));
    });
}
