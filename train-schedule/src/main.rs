use std::process::ExitCode;

use chrono::Local;
use tracing_subscriber::EnvFilter;

use train_schedule::domain::ScheduleQuery;
use train_schedule::gotransit::{FixtureTimetable, TimetableClient, TimetableConfig};
use train_schedule::schedule::{ScheduleError, ScheduleOutcome, TimetableSource, get_train_services};

/// Stops queried when none are given (Mimico to Union).
const DEFAULT_DEPARTURE: &str = "ME";
const DEFAULT_DESTINATION: &str = "UN";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Usage: train-schedule [FROM] [TO] [DATE]
    let mut args = std::env::args().skip(1);
    let departure = args.next().unwrap_or_else(|| DEFAULT_DEPARTURE.to_string());
    let destination = args
        .next()
        .unwrap_or_else(|| DEFAULT_DESTINATION.to_string());
    let date = args
        .next()
        .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());

    let query = ScheduleQuery::new(departure, destination, date);

    let result = match std::env::var("GOTRANSIT_FIXTURES") {
        Ok(dir) => match FixtureTimetable::new(&dir) {
            Ok(fixtures) => run(&fixtures, &query).await,
            Err(e) => Err(e.into()),
        },
        Err(_) => match TimetableClient::new(config_from_env()) {
            Ok(client) => run(&client, &query).await,
            Err(e) => Err(e.into()),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Schedule query failed: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Build the client config from `GOTRANSIT_*` environment variables.
fn config_from_env() -> TimetableConfig {
    let mut config = TimetableConfig::new();

    if let Ok(url) = std::env::var("GOTRANSIT_BASE_URL") {
        config = config.with_base_url(url);
    }
    if let Ok(language) = std::env::var("GOTRANSIT_LANGUAGE") {
        config = config.with_language(language);
    }
    if let Ok(secs) = std::env::var("GOTRANSIT_TIMEOUT_SECS") {
        match secs.parse() {
            Ok(secs) => config = config.with_timeout(secs),
            Err(_) => eprintln!("Warning: ignoring invalid GOTRANSIT_TIMEOUT_SECS={secs}"),
        }
    }

    config
}

/// Query the route and its reverse, then print both.
async fn run<S: TimetableSource>(source: &S, query: &ScheduleQuery) -> Result<(), ScheduleError> {
    let reverse = query.reversed();

    let (morning, evening) = futures::future::join(
        get_train_services(source, query),
        get_train_services(source, &reverse),
    )
    .await;

    print_services(query, &morning?);
    print_services(&reverse, &evening?);

    Ok(())
}

fn print_services(query: &ScheduleQuery, outcome: &ScheduleOutcome) {
    if let Some(text) = render_services(query, outcome) {
        println!("{text}");
    }
}

/// Header plus one line per record; nothing for a failed query, whose
/// status has already been logged.
fn render_services(query: &ScheduleQuery, outcome: &ScheduleOutcome) -> Option<String> {
    if outcome.is_failure() {
        return None;
    }

    let mut text = format!("Trains from {query}:\n");
    for service in outcome.records() {
        text.push_str(&format!("  {service}\n"));
    }
    Some(text)
}
