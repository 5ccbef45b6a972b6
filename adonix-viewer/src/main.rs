use std::env;
use std::fs;
use std::process;

use log::info;

use adonix_schedule::{EventSource, ExpandedSet, FavoriteSet, ScheduleIndex};

mod cli;
mod shell;

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "adonix_viewer=info,adonix_schedule=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = cli::parse(env::args().skip(1).collect());
    let source = EventSource::with_endpoint(&args.endpoint);

    let one_shot = args.day.is_some() || args.search.is_some() || args.export.is_some();
    if !one_shot {
        shell::run(source).await;
        return;
    }

    // One fetch serves every listing requested on the command line.
    let mut index = ScheduleIndex::new();
    index.refresh(&source).await;

    if !index.is_available() {
        eprintln!("schedule unavailable");
        process::exit(1);
    }

    let favorites = FavoriteSet::new();
    let expanded = ExpandedSet::new();

    if let Some(day) = args.day.as_deref() {
        if let Some(rows) = index.list_for_day(day, &favorites) {
            shell::print_rows(&rows, &expanded);
        }
    }

    if let Some(text) = args.search.as_deref() {
        if let Some(rows) = index.search(text, &favorites) {
            shell::print_rows(&rows, &expanded);
        }
    }

    if let Some(path) = args.export.as_deref() {
        let events = index.events().unwrap_or(&[]);
        let document = adonix_schedule::to_ics(events).to_string();

        if let Err(err) = fs::write(path, document) {
            eprintln!("failed to write {path}: {err}");
            process::exit(1);
        }

        info!("wrote {} events to {path}", events.len());
    }
}
