mod data;

use std::fs::File;
use std::time::Duration;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabula::prelude::*;

use data::{FRUITS, vehicle_columns, vehicles};

/// Environment variable overriding the debounce, in milliseconds.
const DEBOUNCE_ENV: &str = "TABULA_DEBOUNCE_MS";

fn suggest_config() -> SuggestConfig {
    match std::env::var(DEBOUNCE_ENV).ok().map(|v| v.parse::<u64>()) {
        Some(Ok(ms)) => SuggestConfig::default().with_debounce(Duration::from_millis(ms)),
        Some(Err(e)) => {
            log::warn!("Ignoring invalid {}: {}", DEBOUNCE_ENV, e);
            SuggestConfig::default()
        }
        None => SuggestConfig::default(),
    }
}

fn print_table(table: &Table<data::Vehicle>) {
    let rendered = table.render();
    for err in rendered.errors() {
        log::debug!("Cell placeholder: {}", err);
    }
    println!("{}", format_plain(&rendered));
    for err in &rendered.sort_errors {
        println!("  unsorted: {}", err);
    }
    println!();
}

fn run_table() -> Result<(), TableError> {
    let mut table = Table::new(vehicle_columns(), vehicles())?;

    println!("== Vehicles (original order)");
    print_table(&table);

    for label in ["Price", "Price", "OnRoad", "Vehicle", "Image"] {
        let state = table.toggle_sort(label);
        println!(
            "== toggle '{}' -> {:?} {:?}",
            label, state.active, state.direction
        );
        print_table(&table);
    }
    Ok(())
}

async fn run_typeahead() {
    let source = StaticSource::new(FRUITS.iter().copied()).with_latency(Duration::from_secs(1));
    log::info!("Typeahead over {} candidates", source.candidates().len());
    let pipeline = SuggestionPipeline::new(source, suggest_config());
    let mut updates = pipeline.subscribe();

    println!("== Typeahead (debounce {:?})", pipeline.config().debounce);
    for keystroke in ["a", "ap", "app"] {
        println!("typed '{}'", keystroke);
        pipeline.on_input(keystroke);
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    match updates.wait_for(|s| !s.status.is_busy()).await {
        Ok(snapshot) => {
            println!("status: {:?}", snapshot.status);
            for label in &snapshot.results {
                if let Some((typed, rest)) = highlight(&snapshot.query, label) {
                    println!("  [{}]{}", typed, rest);
                }
            }
        }
        Err(e) => log::warn!("Suggestion updates closed: {}", e),
    }

    if let Some(choice) = pipeline.select(0) {
        println!("selected '{}'", choice);
    }

    pipeline.on_input("");
    println!("cleared -> {:?}", pipeline.status());
}

#[tokio::main]
async fn main() {
    let log_file = File::create("tabula-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run_table() {
        eprintln!("Error: {}", e);
    }
    run_typeahead().await;
}
