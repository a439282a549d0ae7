//! Cycle a name through its disguises and keep the results.
//!
//! Run with: cargo run --example cycle_names -- "Ada Lovelace"
//! Set RUST_LOG=debug to see store activity. Pass --reset as a second
//! argument to clear the stored history first.

use namecloak::config::Config;
use namecloak::draft::DraftSession;
use namecloak::store::{FileStore, HistoryStore};
use std::time::{Duration, Instant};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Ada Lovelace".to_string());

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Ignoring config: {e}");
        Config::default()
    });

    let backend = FileStore::default_location()
        .unwrap_or_else(|| FileStore::new(std::env::temp_dir().join("namecloak-demo")));
    let data_dir = backend.dir().to_path_buf();
    let mut store = HistoryStore::with_config(backend, config.store.clone());
    if std::env::args().nth(2).as_deref() == Some("--reset") {
        store.remove_all_history();
    }
    let mut session = DraftSession::new(&config.draft);

    // Type the name one character at a time, 100ms apart.
    let mut now = Instant::now();
    let mut typed = String::new();
    for c in name.chars() {
        typed.push(c);
        session.edit(typed.clone(), now);
        println!("{:<24} -> {}", session.input(), session.transformed_text());
        now += Duration::from_millis(100);
        session.poll(now, &mut store);
    }

    // Pause long enough for the debounced commit.
    now += config.draft.debounce();
    if session.poll(now, &mut store) {
        println!("\nCommitted after pause: {}", session.transformed_text());
    }

    println!("\nTransform again:");
    for _ in 0..3 {
        if let Some(t) = session.transform_again(&mut store).cloned() {
            println!("  [{}] {}", session.variant_index(), t.transformed);
        }
    }

    session.toggle_current_favorite(&mut store);

    println!("\nHistory ({} kept in {}):", store.history().len(), data_dir.display());
    for t in store.history() {
        let star = if store.is_favorite(t) { "*" } else { " " };
        println!(" {star} {} -> {}  ({})", t.original, t.transformed, t.created_at.to_rfc3339());
    }
}
