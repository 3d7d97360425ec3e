use anyhow::{Context, Result};
use history_core::config::HistoryConfig;
use history_core::{HistoryEngine, TypingEvent};
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

// Replays committed words into the user history.
// Each stdin line is one JSON `TypingEvent`, e.g.
//   {"context":{"words":["the"],"is_sentence_start":false},"word":"cat","trusted":true,"timestamp":1}
// The dictionary is saved on EOF or on a line reading `EXIT`.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = HistoryConfig::load().context("failed to load configuration")?;
    let mut engine = HistoryEngine::from_config(&config);
    tracing::info!(
        model_order = engine.learning_engine().model_order(),
        unigrams = engine.store.unigram_count(),
        ngrams = engine.store.ngram_count(),
        "user history engine starting"
    );

    let mut recorded = 0usize;
    for line in io::stdin().lock().lines() {
        let input = line.context("failed to read stdin")?;
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input == "EXIT" {
            tracing::info!("received EXIT");
            break;
        }

        match serde_json::from_str::<TypingEvent>(input) {
            Ok(event) => {
                engine.record(&event);
                recorded += 1;
            }
            Err(e) => tracing::warn!(error = %e, "skipping malformed typing event"),
        }
    }

    engine.save_dictionary().context("failed to save user history")?;
    tracing::info!(
        events = recorded,
        unigrams = engine.store.unigram_count(),
        ngrams = engine.store.ngram_count(),
        "shutting down"
    );
    Ok(())
}
