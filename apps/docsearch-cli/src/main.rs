use std::env;

use docsearch_core::config::{expand_path, Config};
use docsearch_core::corpus;
use docsearch_core::traits::SearchEngine;
use docsearch_core::types::{Document, Query};
use docsearch_engine::{facets, MemorySearchEngine};

mod args;
mod interactive;
mod render;

fn parse_args() -> (String, Vec<String>) {
    let mut argv: Vec<String> = env::args().collect();
    let prog = argv.remove(0);
    if argv.is_empty() {
        eprintln!("Usage: {} <query|facets|interactive> [args...]", prog);
        eprintln!("Examples:");
        eprintln!("  {} query \"การเงิน\"", prog);
        eprintln!("  {} query \"รายงาน\" -c รายงานการเงิน -t XLSX", prog);
        eprintln!("  {} interactive", prog);
        std::process::exit(1);
    }
    let cmd = argv.remove(0);
    (cmd, argv)
}

fn load_corpus(config: &Config) -> anyhow::Result<Vec<Document>> {
    match config.get::<String>("data.corpus_path") {
        Ok(path) => {
            let path = expand_path(path);
            Ok(corpus::load(&path)?)
        }
        Err(_) => {
            tracing::debug!("no corpus path configured, using the built-in sample set");
            Ok(corpus::sample_documents())
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let (cmd, argv) = parse_args();
    let preview_chars: usize = config.get("display.preview_chars").unwrap_or(80);

    let engine = MemorySearchEngine::new(load_corpus(&config)?);
    match cmd.as_str() {
        "query" => {
            let query = args::build_query(&argv)?;
            let docs = engine.search(&query)?;
            render::results(&docs, &query, preview_chars);
        }
        "facets" => {
            println!("📊 Categories:");
            for (category, count) in facets::category_counts(engine.corpus(), &Query::default()) {
                println!("  {}: {} documents", category, count);
            }
            println!("📊 Types:");
            for doc_type in engine.types()? {
                println!("  {}", doc_type);
            }
        }
        "interactive" => {
            let debounce_ms: u64 = config.get("search.debounce_ms").unwrap_or(300);
            interactive::run(engine, debounce_ms, preview_chars)?;
        }
        _ => {
            eprintln!("Unknown command: {}", cmd);
            std::process::exit(1);
        }
    }
    Ok(())
}
