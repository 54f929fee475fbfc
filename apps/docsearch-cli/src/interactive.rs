//! Interactive search loop. Every query line is routed through the
//! debounced scheduler, so typing a new line before the previous search
//! fires supersedes it, exactly as the live search box does.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use docsearch_core::error::Error;
use docsearch_core::traits::SearchEngine;
use docsearch_core::types::{Document, Query};
use docsearch_engine::{facets, MemorySearchEngine, QueryDebouncer};

use crate::{args, render};

pub fn run(engine: MemorySearchEngine, debounce_ms: u64, preview_chars: usize) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    println!("🔍 ระบบค้นหาเอกสาร — Interactive Search");
    println!("=======================================");
    println!("📊 Total documents: {}", engine.corpus().len());
    show_help();

    // Multi-thread runtime: the blocking stdin reads below do not stall the
    // scheduler's timers.
    runtime.block_on(search_loop(Arc::new(engine), debounce_ms, preview_chars))
}

async fn search_loop(
    engine: Arc<MemorySearchEngine>,
    debounce_ms: u64,
    preview_chars: usize,
) -> anyhow::Result<()> {
    let debouncer = QueryDebouncer::new(Arc::clone(&engine), Duration::from_millis(debounce_ms));
    let mut last_results: Vec<Document> = engine.search(&Query::default())?;

    loop {
        print!("search> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/help" | "/h" => show_help(),
            "/facets" | "/f" => show_facets(&engine),
            "/stats" | "/s" => show_stats(&engine),
            "/quit" | "/q" | "quit" | "exit" => {
                println!("👋 Goodbye!");
                break;
            }
            _ => {
                let argv: Vec<String> = input.split_whitespace().map(String::from).collect();
                match args::build_query(&argv) {
                    Err(e) => println!("❌ {}", e),
                    Ok(query) => {
                        let seq = debouncer.submit(query);
                        match debouncer.applied(seq).await {
                            Ok(update) => match update.outcome {
                                Ok(docs) => {
                                    render::results(&docs, &update.query, preview_chars);
                                    last_results = docs;
                                }
                                Err(e) => {
                                    println!("⚠️  {} — showing last known results", e);
                                    render::results(&last_results, &update.query, preview_chars);
                                }
                            },
                            // Superseded by a newer line; nothing to render.
                            Err(Error::Cancelled) => {}
                            Err(e) => println!("❌ Search error: {}", e),
                        }
                    }
                }
            }
        }
        println!();
    }

    Ok(())
}

fn show_help() {
    println!();
    println!("🎯 Commands:");
    println!("  /help, /h      Show this help");
    println!("  /facets, /f    List categories and types");
    println!("  /stats, /s     Show corpus statistics");
    println!("  /quit, /q      Exit");
    println!("  <query>        Search for text");
    println!();
    println!("🎯 Query options:");
    println!("  -c <category>  Filter by category ('all' to clear)");
    println!("  -t <type>      Filter by type: PDF, DOCX, XLSX, PPTX ('all' to clear)");
    println!();
    println!("📋 Examples:");
    println!("  การเงิน");
    println!("  รายงาน -c รายงานการเงิน");
    println!("  -t PDF");
    println!();
}

fn show_facets(engine: &MemorySearchEngine) {
    println!("📊 Categories:");
    for (category, count) in facets::category_counts(engine.corpus(), &Query::default()) {
        println!("  {}: {} documents", category, count);
    }
    println!("📊 Types:");
    for doc_type in facets::distinct_types(engine.corpus()) {
        println!("  {} {}", render::type_icon(doc_type), doc_type);
    }
}

fn show_stats(engine: &MemorySearchEngine) {
    let corpus = engine.corpus();
    println!("📈 Corpus statistics:");
    println!("  Total documents: {}", corpus.len());
    println!("  Categories: {}", facets::distinct_categories(corpus).len());
    println!("  Types: {}", facets::distinct_types(corpus).len());
}
