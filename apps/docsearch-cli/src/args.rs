//! Query-line parsing shared by the one-shot command and the interactive
//! loop: free text plus `-c/--category` and `-t/--type` options. The
//! literal token `all` clears a dimension, mirroring the dropdowns'
//! "no constraint" entry.

use docsearch_core::error::{Error, Result};
use docsearch_core::types::{DocumentType, Filter, Query};

pub fn build_query(argv: &[String]) -> Result<Query> {
    let mut term_parts: Vec<&str> = Vec::new();
    let mut category = Filter::All;
    let mut doc_type = Filter::All;

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "-c" | "--category" => {
                let value = option_value(argv, i, "-c")?;
                category = if value == "all" { Filter::All } else { Filter::Only(value.to_string()) };
                i += 2;
            }
            "-t" | "--type" => {
                let value = option_value(argv, i, "-t")?;
                doc_type = if value == "all" { Filter::All } else { Filter::Only(value.parse::<DocumentType>()?) };
                i += 2;
            }
            part => {
                term_parts.push(part);
                i += 1;
            }
        }
    }

    Ok(Query { term: term_parts.join(" "), category, doc_type })
}

fn option_value<'a>(argv: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    argv.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| Error::InvalidQuery(format!("{flag} requires a value")))
}
