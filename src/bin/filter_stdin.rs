//! Simple CLI that reads HTML from stdin, filters the article region and
//! writes the filtered HTML to stdout and the stats as JSON to stderr.
//!
//! Usage: `filter_stdin [overrides.json] < page.html`

use std::io::{self, Read};

use clip_filter::{create_filter_config, ContentFilter, FilterOverrides};
use dom_query::Document;

/// Candidate roots, most specific first.
const ROOT_SELECTORS: [&str; 3] = ["article", "main", "body"];

fn read_overrides(path: Option<String>) -> clip_filter::Result<FilterOverrides> {
    let Some(path) = path else {
        return Ok(FilterOverrides::default());
    };
    let json = std::fs::read_to_string(&path).unwrap_or_else(|err| {
        eprintln!("Failed to read {path}: {err}");
        std::process::exit(1);
    });
    FilterOverrides::from_json(&json)
}

fn main() {
    env_logger::init();

    let overrides = match read_overrides(std::env::args().nth(1)) {
        Ok(overrides) => overrides,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    // Read HTML from stdin
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let doc = Document::from(html.as_str());
    let Some(root) = ROOT_SELECTORS
        .iter()
        .map(|selector| doc.select(selector))
        .find(|sel| sel.exists())
    else {
        eprintln!("No article, main or body element found");
        std::process::exit(1);
    };

    let filter = ContentFilter::new(create_filter_config(&overrides));
    let stats = filter.apply(&root);

    println!("{}", root.html());
    eprintln!("{}", serde_json::to_string(&stats).unwrap_or_default());
}
