//! Reads one page of HTML from stdin and prints the extracted record as JSON.
//!
//! Usage: `mikan_extract <page-kind> [base-url] < page.html`
//!
//! The base URL falls back to `MIKAN_BASE_URL`, then to the primary mirror.
//! Logs go to stderr; set `RUST_LOG=rs_mikan=debug` for parser traces.

use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

use rs_mikan::{extract_page_bytes, Options, PageKind};

fn main() -> ExitCode {
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| "rs_mikan=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let Some(kind) = args.next() else {
        let names: Vec<&str> = PageKind::ALL.iter().map(|kind| kind.name()).collect();
        eprintln!("Usage: mikan_extract <page-kind> [base-url] < page.html");
        eprintln!("  page-kind: {}", names.join(", "));
        return ExitCode::FAILURE;
    };

    let kind: PageKind = match kind.parse() {
        Ok(kind) => kind,
        Err(err) => {
            tracing::error!(%err, "cannot extract");
            return ExitCode::FAILURE;
        }
    };

    let options = Options {
        base_url: args
            .next()
            .or_else(|| env::var("MIKAN_BASE_URL").ok())
            .unwrap_or_else(|| Options::default().base_url),
        ..Options::default()
    };

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        tracing::error!(%err, "failed to read stdin");
        return ExitCode::FAILURE;
    }

    match extract_page_bytes(kind, &html, &options) {
        Ok(page) => {
            println!("{}", serde_json::to_string(&page).unwrap_or_default());
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, page = %kind, "cannot extract");
            ExitCode::FAILURE
        }
    }
}
