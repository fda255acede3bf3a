//! CLI commands for swordlink: analyze, scan, protocols.

use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;

use crate::analyzer;
use crate::config;
use crate::error;
use crate::protocol::PROTOCOLS;
use crate::scanner;
use crate::types::{ParsedReference, ScannedLink};

/// One line of `analyze --json` output.
#[derive(Serialize)]
struct AnalyzeReport<'a> {
    /// Whether the link was recognized.
    recognized: bool,
    /// Analysis result, absent when unrecognized.
    reference: Option<ParsedReference>,
    /// Link as given on the command line.
    uri: &'a str,
}

/// Summary attached to `scan --json` output.
#[derive(Serialize)]
struct ScanReport<'a> {
    /// Every link found, in report order.
    links: &'a [ScannedLink],
    /// Total number of links found.
    total: usize,
    /// Number of links that were not recognized.
    unrecognized: usize,
}

/// Analyze each link given on the command line.
/// Exits 1 if any link is unrecognized, 0 otherwise.
///
/// # Errors
///
/// Returns `Error::Json` if JSON output cannot be produced.
pub fn analyze(uris: &[String], json: bool) -> Result<ExitCode, error::Error> {
    let reports: Vec<AnalyzeReport<'_>> = uris
        .iter()
        .map(|uri| {
            let reference = analyzer::analyze(uri).ok();
            return AnalyzeReport {
                recognized: reference.is_some(),
                reference,
                uri,
            };
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            match &report.reference {
                Some(reference) => println!("OK            {}", describe(reference)),
                None => println!("UNRECOGNIZED  {}", report.uri),
            }
        }
    }

    let unrecognized = reports.iter().filter(|r| return !r.recognized).count();
    if unrecognized > 0 {
        if !json {
            print_protocols_hint();
        }
        return Ok(ExitCode::from(1));
    }
    return Ok(ExitCode::SUCCESS);
}

/// One-line text rendering of a parsed reference.
fn describe(reference: &ParsedReference) -> String {
    let book = reference.book.as_deref().unwrap_or("-");
    return format!("{}  book={book}  key={}", reference.doc_type, reference.key);
}

/// Point the user at the protocol list after an unrecognized link.
fn print_protocols_hint() {
    eprintln!();
    eprintln!("hint: run `swordlink protocols` to list recognized link protocols");
    return;
}

/// List the recognized protocol tokens and what they link to. Always exits 0.
pub fn protocols() -> ExitCode {
    for (token, doc_type) in PROTOCOLS {
        println!("{token:<10}  {doc_type}");
    }
    return ExitCode::SUCCESS;
}

/// Scan documents under `root` and report every link found.
/// Exits 1 if any link is unrecognized, 0 otherwise.
///
/// # Errors
///
/// Returns errors from config loading, scanning, or JSON output.
pub fn scan(root: &Path, json: bool) -> Result<ExitCode, error::Error> {
    let config = config::Config::load(root)?;
    let links = scanner::scan(root, &config)?;
    let unrecognized = links.iter().filter(|l| return !l.is_recognized()).count();
    tracing::info!(total = links.len(), unrecognized, "scan finished");

    if json {
        let report = ScanReport {
            links: &links,
            total: links.len(),
            unrecognized,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_scan_text(&links, unrecognized);
    }

    if unrecognized > 0 {
        return Ok(ExitCode::from(1));
    }
    return Ok(ExitCode::SUCCESS);
}

/// Print the text form of a scan report.
fn print_scan_text(links: &[ScannedLink], unrecognized: usize) {
    for link in links {
        let location = format!("{}:{}", link.source.display(), link.line);
        match &link.reference {
            Some(reference) => println!("OK            {location}  {}", describe(reference)),
            None => println!("UNRECOGNIZED  {location}  {}", link.uri),
        }
    }

    let total = links.len();
    if total > 0 {
        println!();
    }
    if unrecognized > 0 {
        println!("{unrecognized} of {total} links unrecognized");
        print_protocols_hint();
    } else {
        println!("All {total} links recognized");
    }
    return;
}
