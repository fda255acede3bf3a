use std::path::Path;

use regex::{Captures, Regex};
use walkdir::WalkDir;

use crate::analyzer;
use crate::config::Config;
use crate::error::Error;
use crate::types::ScannedLink;

/// Link targets in `href="..."`, `href='...'`, or markdown `[text](...)` form.
/// Markdown destinations may be wrapped in `<...>` and followed by a title.
const LINK_PATTERN: &str = r#"(?i:href)\s*=\s*(?:"([^"]*)"|'([^']*)')|\]\(\s*<?([^)\s>]*)>?(?:\s+(?:"[^"]*"|'[^']*'))?\s*\)"#;

/// Prefixes of links that leave the reader and are never analyzed.
const EXTERNAL_PREFIXES: &[&str] = &["ftp://", "http://", "https://", "mailto:"];

/// Scan all documents under `root` and analyze every link they contain.
/// Applies the config's extension and include/exclude filters.
/// Links are returned ordered by (source, line, uri).
///
/// # Errors
///
/// Returns `Error::RootNotFound` if `root` does not exist,
/// or `Error::Io` if any document cannot be read.
///
/// # Panics
///
/// Panics if the hardcoded link regex is invalid (compile-time invariant).
pub fn scan(root: &Path, config: &Config) -> Result<Vec<ScannedLink>, Error> {
    if !root.exists() {
        return Err(Error::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    #[allow(clippy::expect_used, reason = "pattern is a constant")]
    let pattern = Regex::new(LINK_PATTERN).expect("valid regex");
    let mut links = Vec::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_map(readable_entry)
        .filter(|e| return e.file_type().is_file() && config.scans_extension(e.path()))
    {
        let doc_path = entry.path();
        let relative_source = doc_path.strip_prefix(root).unwrap_or(doc_path);
        if !config.should_scan(&relative_source.to_string_lossy()) {
            tracing::trace!(path = %relative_source.display(), "excluded by config");
            continue;
        }

        let content = std::fs::read_to_string(doc_path)?;
        let before = links.len();
        extract_links_from_content(&content, relative_source, &pattern, &mut links);
        tracing::debug!(
            path = %relative_source.display(),
            links = links.len().saturating_sub(before),
            "scanned document"
        );
    }

    links.sort_by(|a, b| return (&a.source, a.line, &a.uri).cmp(&(&b.source, b.line, &b.uri)));
    return Ok(links);
}

/// Keep a walked entry, or warn about the unreadable path and skip it.
fn readable_entry(entry: Result<walkdir::DirEntry, walkdir::Error>) -> Option<walkdir::DirEntry> {
    return match entry {
        Ok(e) => Some(e),
        Err(err) => {
            let path = err.path().map_or_else(String::new, |p| return p.display().to_string());
            tracing::warn!(path, error = %err, "skipping unreadable path during scan");
            None
        },
    };
}

/// Extract and analyze every link in a document's text.
fn extract_links_from_content(
    content: &str,
    source: &Path,
    pattern: &Regex,
    links: &mut Vec<ScannedLink>,
) {
    for (index, line) in content.lines().enumerate() {
        let line_number = u32::try_from(index.saturating_add(1)).unwrap_or(u32::MAX);
        for cap in pattern.captures_iter(line) {
            let Some(uri) = link_target(&cap) else {
                continue;
            };
            links.push(ScannedLink {
                line: line_number,
                reference: analyzer::analyze(uri).ok(),
                source: source.to_path_buf(),
                uri: uri.to_string(),
            });
        }
    }
}

/// Pick the link target out of a capture. Returns `None` for external URLs,
/// in-page fragments, and empty targets.
fn link_target<'h>(cap: &Captures<'h>) -> Option<&'h str> {
    let raw = cap
        .get(1)
        .or_else(|| return cap.get(2))
        .or_else(|| return cap.get(3))?
        .as_str()
        .trim();

    let external = EXTERNAL_PREFIXES.iter().any(|prefix| {
        return raw
            .get(..prefix.len())
            .is_some_and(|head| return head.eq_ignore_ascii_case(prefix));
    });
    if raw.is_empty() || raw.starts_with('#') || external {
        return None;
    }
    return Some(raw);
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, reason = "test code")]
mod tests {
    use super::*;
    use crate::types::DocType;

    fn extract(line: &str) -> Vec<ScannedLink> {
        let pattern = Regex::new(LINK_PATTERN).unwrap();
        let mut links = Vec::new();
        extract_links_from_content(line, Path::new("doc.html"), &pattern, &mut links);
        links
    }

    #[test]
    fn extracts_href_links_in_both_quote_styles() {
        let links = extract(
            r#"<a href="sword://StrongsRealGreek/01909">G1909</a> <a HREF='gdef:01234'>x</a>"#,
        );
        let uris: Vec<&str> = links.iter().map(|l| l.uri.as_str()).collect();
        assert_eq!(uris, ["sword://StrongsRealGreek/01909", "gdef:01234"]);
        assert!(links.iter().all(ScannedLink::is_recognized));
        assert_eq!(
            links[0].reference.as_ref().unwrap().doc_type,
            DocType::SpecificDocument
        );
    }

    #[test]
    fn extracts_markdown_links() {
        let links = extract("See [the verse](Job.3.3) and [lexicon](hdef:07225).");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].reference.as_ref().unwrap().key, "Job.3.3");
        assert_eq!(
            links[1].reference.as_ref().unwrap().doc_type,
            DocType::HebrewDictionary
        );
    }

    #[test]
    fn extracts_markdown_links_with_titles() {
        let links = extract(r#"[v](Job.3.3 "Job") [bad](bogus:x 'x')"#);
        let uris: Vec<&str> = links.iter().map(|l| l.uri.as_str()).collect();
        assert_eq!(uris, ["Job.3.3", "bogus:x"]);
        assert!(links[0].is_recognized());
        assert!(!links[1].is_recognized());
    }

    #[test]
    fn strips_angle_brackets_from_markdown_destinations() {
        let links = extract("[a](<gdef:01234>)");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].uri, "gdef:01234");
        assert_eq!(
            links[0].reference.as_ref().unwrap().doc_type,
            DocType::GreekDictionary
        );
    }

    #[test]
    fn unreadable_walk_entries_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let kept: Vec<_> = WalkDir::new(&missing)
            .into_iter()
            .filter_map(readable_entry)
            .collect();
        assert!(kept.is_empty());
    }

    #[test]
    fn skips_external_and_fragment_links() {
        let links = extract(
            r##"<a href="https://crosswire.org">x</a><a href="#top">y</a><a href="">z</a> [m](MAILTO:a@b.c)"##,
        );
        assert!(links.is_empty(), "{links:?}");
    }

    #[test]
    fn keeps_unrecognized_links_with_line_numbers() {
        let pattern = Regex::new(LINK_PATTERN).unwrap();
        let mut links = Vec::new();
        let content = "<p>intro</p>\n<a href=\"bogus:xyz\">bad</a>\n";
        extract_links_from_content(content, Path::new("doc.html"), &pattern, &mut links);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].line, 2);
        assert!(!links[0].is_recognized());
    }

    #[test]
    fn scan_walks_filtered_documents() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("docs/drafts")).unwrap();
        std::fs::write(root.join("docs/b.html"), r#"<a href="gdef:01234">x</a>"#).unwrap();
        std::fs::write(root.join("docs/a.html"), r#"<a href="Gen.1.1">x</a>"#).unwrap();
        std::fs::write(root.join("docs/drafts/c.html"), r#"<a href="bogus:1">x</a>"#).unwrap();
        std::fs::write(root.join("docs/ignored.rs"), r#"// href="bogus:2""#).unwrap();
        std::fs::write(root.join(".swordlink.toml"), r#"exclude = ["docs/drafts"]"#).unwrap();

        let config = Config::load(root).unwrap();
        let links = scan(root, &config).unwrap();

        let found: Vec<(String, &str)> = links
            .iter()
            .map(|l| (l.source.to_string_lossy().replace('\\', "/"), l.uri.as_str()))
            .collect();
        assert_eq!(
            found,
            [
                ("docs/a.html".to_string(), "Gen.1.1"),
                ("docs/b.html".to_string(), "gdef:01234"),
            ]
        );
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = scan(&missing, &Config::parse("").unwrap()).unwrap_err();
        assert!(matches!(err, Error::RootNotFound { .. }));
    }
}
