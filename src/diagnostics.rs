use std::fmt::Write as _;

use crate::config::CONFIG_FILE;
use crate::error::Error;
use crate::protocol::PROTOCOLS;

/// ANSI bold, used for markdown headings on a terminal.
const BOLD: &str = "\x1b[1m";
/// ANSI attribute reset.
const RESET: &str = "\x1b[0m";

/// Render an error as valid markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic.
///
/// Each variant produces a block with what happened and, where there is
/// one, how to fix it.
pub fn render_error(e: &Error) -> String {
    return match e {
        Error::Io(err) => format!(
            "\
# Error: I/O

{err}
"
        ),
        Error::Json(err) => format!(
            "\
# Error: JSON Output

{err}
"
        ),
        Error::RootNotFound { path } => format!(
            "\
# Error: Scan Root Not Found

`{}` does not exist.

## Fix

Pass an existing directory:

    swordlink scan path/to/documents
",
            path.display()
        ),
        Error::TomlDe(err) => format!(
            "\
# Error: Invalid Config

`{CONFIG_FILE}` could not be read:

{err}

## Fix

Only `include`, `exclude`, and `extensions` are allowed, each a list of strings.
"
        ),
        Error::UnrecognizedReference { uri } => render_unrecognized_reference(uri),
    };
}

/// Explain why a link was rejected and list the protocols that are accepted.
fn render_unrecognized_reference(uri: &str) -> String {
    let mut md = format!(
        "\
# Error: Unrecognized Reference

`{uri}` is not a link this reader can follow. Either its protocol is not
recognized (protocols are case-sensitive) or nothing follows the protocol.

## Recognized Protocols

"
    );
    for (token, doc_type) in PROTOCOLS {
        let _ = writeln!(md, "- `{token}:` -> {doc_type}");
    }
    md.push_str("\nA link without a colon is read as a Bible key, e.g. `Job.3.3`.\n");
    return md;
}
