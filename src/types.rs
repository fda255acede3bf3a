//! Core domain types for analyzed links.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::protocol;

/// What kind of document a link points into. Decided by the link's protocol
/// token, except that a `Bible` module segment always means the Bible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocType {
    /// Every occurrence of a Greek Strong's number.
    AllGreekOccurrences,
    /// Every occurrence of a Hebrew Strong's number.
    AllHebrewOccurrences,
    /// The current Bible text.
    Bible,
    /// The default Greek Strong's dictionary.
    GreekDictionary,
    /// The default Hebrew Strong's dictionary.
    HebrewDictionary,
    /// Robinson's Greek morphology codes.
    RobinsonMorphology,
    /// A document named explicitly in the link.
    SpecificDocument,
}

impl DocType {
    /// Upper-case label used in text reports, matching the JSON form.
    pub const fn label(self) -> &'static str {
        return match self {
            Self::AllGreekOccurrences => "ALL_GREEK_OCCURRENCES",
            Self::AllHebrewOccurrences => "ALL_HEBREW_OCCURRENCES",
            Self::Bible => "BIBLE",
            Self::GreekDictionary => "GREEK_DICTIONARY",
            Self::HebrewDictionary => "HEBREW_DICTIONARY",
            Self::RobinsonMorphology => "ROBINSON_MORPHOLOGY",
            Self::SpecificDocument => "SPECIFIC_DOCUMENT",
        };
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.label());
    }
}

/// Output of a successful link analysis. Owned and never mutated after
/// construction; callers hand it straight to navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedReference {
    /// Module or document identifier, present only when the link carried a
    /// `/`-separated segment before the key.
    pub book: Option<String>,
    /// Kind of document the key is looked up in.
    pub doc_type: DocType,
    /// Verse reference or lexicon entry, e.g. `John.17.11` or `01909`.
    pub key: String,
}

impl fmt::Display for ParsedReference {
    /// Render a canonical link that analyzes back to an equal value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = protocol::token_for(self.doc_type);
        return match &self.book {
            Some(book) => write!(f, "{token}://{book}/{}", self.key),
            None => write!(f, "{token}:{}", self.key),
        };
    }
}

/// A link found inside a scanned document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannedLink {
    /// One-based line number of the link in the source file.
    pub line: u32,
    /// Analysis result, `None` when the link was not recognized.
    pub reference: Option<ParsedReference>,
    /// Document containing the link, relative to the scan root.
    pub source: PathBuf,
    /// Link target exactly as written in the document.
    pub uri: String,
}

impl ScannedLink {
    /// Whether the link analyzed successfully.
    pub const fn is_recognized(&self) -> bool {
        return self.reference.is_some();
    }
}
