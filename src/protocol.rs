//! Protocol tokens recognized at the front of a link.

use crate::types::DocType;

/// Default protocol for links without a colon, and the module name that
/// forces a link back to the Bible text.
pub const BIBLE_PROTOCOL: &str = "bible";

/// Every recognized protocol token and the document type it selects.
/// Matching is exact and case-sensitive.
pub const PROTOCOLS: &[(&str, DocType)] = &[
    (BIBLE_PROTOCOL, DocType::Bible),
    ("sword", DocType::SpecificDocument),
    ("gdef", DocType::GreekDictionary),
    ("hdef", DocType::HebrewDictionary),
    ("robinson", DocType::RobinsonMorphology),
    ("allgoccur", DocType::AllGreekOccurrences),
    ("allhoccur", DocType::AllHebrewOccurrences),
];

/// Look up the document type for a protocol token.
pub fn doc_type_for(token: &str) -> Option<DocType> {
    return PROTOCOLS
        .iter()
        .find(|(candidate, _)| return *candidate == token)
        .map(|&(_, doc_type)| return doc_type);
}

/// The protocol token that selects `doc_type`.
pub fn token_for(doc_type: DocType) -> &'static str {
    return PROTOCOLS
        .iter()
        .find(|&&(_, candidate)| return candidate == doc_type)
        .map_or(BIBLE_PROTOCOL, |&(token, _)| return token);
}
