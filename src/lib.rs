//! Analyze Bible-reader cross-reference links such as
//! `sword://StrongsRealGreek/01909`, `gdef:01234`, or a bare `Job.3.3`.

pub mod analyzer;
pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod protocol;
pub mod scanner;
pub mod types;

pub use analyzer::analyze;
pub use error::Error;
pub use types::{DocType, ParsedReference};
