//! Content renamer - names office documents after the title found in their text.
//!
//! # Pipeline
//! - Read a document into ordered text blocks (font size, alignment)
//! - Score every block on keywords, capitals, largest font and centring
//! - Build `primary [year] - second - third ★` from the three best blocks
//! - Pick a target name that collides with nothing on disk or earlier in the run

pub mod batch;
pub mod block;
pub mod cli;
pub mod config;
pub mod error;
pub mod keywords;
pub mod oplog;
pub mod reader;
pub mod title;
pub mod unique;

pub use block::TextBlock;
pub use error::{Error, Result};
pub use keywords::KeywordSet;
pub use title::{MARKER, TitleCandidate, synthesize, synthesize_filename};
pub use unique::{UniqueNames, resolve_unique_path};
