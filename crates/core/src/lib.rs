//! Core domain types, the static slide-content table, and error types
//! for the Santaan AI EMR presentation generator.

pub mod content;
pub mod error;
pub mod types;

pub use content::{build_deck, DECK_NAME, OUTPUT_DIR, OUTPUT_FILENAME};
pub use error::{Error, Result};
pub use types::{Color, Deck, Slide, SlideLayout, TextStyle};
