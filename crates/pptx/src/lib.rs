//! PPTX (Office Open XML) writer backend for the deck generator.
//!
//! A .pptx file is a ZIP archive of XML parts. This crate assembles the
//! full package: fixed parts (content types, relationships, slide master,
//! slide layouts, theme, document properties) plus per-slide XML generated
//! from deck content.

pub mod package;
pub mod parts;
pub mod slide_xml;

pub use package::PptxWriter;
