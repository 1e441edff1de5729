//! Domain types for representing a slide deck before rendering.

use serde::{Deserialize, Serialize};

/// A complete presentation: an ordered sequence of slides.
///
/// Created empty, appended to in fixed order, and serialized exactly once
/// by the PPTX writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Human-readable deck name (used for document properties).
    pub name: String,

    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create a new, empty deck with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slides: Vec::new(),
        }
    }

    /// Append a slide to the deck.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Number of slides in the deck.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// Which placeholder arrangement a slide uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideLayout {
    /// Title slide: centered title plus subtitle placeholder.
    Title,
    /// Content slide: title plus body placeholder.
    Content,
}

/// A single slide. Immutable once constructed; never read back or
/// modified after being appended to a deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    /// Placeholder arrangement for this slide.
    pub layout: SlideLayout,

    /// Title placeholder text (single line).
    pub title: String,

    /// Body or subtitle placeholder text. May span multiple lines;
    /// blank lines produce empty paragraphs.
    pub body: String,

    /// Styling for the title's first paragraph.
    pub title_style: TextStyle,

    /// Styling for the body's first paragraph.
    pub body_style: TextStyle,
}

impl Slide {
    /// Create an unstyled slide.
    pub fn new(layout: SlideLayout, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            layout,
            title: title.into(),
            body: body.into(),
            title_style: TextStyle::NONE,
            body_style: TextStyle::NONE,
        }
    }

    /// Set the title style, builder-style.
    pub fn with_title_style(mut self, style: TextStyle) -> Self {
        self.title_style = style;
        self
    }

    /// Set the body style, builder-style.
    pub fn with_body_style(mut self, style: TextStyle) -> Self {
        self.body_style = style;
        self
    }
}

/// Run-level text styling applied to the first paragraph of a placeholder.
///
/// Fields left as `None` fall through to the layout defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in points.
    pub size_pt: Option<u32>,

    /// Solid font color.
    pub color: Option<Color>,
}

impl TextStyle {
    /// No explicit styling; layout defaults apply.
    pub const NONE: TextStyle = TextStyle {
        size_pt: None,
        color: None,
    };

    /// Style with a font size only.
    pub const fn sized(size_pt: u32) -> Self {
        TextStyle {
            size_pt: Some(size_pt),
            color: None,
        }
    }

    /// Style with a font size and solid color.
    pub const fn sized_colored(size_pt: u32, color: Color) -> Self {
        TextStyle {
            size_pt: Some(size_pt),
            color: Some(color),
        }
    }

    /// Whether any styling is set.
    pub fn is_none(&self) -> bool {
        self.size_pt.is_none() && self.color.is_none()
    }
}

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase six-digit hex form as used by `a:srgbClr` (e.g. `3B82F6`).
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_starts_empty() {
        let deck = Deck::new("Test");
        assert_eq!(deck.slide_count(), 0);
    }

    #[test]
    fn test_add_slide_preserves_order() {
        let mut deck = Deck::new("Test");
        deck.add_slide(Slide::new(SlideLayout::Title, "First", "a"));
        deck.add_slide(Slide::new(SlideLayout::Content, "Second", "b"));

        assert_eq!(deck.slide_count(), 2);
        assert_eq!(deck.slides[0].title, "First");
        assert_eq!(deck.slides[1].title, "Second");
    }

    #[test]
    fn test_slide_defaults_unstyled() {
        let slide = Slide::new(SlideLayout::Content, "Title", "Body");
        assert!(slide.title_style.is_none());
        assert!(slide.body_style.is_none());
    }

    #[test]
    fn test_color_to_hex() {
        assert_eq!(Color::new(59, 130, 246).to_hex(), "3B82F6");
        assert_eq!(Color::new(0, 0, 0).to_hex(), "000000");
        assert_eq!(Color::new(255, 255, 255).to_hex(), "FFFFFF");
    }

    #[test]
    fn test_text_style_constructors() {
        let style = TextStyle::sized_colored(44, Color::new(59, 130, 246));
        assert_eq!(style.size_pt, Some(44));
        assert!(style.color.is_some());
        assert!(!style.is_none());

        assert_eq!(TextStyle::sized(18).color, None);
        assert!(TextStyle::NONE.is_none());
    }
}
