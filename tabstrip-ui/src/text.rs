//! Styled text and the text measurement boundary.
//!
//! ## Usage
//!
//! Tab components never shape glyphs themselves. They hand a [`StyledText`]
//! to a [`TextMeasurer`] and get back the rendered width. Platform hosts
//! implement the trait on top of their text stack; [`GraphemeAdvanceMeasurer`]
//! is a deterministic stand-in for headless layout and tests.
use derive_setters::Setters;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::{Color, Dp, Px};

/// Horizontal alignment of a label inside its cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlign {
    /// Align to the leading edge.
    Start,
    /// Center within the cell.
    #[default]
    Center,
    /// Align to the trailing edge.
    End,
}

/// Stroke weight of a font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Regular,
    /// Medium weight.
    Medium,
    /// Bold weight.
    Bold,
}

/// Font, color and paragraph attributes applied to a whole string.
#[derive(Clone, Debug, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    /// Font size.
    pub font_size: Dp,
    /// Optional line height; the host's font metrics apply when absent.
    #[setters(strip_option)]
    pub line_height: Option<Dp>,
    /// Extra space inserted between adjacent grapheme clusters.
    pub letter_spacing: Dp,
    /// Stroke weight.
    pub weight: FontWeight,
    /// Foreground color.
    pub color: Color,
    /// Paragraph alignment.
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: Dp(14.0),
            line_height: None,
            letter_spacing: Dp(0.0),
            weight: FontWeight::Regular,
            color: Color::BLACK,
            align: TextAlign::Center,
        }
    }
}

/// A string together with the attributes it is rendered with.
///
/// # Examples
///
/// ```
/// use tabstrip_ui::{Color, FontWeight, StyledText};
///
/// let normal = StyledText::new("Shibuya").color(Color::GRAY);
/// let selected = normal.clone().weight(FontWeight::Bold).color(Color::BLACK);
/// assert_eq!(normal.text, selected.text);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyledText {
    /// The text content.
    pub text: String,
    /// The attributes applied to the whole text.
    pub style: TextStyle,
}

impl StyledText {
    /// Creates styled text with the default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Replaces the foreground color.
    pub fn color(mut self, color: Color) -> Self {
        self.style.color = color;
        self
    }

    /// Replaces the font weight.
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.style.weight = weight;
        self
    }

    /// Replaces the font size.
    pub fn font_size(mut self, font_size: Dp) -> Self {
        self.style.font_size = font_size;
        self
    }

    /// Returns `true` if there is no text to draw.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        StyledText::new(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        StyledText::new(text)
    }
}

/// Measures the rendered width of styled text.
///
/// Implementations must be pure: the same text and attributes always yield
/// the same width. Any `Fn(&StyledText) -> Px` closure is a measurer.
pub trait TextMeasurer {
    /// Returns the unconstrained single-line width of `text`.
    fn measure(&self, text: &StyledText) -> Px;
}

impl<F> TextMeasurer for F
where
    F: Fn(&StyledText) -> Px,
{
    fn measure(&self, text: &StyledText) -> Px {
        self(text)
    }
}

/// A font-free measurer that assigns every grapheme cluster a fixed advance.
///
/// Each cluster advances by `font_size * advance_ratio` per terminal column,
/// so wide (CJK) clusters count twice. Heavier weights widen the advance.
#[derive(Clone, Copy, Debug, PartialEq, Setters)]
pub struct GraphemeAdvanceMeasurer {
    /// Advance of a single-column cluster relative to the font size.
    pub advance_ratio: f32,
    /// Advance multiplier for [`FontWeight::Medium`].
    pub medium_factor: f32,
    /// Advance multiplier for [`FontWeight::Bold`].
    pub bold_factor: f32,
}

impl Default for GraphemeAdvanceMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.5,
            medium_factor: 1.04,
            bold_factor: 1.1,
        }
    }
}

impl GraphemeAdvanceMeasurer {
    fn weight_factor(&self, weight: FontWeight) -> f32 {
        match weight {
            FontWeight::Regular => 1.0,
            FontWeight::Medium => self.medium_factor,
            FontWeight::Bold => self.bold_factor,
        }
    }
}

impl TextMeasurer for GraphemeAdvanceMeasurer {
    fn measure(&self, text: &StyledText) -> Px {
        if text.is_empty() {
            return Px::ZERO;
        }
        let style = &text.style;
        let mut clusters = 0usize;
        let mut columns = 0usize;
        for grapheme in text.text.graphemes(true) {
            clusters += 1;
            columns += grapheme.width();
        }

        let advance = style.font_size.to_pixels_f32()
            * self.advance_ratio
            * self.weight_factor(style.weight);
        let spacing = style.letter_spacing.to_pixels_f32() * (clusters - 1) as f32;
        Px(columns as f32 * advance + spacing)
    }
}
