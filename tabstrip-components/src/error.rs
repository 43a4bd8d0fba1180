//! Errors reported by the tab bar.
use tabstrip_ui::Px;
use thiserror::Error;

/// Rejected tab bar configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TabBarError {
    /// A length was NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NonFinite {
        /// Name of the offending configuration field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// A length that must not be negative was negative.
    #[error("`{field}` must not be negative, got {value}")]
    Negative {
        /// Name of the offending configuration field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// A fixed tab width narrower than one pixel.
    #[error("fixed tab width must be at least 1px, got {}", .width.0)]
    FixedWidthTooSmall {
        /// The rejected width.
        width: Px,
    },
}
