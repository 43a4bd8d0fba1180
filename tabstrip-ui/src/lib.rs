//! Foundation primitives for tabstrip components.
//!
//! This crate holds the pieces a tab bar needs from a UI toolkit without
//! pulling in a renderer: physical and density-independent pixel units,
//! colors, and the boundary to the host's text measurement.
//!
//! # Units
//!
//! ```
//! use tabstrip_ui::{Dp, Px};
//!
//! let inset: Px = Dp(8.0).into();
//! assert_eq!(inset + Px(2.0), Px(10.0));
//! ```
//!
//! # Text measurement
//!
//! ```
//! use tabstrip_ui::{GraphemeAdvanceMeasurer, Px, StyledText, TextMeasurer};
//!
//! let measurer = GraphemeAdvanceMeasurer::default();
//! let width = measurer.measure(&StyledText::new("Omotesando"));
//! assert!(width > Px::ZERO);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod dp;
pub mod px;
pub mod text;

pub use crate::{
    color::Color,
    dp::Dp,
    px::{Px, PxRect, PxSize},
    text::{FontWeight, GraphemeAdvanceMeasurer, StyledText, TextAlign, TextMeasurer, TextStyle},
};
