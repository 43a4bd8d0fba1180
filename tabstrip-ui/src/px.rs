//! Physical pixel geometry for tabstrip components.
//!
//! This module provides the scalar and compound types used by tab layout:
//! widths, offsets and the frame of the focus indicator. Values are stored as
//! `f32` because tab geometry is fractional (half widths, interpolated
//! offsets) and is only rounded by the render surface that draws it.
//!
//! # Key Types
//!
//! - [`Px`] - A single physical pixel length or coordinate, negative values
//!   allowed for overscroll
//! - [`PxSize`] - A 2D size (width, height)
//! - [`PxRect`] - An axis-aligned frame (origin plus size)
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner of the scrollable content
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! # Conversion
//!
//! Physical pixels can be converted to and from density-independent pixels
//! ([`Dp`]):
//! - Use [`Px::from_dp`] to convert from Dp to Px
//! - Use [`Px::to_dp`] to convert from Px to Dp
//!
//! # Example
//!
//! ```
//! use tabstrip_ui::dp::Dp;
//! use tabstrip_ui::px::{Px, PxRect, PxSize};
//!
//! let width = Px::new(40.0) + Px::new(60.0);
//! assert_eq!(width / 2.0, Px::new(50.0));
//!
//! let size = PxSize::new(Px::new(320.0), Px::new(44.0));
//! let frame = PxRect::new(Px::new(8.0), Px::new(4.0), size.width, Px::new(36.0));
//! assert_eq!(frame.max_x(), Px::new(328.0));
//!
//! let px_value = Px::from_dp(Dp(16.0));
//! ```

use std::{
    iter::Sum,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

use crate::dp::{Dp, scale_factor};

/// A physical pixel length or coordinate.
///
/// Unlike density-independent pixels ([`Dp`]), physical pixels are not scaled
/// based on screen density.
///
/// # Examples
///
/// ```
/// use tabstrip_ui::px::Px;
///
/// let a = Px::new(10.0);
/// let b = Px::new(-2.5);
///
/// assert_eq!(a + b, Px::new(7.5));
/// assert_eq!(a * 2.0, Px::new(20.0));
/// assert_eq!(b.clamp(Px::ZERO, a), Px::ZERO);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Px(pub f32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0.0);

    /// One physical pixel, the smallest width a tab may have.
    pub const ONE: Self = Self(1.0);

    /// Creates a new `Px` from an f32 value.
    pub const fn new(value: f32) -> Self {
        Px(value)
    }

    /// Converts from density-independent pixels ([`Dp`]) to physical pixels.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabstrip_ui::dp::Dp;
    /// use tabstrip_ui::px::Px;
    ///
    /// let px_value = Px::from_dp(Dp(16.0));
    /// ```
    pub fn from_dp(dp: Dp) -> Self {
        Px(dp.to_pixels_f32())
    }

    /// Converts from physical pixels to density-independent pixels ([`Dp`]).
    pub fn to_dp(self) -> Dp {
        Dp((self.0 as f64) / scale_factor())
    }

    /// Returns `true` when the value is neither infinite nor NaN.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Returns the larger of two values.
    pub fn max(self, other: Self) -> Self {
        Px(self.0.max(other.0))
    }

    /// Returns the smaller of two values.
    pub fn min(self, other: Self) -> Self {
        Px(self.0.min(other.0))
    }

    /// Restricts the value to `[min, max]`.
    ///
    /// Unlike [`f32::clamp`] this never panics: when `max < min` the range
    /// collapses onto `min`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabstrip_ui::px::Px;
    ///
    /// assert_eq!(Px::new(12.0).clamp(Px::ZERO, Px::new(10.0)), Px::new(10.0));
    /// // Inverted range collapses to the lower bound
    /// assert_eq!(Px::new(12.0).clamp(Px::new(5.0), Px::new(1.0)), Px::new(5.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.min(max.max(min)).max(min)
    }

    /// Rounds up to the next whole pixel.
    pub fn ceil(self) -> Self {
        Px(self.0.ceil())
    }
}

impl From<Dp> for Px {
    fn from(dp: Dp) -> Self {
        Px::from_dp(dp)
    }
}

impl From<f32> for Px {
    fn from(value: f32) -> Self {
        Px(value)
    }
}

impl Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl Neg for Px {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Px(-self.0)
    }
}

impl Mul<f32> for Px {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl Div<f32> for Px {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Px {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Px::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Px> for Px {
    fn sum<I: Iterator<Item = &'a Px>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// A 2D size in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxSize {
    /// The width in physical pixels
    pub width: Px,
    /// The height in physical pixels
    pub height: Px,
}

impl PxSize {
    /// A constant representing zero size.
    pub const ZERO: Self = Self {
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in physical pixel space.
///
/// Used for the focus indicator frame, whose `x` is expressed in the
/// coordinate space of the scrollable tab content.
///
/// # Examples
///
/// ```
/// use tabstrip_ui::px::{Px, PxRect};
///
/// let frame = PxRect::new(Px::new(10.0), Px::new(4.0), Px::new(60.0), Px::new(36.0));
/// assert_eq!(frame.max_x(), Px::new(70.0));
/// assert_eq!(frame.mid_x(), Px::new(40.0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxRect {
    /// Left edge
    pub x: Px,
    /// Top edge
    pub y: Px,
    /// Horizontal extent
    pub width: Px,
    /// Vertical extent
    pub height: Px,
}

impl PxRect {
    /// A zero-sized rectangle at the origin.
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new rectangle.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn max_x(&self) -> Px {
        self.x + self.width
    }

    /// Horizontal center.
    pub fn mid_x(&self) -> Px {
        self.x + self.width / 2.0
    }

    /// Returns the size of the rectangle.
    pub fn size(&self) -> PxSize {
        PxSize::new(self.width, self.height)
    }
}
