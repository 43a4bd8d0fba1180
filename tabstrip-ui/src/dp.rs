//! # Density-Independent Pixels (Dp)
//!
//! This module provides the [`Dp`] type for representing density-independent
//! pixels. Tab bar defaults are declared in dp so that a tab strip looks the
//! same physical size on a low-density tablet and a high-density phone.
//!
//! ## Scale Factor
//!
//! The conversion between dp and physical pixels is controlled by a global
//! scale factor stored in [`SCALE_FACTOR`]. Hosts set it once from the
//! device's display density with [`set_scale_factor`]; until then every
//! conversion uses `1.0`.
//!
//! ## Usage
//!
//! ```
//! use tabstrip_ui::Dp;
//!
//! let inset = Dp(8.0);
//! let pixels = inset.to_pixels_f32();
//! let back = Dp::from_pixels_f32(pixels);
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;
use tracing::debug;

use crate::Px;

/// Global scale factor for converting between density-independent pixels and
/// physical pixels.
///
/// The scale factor represents how many physical pixels correspond to one dp
/// unit:
/// - Scale factor of 1.0: 1 dp = 1 pixel
/// - Scale factor of 2.0: 1 dp = 2 pixels
/// - Scale factor of 3.0: 1 dp = 3 pixels
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Sets the global scale factor used by every [`Dp`] conversion.
///
/// Non-finite or non-positive factors are ignored.
pub fn set_scale_factor(scale_factor: f64) {
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        debug!("Ignoring invalid scale factor {scale_factor}");
        return;
    }
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = scale_factor;
    debug!("Scale factor set to {scale_factor}");
}

pub(crate) fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Density-independent pixels (dp) for UI scaling.
///
/// When you specify a tab inset of `Dp(12.0)`, it appears roughly the same
/// physical size regardless of the display's pixel density.
///
/// ## Examples
///
/// ```
/// use tabstrip_ui::Dp;
///
/// const TAB_INSET: Dp = Dp::new(12.0);
/// let double_inset = Dp(TAB_INSET.0 * 2.0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Dp(pub f64);

impl Dp {
    /// Creates a new `Dp` instance with the specified value.
    ///
    /// This is a const function, allowing `Dp` values to be created at compile
    /// time.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts this dp value to physical pixels as an `f64`.
    pub fn to_pixels_f64(&self) -> f64 {
        self.0 * scale_factor()
    }

    /// Creates a `Dp` value from physical pixels specified as an `f64`.
    pub fn from_pixels_f64(value: f64) -> Self {
        Dp(value / scale_factor())
    }

    /// Converts this dp value to physical pixels as an `f32`.
    ///
    /// # Precision Note
    ///
    /// Converting from `f64` to `f32` may result in precision loss for very
    /// large or very precise values.
    pub fn to_pixels_f32(&self) -> f32 {
        (self.0 * scale_factor()) as f32
    }

    /// Creates a `Dp` value from physical pixels specified as an `f32`.
    pub fn from_pixels_f32(value: f32) -> Self {
        Dp((value as f64) / scale_factor())
    }

    /// Converts this `Dp` value to a [`Px`] value.
    pub fn to_px(&self) -> Px {
        Px::from_dp(*self)
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp::new(value)
    }
}

impl From<Px> for Dp {
    fn from(px: Px) -> Self {
        px.to_dp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_round_trips_through_px_without_scale() {
        // The scale factor is never set in this test binary.
        let dp = Dp(24.0);
        assert_eq!(dp.to_px(), Px(24.0));
        assert_eq!(Dp::from(Px(24.0)), dp);
    }

    #[test]
    fn test_invalid_scale_factor_is_ignored() {
        set_scale_factor(f64::NAN);
        set_scale_factor(0.0);
        set_scale_factor(-2.0);
        assert_eq!(SCALE_FACTOR.get().map(|lock| *lock.read()), None);
    }
}
