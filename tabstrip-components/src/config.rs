//! Tab bar configuration and its defaults.
use std::time::Duration;

use derive_setters::Setters;
use tabstrip_ui::{Dp, Px};

use crate::error::TabBarError;

/// Defaults for [`TabBarConfig`].
pub struct TabBarDefaults;

impl TabBarDefaults {
    /// Leading and trailing padding of the tab strip.
    pub const TAB_BAR_INSET: Dp = Dp(8.0);
    /// Gap between adjacent tabs.
    pub const TAB_SPACING: Dp = Dp(1.0);
    /// Horizontal padding inside each tab, on both sides of the label.
    pub const TAB_INSET: Dp = Dp(12.0);
    /// Top and bottom margin of the focus indicator.
    pub const FOCUS_VERTICAL_MARGIN: Dp = Dp(4.0);
    /// Duration of an animated selection commit.
    pub const SELECTION_ANIMATION: Duration = Duration::from_millis(300);
    /// Duration of the cross-fade played when tabs are reloaded.
    pub const RELOAD_TRANSITION: Duration = Duration::from_millis(330);
}

/// Configuration of a scrolling tab bar.
///
/// # Examples
///
/// ```
/// use tabstrip_components::config::TabBarConfig;
/// use tabstrip_ui::Px;
///
/// let config = TabBarConfig::default()
///     .tab_spacing(Px(10.0))
///     .page_width(Px(375.0))
///     .fixed_tab_width(Px(88.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TabBarConfig {
    /// Leading and trailing padding of the strip.
    pub tab_bar_inset: Px,
    /// Gap between adjacent tabs.
    pub tab_spacing: Px,
    /// Horizontal padding added on both sides of each measured label.
    pub tab_inset: Px,
    /// Width of one page of the paired content view.
    ///
    /// Scroll offsets are converted to tab geometry in units of this width;
    /// while it is zero or negative, scroll updates are ignored.
    pub page_width: Px,
    /// Top and bottom margin of the focus indicator.
    pub focus_vertical_margin: Px,
    /// When set, every tab has this width instead of its measured width.
    #[setters(strip_option)]
    pub fixed_tab_width: Option<Px>,
    /// Center the tabs when their total width is below the viewport width.
    pub centering: bool,
    /// With a fixed tab width, anchor the trailing tabs with a right-to-left
    /// pass so both ends of the strip settle exactly.
    pub mirror_fixed_width_intervals: bool,
}

impl Default for TabBarConfig {
    fn default() -> Self {
        Self {
            tab_bar_inset: TabBarDefaults::TAB_BAR_INSET.into(),
            tab_spacing: TabBarDefaults::TAB_SPACING.into(),
            tab_inset: TabBarDefaults::TAB_INSET.into(),
            page_width: Px::ZERO,
            focus_vertical_margin: TabBarDefaults::FOCUS_VERTICAL_MARGIN.into(),
            fixed_tab_width: None,
            centering: true,
            mirror_fixed_width_intervals: true,
        }
    }
}

impl TabBarConfig {
    /// Checks that every length is usable for layout.
    pub fn validate(&self) -> Result<(), TabBarError> {
        let non_negative = [
            ("tab_bar_inset", self.tab_bar_inset),
            ("tab_spacing", self.tab_spacing),
            ("tab_inset", self.tab_inset),
            ("focus_vertical_margin", self.focus_vertical_margin),
        ];
        for (field, value) in non_negative {
            finite(field, value)?;
            if value < Px::ZERO {
                return Err(TabBarError::Negative {
                    field,
                    value: value.0,
                });
            }
        }

        finite("page_width", self.page_width)?;

        if let Some(width) = self.fixed_tab_width {
            finite("fixed_tab_width", width)?;
            if width < Px::ONE {
                return Err(TabBarError::FixedWidthTooSmall { width });
            }
        }
        Ok(())
    }

    pub(crate) fn has_pages(&self) -> bool {
        self.page_width > Px::ZERO
    }
}

fn finite(field: &'static str, value: Px) -> Result<(), TabBarError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TabBarError::NonFinite {
            field,
            value: value.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = TabBarConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.has_pages());
        assert!(config.centering);
    }

    #[test]
    fn negative_spacing_is_rejected() {
        let err = TabBarConfig::default()
            .tab_spacing(Px(-1.0))
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            TabBarError::Negative {
                field: "tab_spacing",
                value: -1.0
            }
        );
    }

    #[test]
    fn non_finite_lengths_are_rejected() {
        let err = TabBarConfig::default()
            .page_width(Px(f32::INFINITY))
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            TabBarError::NonFinite {
                field: "page_width",
                ..
            }
        ));

        let err = TabBarConfig::default()
            .tab_bar_inset(Px(f32::NAN))
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            TabBarError::NonFinite {
                field: "tab_bar_inset",
                ..
            }
        ));
    }

    #[test]
    fn negative_page_width_is_allowed() {
        assert!(TabBarConfig::default()
            .page_width(Px(-320.0))
            .validate()
            .is_ok());
    }

    #[test]
    fn fixed_width_must_cover_a_pixel() {
        let err = TabBarConfig::default()
            .fixed_tab_width(Px(0.5))
            .validate()
            .unwrap_err();
        assert_eq!(err, TabBarError::FixedWidthTooSmall { width: Px(0.5) });
        assert_eq!(
            err.to_string(),
            "fixed tab width must be at least 1px, got 0.5"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_round_trips_through_json() {
        let config = TabBarConfig::default()
            .page_width(Px(375.0))
            .fixed_tab_width(Px(88.0))
            .centering(false);
        let json = serde_json::to_string(&config).unwrap();
        let decoded: TabBarConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_config_fields_fall_back_to_defaults() {
        let config: TabBarConfig =
            serde_json::from_str(r#"{ "tab_spacing": 4.0, "page_width": 320.0 }"#).unwrap();
        assert_eq!(
            config,
            TabBarConfig::default()
                .tab_spacing(Px(4.0))
                .page_width(Px(320.0))
        );
        assert!(config.validate().is_ok());
    }
}
