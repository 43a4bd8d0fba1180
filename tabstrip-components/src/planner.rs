//! Tab widths and centering intervals.
//!
//! ## Usage
//!
//! [`TabWidthPlanner`] turns a list of [`TabItem`]s into a [`LayoutPlan`]:
//! one width per tab and one *interval* per tab. The interval of tab `i` is
//! how far the strip scrolls while the paired content view moves from page
//! `i` to page `i + 1`.
//!
//! Intervals stay zero until the running width of the strip reaches half of
//! the viewport. At that *adjustment point* the interval is shortened so the
//! next tab lands exactly on the viewport center, and every later interval
//! is the center-to-center distance of its two tabs. Summing intervals up to
//! a page index is therefore enough to keep the selected tab centered, with
//! no per-index recentering at scroll time.
use tabstrip_ui::{Px, TextMeasurer};
use tracing::debug;

use crate::{
    config::TabBarConfig,
    tab_item::{TabItem, TabState},
};

/// Cached geometry of one tab collection laid out in one viewport.
///
/// `tab_intervals` always has the same length as `tab_widths`; only the
/// first `count - 1` intervals carry meaning and the last one repeats the
/// one before it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutPlan {
    tab_widths: Vec<Px>,
    tab_intervals: Vec<Px>,
    // Prefix sums: sum of `width + spacing` and of intervals before index i.
    width_offsets: Vec<Px>,
    interval_offsets: Vec<Px>,
    adjustment_index: Option<usize>,
    content_length: Px,
    content_margin: Px,
    tab_spacing: Px,
    tab_bar_inset: Px,
    viewport_width: Px,
}

impl LayoutPlan {
    fn new(
        tab_widths: Vec<Px>,
        tab_intervals: Vec<Px>,
        adjustment_index: Option<usize>,
        config: &TabBarConfig,
        viewport_width: Px,
    ) -> Self {
        let spacing = config.tab_spacing;
        let count = tab_widths.len();

        let content_length = tab_widths.iter().sum::<Px>()
            + (spacing * count as f32 - spacing).max(Px::ZERO);
        let content_margin = if config.centering {
            ((viewport_width - content_length) / 2.0).max(config.tab_bar_inset)
        } else {
            config.tab_bar_inset
        };

        let width_offsets = prefix_sums(tab_widths.iter().map(|&w| w + spacing));
        let interval_offsets = prefix_sums(tab_intervals.iter().copied());

        Self {
            tab_widths,
            tab_intervals,
            width_offsets,
            interval_offsets,
            adjustment_index,
            content_length,
            content_margin,
            tab_spacing: spacing,
            tab_bar_inset: config.tab_bar_inset,
            viewport_width,
        }
    }

    /// Number of planned tabs.
    pub fn tab_count(&self) -> usize {
        self.tab_widths.len()
    }

    /// Returns `true` when no tabs were planned.
    pub fn is_empty(&self) -> bool {
        self.tab_widths.is_empty()
    }

    /// Width of every tab, in order.
    pub fn tab_widths(&self) -> &[Px] {
        &self.tab_widths
    }

    /// Strip scroll distance per page, in order.
    pub fn tab_intervals(&self) -> &[Px] {
        &self.tab_intervals
    }

    /// Index `i` of the pair `(i, i + 1)` whose interval was shortened to
    /// center tab `i + 1`, if the tabs ever reach half the viewport.
    pub fn adjustment_index(&self) -> Option<usize> {
        self.adjustment_index
    }

    /// Total width of the tabs and the gaps between them.
    pub fn content_length(&self) -> Px {
        self.content_length
    }

    /// Leading and trailing margin around the tabs.
    pub fn content_margin(&self) -> Px {
        self.content_margin
    }

    /// Scrollable width of the strip, margins included.
    pub fn content_extent(&self) -> Px {
        self.content_length + self.content_margin * 2.0
    }

    /// Gap between adjacent tabs.
    pub fn tab_spacing(&self) -> Px {
        self.tab_spacing
    }

    /// Padding the focus indicator keeps from the strip edges.
    pub fn tab_bar_inset(&self) -> Px {
        self.tab_bar_inset
    }

    /// Viewport width the plan was computed for.
    pub fn viewport_width(&self) -> Px {
        self.viewport_width
    }

    /// Largest valid strip offset.
    pub fn max_strip_offset(&self) -> Px {
        (self.content_extent() - self.viewport_width).max(Px::ZERO)
    }

    /// Sum of `width + spacing` over the tabs before `index`.
    pub fn width_offset_before(&self, index: usize) -> Px {
        self.width_offsets.get(index).copied().unwrap_or_default()
    }

    /// Sum of the intervals before `index`.
    pub fn interval_offset_before(&self, index: usize) -> Px {
        self.interval_offsets.get(index).copied().unwrap_or_default()
    }

    /// Left edge of tab `index` in strip content coordinates.
    pub fn tab_x(&self, index: usize) -> Px {
        self.content_margin + self.width_offset_before(index)
    }

    /// Strip offset that puts the center of tab `index` on the viewport
    /// center, clamped to the scrollable range.
    pub fn centered_strip_offset(&self, index: usize) -> Px {
        let width = self.tab_widths.get(index).copied().unwrap_or_default();
        let offset = self.tab_x(index) + width / 2.0 - self.viewport_width / 2.0;
        offset.clamp(Px::ZERO, self.max_strip_offset())
    }
}

fn prefix_sums(values: impl Iterator<Item = Px>) -> Vec<Px> {
    let mut running = Px::ZERO;
    let mut sums = Vec::new();
    for value in values {
        sums.push(running);
        running += value;
    }
    sums
}

/// Result of one directional scan over adjacent tab pairs.
#[derive(Debug, PartialEq)]
struct IntervalScan {
    // One entry per adjacent pair.
    intervals: Vec<Px>,
    adjustment_index: Option<usize>,
}

/// Scans the pairs `(i, i + 1)` left to right.
fn scan_intervals(widths: &[Px], viewport_width: Px, inset: Px, spacing: Px) -> IntervalScan {
    let half_viewport = viewport_width / 2.0;
    let mut total = inset;
    let mut adjustment_index = None;
    let mut intervals = Vec::with_capacity(widths.len().saturating_sub(1));

    for (index, pair) in widths.windows(2).enumerate() {
        let (width, next_width) = (pair[0], pair[1]);
        total += width + spacing;

        let interval = if total + next_width < half_viewport {
            Px::ZERO
        } else if adjustment_index.is_none() {
            adjustment_index = Some(index);
            total - half_viewport + next_width / 2.0
        } else {
            (width + next_width) / 2.0 + spacing
        };
        intervals.push(interval);
    }

    IntervalScan {
        intervals,
        adjustment_index,
    }
}

/// Runs the scan from both ends and joins the results at the left-to-right
/// adjustment point.
fn spliced_intervals(widths: &[Px], viewport_width: Px, inset: Px, spacing: Px) -> IntervalScan {
    let forward = scan_intervals(widths, viewport_width, inset, spacing);
    let Some(split) = forward.adjustment_index else {
        return forward;
    };

    let reversed: Vec<Px> = widths.iter().rev().copied().collect();
    let mut mirrored = scan_intervals(&reversed, viewport_width, inset, spacing).intervals;
    mirrored.reverse();

    let intervals = forward
        .intervals
        .iter()
        .zip(mirrored)
        .enumerate()
        .map(|(index, (&ltr, rtl))| if index <= split { ltr } else { rtl })
        .collect();

    IntervalScan {
        intervals,
        adjustment_index: Some(split),
    }
}

/// Computes [`LayoutPlan`]s.
///
/// The planner keeps no state between calls; every call measures the items
/// again and returns a fresh plan.
pub struct TabWidthPlanner<'a, M: TextMeasurer + ?Sized> {
    measurer: &'a M,
}

impl<'a, M: TextMeasurer + ?Sized> TabWidthPlanner<'a, M> {
    /// Creates a planner that measures labels with `measurer`.
    pub fn new(measurer: &'a M) -> Self {
        Self { measurer }
    }

    /// Width of a single tab.
    ///
    /// The wider of the normal and selected renderings is used so that the
    /// tab keeps its size when selection toggles. The result is rounded up to
    /// whole pixels and is never below one pixel.
    pub fn tab_width(&self, item: &TabItem, config: &TabBarConfig) -> Px {
        if let Some(width) = config.fixed_tab_width {
            return width;
        }
        let normal = self.measurer.measure(item.normal_text());
        let selected = self
            .measurer
            .measure(item.effective_variant(TabState::Selected));
        (normal.max(selected) + config.tab_inset * 2.0)
            .ceil()
            .max(Px::ONE)
    }

    /// Plans widths and intervals for `items` inside `viewport_width`.
    #[tracing::instrument(level = "debug", skip(self, items, config), fields(count = items.len()))]
    pub fn plan(&self, items: &[TabItem], viewport_width: Px, config: &TabBarConfig) -> LayoutPlan {
        let widths: Vec<Px> = items
            .iter()
            .map(|item| self.tab_width(item, config))
            .collect();

        let scan = if config.fixed_tab_width.is_some() && config.mirror_fixed_width_intervals {
            spliced_intervals(
                &widths,
                viewport_width,
                config.tab_bar_inset,
                config.tab_spacing,
            )
        } else {
            scan_intervals(
                &widths,
                viewport_width,
                config.tab_bar_inset,
                config.tab_spacing,
            )
        };

        let mut intervals = scan.intervals;
        match intervals.last().copied() {
            Some(last) => intervals.push(last),
            None if !widths.is_empty() => intervals.push(Px::ZERO),
            None => {}
        }

        let plan = LayoutPlan::new(
            widths,
            intervals,
            scan.adjustment_index,
            config,
            viewport_width,
        );
        debug!(
            content_length = plan.content_length().0,
            content_margin = plan.content_margin().0,
            adjustment_index = ?plan.adjustment_index(),
            "Planned tab layout"
        );
        plan
    }
}

#[cfg(test)]
mod tests {
    use tabstrip_ui::StyledText;

    use super::*;

    /// Measures a label as its text parsed as a number of pixels.
    fn numeric(text: &StyledText) -> Px {
        Px(text.text.parse().unwrap_or(0.0))
    }

    fn items(widths: &[f32]) -> Vec<TabItem> {
        widths.iter().map(|w| TabItem::new(w.to_string())).collect()
    }

    fn config() -> TabBarConfig {
        TabBarConfig::default()
            .tab_bar_inset(Px(5.0))
            .tab_spacing(Px(10.0))
            .tab_inset(Px::ZERO)
    }

    fn px(values: &[f32]) -> Vec<Px> {
        values.iter().copied().map(Px).collect()
    }

    #[test]
    fn three_tabs_adjust_at_the_first_pair() {
        let planner = TabWidthPlanner::new(&numeric);
        let plan = planner.plan(&items(&[40.0, 60.0, 50.0]), Px(100.0), &config());

        assert_eq!(plan.tab_widths(), px(&[40.0, 60.0, 50.0]).as_slice());
        // total = 5 + 40 + 10 = 55 and 55 + 60 >= 50, so pair 0 adjusts:
        // 55 - 50 + 60 / 2 = 35. Pair 1 is (60 + 50) / 2 + 10 = 65.
        assert_eq!(plan.adjustment_index(), Some(0));
        assert_eq!(plan.tab_intervals(), px(&[35.0, 65.0, 65.0]).as_slice());
        assert_eq!(plan.content_length(), Px(170.0));
        assert_eq!(plan.content_margin(), Px(5.0));
        assert_eq!(plan.content_extent(), Px(180.0));
        assert_eq!(plan.max_strip_offset(), Px(80.0));
    }

    #[test]
    fn intervals_stay_zero_until_half_viewport() {
        let planner = TabWidthPlanner::new(&numeric);
        let plan = planner.plan(&items(&[40.0, 40.0, 40.0, 40.0]), Px(300.0), &config());

        // half = 150. Pair 0: 55 + 40 = 95 < 150. Pair 1: 105 + 40 = 145 < 150.
        // Pair 2: total = 155, adjusts to 155 - 150 + 20 = 25.
        assert_eq!(plan.adjustment_index(), Some(2));
        assert_eq!(plan.tab_intervals(), px(&[0.0, 0.0, 25.0, 25.0]).as_slice());
    }

    #[test]
    fn adjustment_centers_the_next_tab() {
        let planner = TabWidthPlanner::new(&numeric);
        let plan = planner.plan(
            &items(&[70.0, 30.0, 90.0, 50.0, 80.0, 20.0]),
            Px(200.0),
            &config(),
        );
        let k = plan.adjustment_index().unwrap();
        let next = k + 1;
        let strip = plan.interval_offset_before(next);
        let center = plan.tab_x(next) + plan.tab_widths()[next] / 2.0 - strip;
        assert_eq!(center, Px(100.0));

        // Every later pair is the center-to-center distance.
        for i in next..plan.tab_count() - 1 {
            let w = plan.tab_widths();
            assert_eq!(plan.tab_intervals()[i], (w[i] + w[i + 1]) / 2.0 + Px(10.0));
        }
    }

    #[test]
    fn narrow_content_never_adjusts_and_is_centered() {
        let planner = TabWidthPlanner::new(&numeric);
        let plan = planner.plan(&items(&[10.0, 10.0]), Px(400.0), &config());
        assert_eq!(plan.adjustment_index(), None);
        assert_eq!(plan.tab_intervals(), px(&[0.0, 0.0]).as_slice());
        // (400 - 30) / 2
        assert_eq!(plan.content_margin(), Px(185.0));
        assert_eq!(plan.content_extent(), Px(400.0));
        assert_eq!(plan.max_strip_offset(), Px::ZERO);
    }

    #[test]
    fn centering_disabled_uses_the_inset() {
        let planner = TabWidthPlanner::new(&numeric);
        let plan = planner.plan(&items(&[10.0, 10.0]), Px(400.0), &config().centering(false));
        assert_eq!(plan.content_margin(), Px(5.0));
    }

    #[test]
    fn empty_collection_plans_nothing() {
        let planner = TabWidthPlanner::new(&numeric);
        let plan = planner.plan(&[], Px(320.0), &config());
        assert!(plan.is_empty());
        assert!(plan.tab_intervals().is_empty());
        assert_eq!(plan.content_length(), Px::ZERO);
        assert_eq!(plan.adjustment_index(), None);
    }

    #[test]
    fn single_tab_keeps_lengths_equal() {
        let planner = TabWidthPlanner::new(&numeric);
        let plan = planner.plan(&items(&[64.0]), Px(320.0), &config());
        assert_eq!(plan.tab_widths(), px(&[64.0]).as_slice());
        assert_eq!(plan.tab_intervals(), px(&[0.0]).as_slice());
        assert_eq!(plan.content_length(), Px(64.0));
    }

    #[test]
    fn interval_length_matches_width_length() {
        let planner = TabWidthPlanner::new(&numeric);
        for count in 1..12 {
            let widths: Vec<f32> = (0..count).map(|i| 20.0 + (i * 13 % 70) as f32).collect();
            let plan = planner.plan(&items(&widths), Px(240.0), &config());
            assert_eq!(plan.tab_intervals().len(), plan.tab_widths().len());
            if count > 1 {
                let n = plan.tab_intervals().len();
                assert_eq!(plan.tab_intervals()[n - 1], plan.tab_intervals()[n - 2]);
            }
        }
    }

    #[test]
    fn widths_use_the_wider_variant_with_padding() {
        let item = TabItem::new("30.2").selected("41.5");
        let planner = TabWidthPlanner::new(&numeric);
        // ceil(41.5 + 2 * 12)
        let width = planner.tab_width(&item, &config().tab_inset(Px(12.0)));
        assert_eq!(width, Px(66.0));
    }

    #[test]
    fn widths_are_at_least_one_pixel() {
        let planner = TabWidthPlanner::new(&numeric);
        let plan = planner.plan(&items(&[0.0, 0.0]), Px(320.0), &config());
        assert!(plan.tab_widths().iter().all(|&w| w >= Px::ONE));
    }

    #[test]
    fn fixed_width_overrides_measurement() {
        let planner = TabWidthPlanner::new(&numeric);
        let config = config().fixed_tab_width(Px(50.0));
        let plan = planner.plan(&items(&[10.0, 200.0, 3.0]), Px(100.0), &config);
        assert!(plan.tab_widths().iter().all(|&w| w == Px(50.0)));
    }

    #[test]
    fn fixed_width_splice_settles_both_ends() {
        let planner = TabWidthPlanner::new(&numeric);
        let config = config().fixed_tab_width(Px(50.0));
        let plan = planner.plan(&items(&[0.0; 5]), Px(100.0), &config);

        // Left to right: [40, 60, 60, 60]; right to left mirrored: [60, 60, 60, 40].
        assert_eq!(plan.adjustment_index(), Some(0));
        assert_eq!(
            plan.tab_intervals(),
            px(&[40.0, 60.0, 60.0, 40.0, 40.0]).as_slice()
        );

        // Leading end: tab 1 is centered after the first page.
        let strip = plan.interval_offset_before(1);
        assert_eq!(plan.tab_x(1) + Px(25.0) - strip, Px(50.0));

        // Trailing end: the last page scrolls the strip exactly to its end.
        assert_eq!(plan.interval_offset_before(4), plan.max_strip_offset());
    }

    #[test]
    fn fixed_width_without_splice_overshoots_the_trailing_end() {
        let planner = TabWidthPlanner::new(&numeric);
        let config = config()
            .fixed_tab_width(Px(50.0))
            .mirror_fixed_width_intervals(false);
        let plan = planner.plan(&items(&[0.0; 5]), Px(100.0), &config);
        assert_eq!(
            plan.tab_intervals(),
            px(&[40.0, 60.0, 60.0, 60.0, 60.0]).as_slice()
        );
        assert!(plan.interval_offset_before(4) > plan.max_strip_offset());
    }

    #[test]
    fn planning_is_deterministic() {
        let planner = TabWidthPlanner::new(&numeric);
        let tabs = items(&[33.0, 71.0, 18.0, 90.0]);
        let a = planner.plan(&tabs, Px(180.0), &config());
        let b = planner.plan(&tabs, Px(180.0), &config());
        assert_eq!(a, b);
    }

    #[test]
    fn tab_x_accumulates_widths_and_spacing() {
        let planner = TabWidthPlanner::new(&numeric);
        let plan = planner.plan(&items(&[40.0, 60.0, 50.0]), Px(100.0), &config());
        assert_eq!(plan.tab_x(0), Px(5.0));
        assert_eq!(plan.tab_x(1), Px(55.0));
        assert_eq!(plan.tab_x(2), Px(125.0));
        // Tab 2 center is 150; 150 - 50 = 100, clamped to 80.
        assert_eq!(plan.centered_strip_offset(2), Px(80.0));
        assert_eq!(plan.centered_strip_offset(0), Px::ZERO);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn plan_round_trips_through_json() {
        let planner = TabWidthPlanner::new(&numeric);
        let plan = planner.plan(&items(&[40.0, 60.0, 50.0]), Px(100.0), &config());
        let json = serde_json::to_string(&plan).unwrap();
        let decoded: LayoutPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, plan);
        assert_eq!(decoded.tab_intervals(), &[Px(35.0), Px(65.0), Px(65.0)]);
    }
}
