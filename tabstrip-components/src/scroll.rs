//! Maps the paired content view's scroll offset onto tab strip geometry.
//!
//! ## Usage
//!
//! Feed every horizontal offset reported by the paged content view into
//! [`ScrollCoordinator::update`]. The result says where the strip should be
//! scrolled, which tab shows as selected, and where the focus indicator sits.
//! Between two pages the indicator slides proportionally across the current
//! tab and its width blends linearly from one tab's width to the next.
use tabstrip_ui::Px;
use tracing::trace;

use crate::planner::LayoutPlan;

/// Geometry derived from one scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollUpdate {
    /// Offset divided by the page width.
    pub page_rate: f32,
    /// Page the offset lies in, clamped to the tab range.
    pub page_index: usize,
    /// Nearest page, clamped to the tab range. Drives the selected styling
    /// while the content is being dragged.
    pub selected_index: usize,
    /// Horizontal scroll offset of the tab strip.
    pub strip_offset: Px,
    /// Left edge of the focus indicator in strip content coordinates.
    pub focus_offset: Px,
    /// Width of the focus indicator.
    pub focus_width: Px,
}

/// Evaluates the line through `(index, prev)` and `(index + 1, next)` at `x`.
///
/// Equivalent to `prev + (next - prev) * (x - index)`.
///
/// # Examples
///
/// ```
/// use tabstrip_components::scroll::linear_blend;
/// use tabstrip_ui::Px;
///
/// assert_eq!(linear_blend(2.0, Px(50.0), Px(60.0), 1), Px(50.0));
/// assert_eq!(linear_blend(1.5, Px(50.0), Px(60.0), 1), Px(55.0));
/// ```
pub fn linear_blend(x: f32, next: Px, prev: Px, index: i64) -> Px {
    let slope = next.0 - prev.0;
    let intercept = -slope * index as f32 + prev.0;
    Px(slope * x + intercept)
}

/// Converts content scroll offsets into tab strip geometry for one plan.
pub struct ScrollCoordinator<'a> {
    plan: &'a LayoutPlan,
    page_width: Px,
}

impl<'a> ScrollCoordinator<'a> {
    /// Creates a coordinator over `plan`, paging in units of `page_width`.
    pub fn new(plan: &'a LayoutPlan, page_width: Px) -> Self {
        Self { plan, page_width }
    }

    /// Computes strip and indicator geometry for `raw_page_offset`.
    ///
    /// Returns `None` when there are no tabs, when the page width is not
    /// positive, or when the offset is not finite.
    pub fn update(&self, raw_page_offset: Px) -> Option<ScrollUpdate> {
        let plan = self.plan;
        let page_width = self.page_width;
        if plan.is_empty()
            || !page_width.is_finite()
            || page_width <= Px::ZERO
            || !raw_page_offset.is_finite()
        {
            trace!(
                page_width = page_width.0,
                offset = raw_page_offset.0,
                "Skipping scroll update"
            );
            return None;
        }

        let widths = plan.tab_widths();
        let intervals = plan.tab_intervals();
        let last = (widths.len() - 1) as f32;

        let page_rate = raw_page_offset.0 / page_width.0;
        let floored = page_rate.floor();
        let page_index = floored.clamp(0.0, last) as usize;
        let selected_index = page_rate.round().clamp(0.0, last) as usize;

        let tab_width = widths[page_index] + plan.tab_spacing();
        let tab_interval = intervals[page_index];
        let before_focus = plan.width_offset_before(page_index);
        let before_strip = plan.interval_offset_before(page_index);

        // Offset into the current page.
        let offset = raw_page_offset.max(Px::ZERO);
        let current_page_offset = if page_index > 0 {
            offset - page_width * page_index as f32
        } else {
            offset
        };

        let focus_offset = current_page_offset * (tab_width.0 / page_width.0)
            + before_focus
            + plan.content_margin();
        let strip_offset = current_page_offset * (tab_interval.0 / page_width.0) + before_strip;

        // Before the first page the indicator grows from zero width.
        let prev = if page_rate >= 0.0 {
            widths[page_index]
        } else {
            Px::ZERO
        };
        let next_index = floored + 1.0;
        let next = if (0.0..=last).contains(&next_index) {
            widths[next_index as usize]
        } else {
            Px::ZERO
        };
        // Blend over the fractional page.
        let focus_width = linear_blend(page_rate - floored, next, prev, 0);

        let inset = plan.tab_bar_inset();
        let strip_offset = strip_offset.clamp(Px::ZERO, plan.max_strip_offset());
        let focus_offset =
            focus_offset.clamp(inset, plan.content_extent() - focus_width - inset);

        let update = ScrollUpdate {
            page_rate,
            page_index,
            selected_index,
            strip_offset,
            focus_offset,
            focus_width,
        };
        trace!(?update, "Scroll update");
        Some(update)
    }
}
