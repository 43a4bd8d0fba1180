//! The scrolling tab bar controller.
//!
//! ## Usage
//!
//! [`TabBarController`] owns the tab collection, its cached [`LayoutPlan`] and
//! the selection. It does not draw anything: a host list widget implements
//! [`RenderSurface`], reads cell data from the controller, and forwards taps
//! to [`TabBarController::handle_tap`]. The paired page view forwards its
//! scroll offset to [`TabBarController::scroll_to_offset`].
use std::time::Duration;

use tabstrip_ui::{Px, PxRect, PxSize, StyledText, TextMeasurer};
use tracing::debug;

use crate::{
    config::{TabBarConfig, TabBarDefaults},
    error::TabBarError,
    planner::{LayoutPlan, TabWidthPlanner},
    scroll::{ScrollCoordinator, ScrollUpdate},
    tab_item::{TabItem, TabState},
};

/// Receives user-initiated tab selections.
///
/// Programmatic selection through [`TabBarController::select_tab_at`] is
/// never reported. Any `FnMut(usize)` closure is a listener.
pub trait TabSelectionListener {
    /// Called once per tap with the tapped tab index.
    fn on_tab_selected(&mut self, index: usize);
}

impl<F> TabSelectionListener for F
where
    F: FnMut(usize),
{
    fn on_tab_selected(&mut self, index: usize) {
        self(index)
    }
}

/// Requested state of the focus indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FocusIndicatorUpdate {
    /// There are no tabs to highlight.
    Hidden,
    /// Move the indicator to `frame` over `duration`; zero means immediately.
    Frame {
        /// Target frame in strip content coordinates.
        frame: PxRect,
        /// Animation duration.
        duration: Duration,
    },
}

/// The list widget that draws tab cells and the focus indicator.
pub trait RenderSurface {
    /// Visible size of the tab strip.
    fn viewport_size(&self) -> PxSize;
    /// Discards all cells and requests them again, cross-fading over
    /// `transition`.
    fn reload_data(&mut self, transition: Duration);
    /// Flushes pending layout so cell frames are current.
    fn layout_if_needed(&mut self);
    /// Current horizontal scroll offset of the strip.
    fn content_offset(&self) -> Px;
    /// Scrolls the strip. A non-animated call also halts momentum.
    fn set_content_offset(&mut self, offset: Px, animated: bool);
    /// Whether the strip accepts drag input.
    fn is_scroll_enabled(&self) -> bool;
    /// Enables or disables drag input on the strip.
    fn set_scroll_enabled(&mut self, enabled: bool);
    /// Marks the cell at `index` as selected.
    fn select_item(&mut self, index: usize, animated: bool);
    /// Moves, resizes, shows or hides the focus indicator.
    fn update_focus_indicator(&mut self, update: FocusIndicatorUpdate);
}

/// Everything a cell needs to draw one tab.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabCellContent<'a> {
    /// Position of the tab; pass it back to [`TabBarController::handle_tap`].
    pub index: usize,
    /// Label in [`TabState::Normal`].
    pub normal: &'a StyledText,
    /// Label in [`TabState::Highlighted`].
    pub highlighted: &'a StyledText,
    /// Label in [`TabState::Selected`].
    pub selected: &'a StyledText,
}

impl TabCellContent<'_> {
    /// Label to draw in `state`.
    pub fn text_for(&self, state: TabState) -> &StyledText {
        match state {
            TabState::Normal => self.normal,
            TabState::Highlighted => self.highlighted,
            TabState::Selected => self.selected,
        }
    }
}

/// Selected tab and the one selected before it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: usize,
    previous: usize,
}

impl SelectionState {
    fn reset(index: usize) -> Self {
        Self {
            selected: index,
            previous: index,
        }
    }

    fn commit(&mut self, index: usize) {
        self.previous = self.selected;
        self.selected = index;
    }

    /// Index of the selected tab.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index that was selected before the last commit.
    pub fn previous(&self) -> usize {
        self.previous
    }
}

/// Whether the controller currently holds tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TabBarPhase {
    /// No tabs loaded, or the last reload was empty.
    #[default]
    Empty,
    /// At least one tab is loaded.
    Loaded,
}

/// Drives a horizontally scrolling tab strip paired with a paged view.
pub struct TabBarController<S: RenderSurface, M: TextMeasurer> {
    surface: S,
    measurer: M,
    config: TabBarConfig,
    listener: Option<Box<dyn TabSelectionListener>>,
    tabs: Vec<TabItem>,
    plan: LayoutPlan,
    selection: SelectionState,
    phase: TabBarPhase,
    focus_frame: Option<PxRect>,
}

impl<S: RenderSurface, M: TextMeasurer> TabBarController<S, M> {
    /// Creates an empty controller.
    pub fn new(config: TabBarConfig, measurer: M, surface: S) -> Result<Self, TabBarError> {
        config.validate()?;
        Ok(Self {
            surface,
            measurer,
            config,
            listener: None,
            tabs: Vec::new(),
            plan: LayoutPlan::default(),
            selection: SelectionState::default(),
            phase: TabBarPhase::Empty,
            focus_frame: None,
        })
    }

    /// Sets the listener notified about tapped tabs.
    pub fn set_listener(&mut self, listener: impl TabSelectionListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the tap listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Current configuration.
    pub fn config(&self) -> &TabBarConfig {
        &self.config
    }

    /// Validates and applies a new configuration, then lays the tabs out
    /// again. On error the previous configuration stays in effect.
    pub fn set_config(&mut self, config: TabBarConfig) -> Result<(), TabBarError> {
        config.validate()?;
        debug!(?config, "Applying tab bar config");
        self.config = config;
        self.relayout();
        Ok(())
    }

    /// The loaded tabs.
    pub fn tabs(&self) -> &[TabItem] {
        &self.tabs
    }

    /// Number of loaded tabs.
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Cached layout of the loaded tabs.
    pub fn plan(&self) -> &LayoutPlan {
        &self.plan
    }

    /// Current selection.
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    /// Index of the selected tab.
    pub fn index_of_selected_tab(&self) -> usize {
        self.selection.selected
    }

    /// Index selected before the last selection commit.
    pub fn previous_index_of_selected_tab(&self) -> usize {
        self.selection.previous
    }

    /// Whether tabs are loaded.
    pub fn phase(&self) -> TabBarPhase {
        self.phase
    }

    /// Last frame sent to the focus indicator, `None` while hidden.
    pub fn focus_frame(&self) -> Option<PxRect> {
        self.focus_frame
    }

    /// The render surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the render surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Whether the strip accepts drag input.
    pub fn enabled(&self) -> bool {
        self.surface.is_scroll_enabled()
    }

    /// Enables or disables drag input on the strip, typically while the
    /// paired page view is being dragged.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.surface.set_scroll_enabled(enabled);
    }

    /// Halts any momentum scrolling of the strip.
    pub fn stop_scroll_deceleration(&mut self) {
        let offset = self.surface.content_offset();
        self.surface.set_content_offset(offset, false);
    }

    /// Replaces all tabs and selects `initial_index` without animation.
    ///
    /// The focus indicator is placed after the surface has flushed its
    /// layout, so its frame matches the new cells.
    #[tracing::instrument(level = "debug", skip(self, items), fields(count = items.len()))]
    pub fn reload_tabs(&mut self, items: Vec<TabItem>, initial_index: usize) {
        self.tabs = items;
        self.plan = self.compute_plan();
        let initial_index = self.clamp_index(initial_index);
        self.selection = SelectionState::reset(initial_index);

        if self.plan.is_empty() {
            self.phase = TabBarPhase::Empty;
            self.focus_frame = None;
            self.surface
                .update_focus_indicator(FocusIndicatorUpdate::Hidden);
        } else {
            self.phase = TabBarPhase::Loaded;
            self.place_focus_indicator(initial_index, Duration::ZERO);
        }

        self.surface.reload_data(TabBarDefaults::RELOAD_TRANSITION);
        self.surface.layout_if_needed();
        self.commit_selection(initial_index, false);

        if self.config.has_pages() {
            let offset = self.config.page_width * initial_index as f32;
            self.scroll_to_offset(offset);
        }
        debug!(
            phase = ?self.phase,
            selected = self.selection.selected,
            "Tabs reloaded"
        );
    }

    /// Lays the current tabs out again for the current viewport and config.
    ///
    /// The strip offset and the focus indicator are moved back onto the
    /// selected tab, inside the new scroll range.
    pub fn relayout(&mut self) {
        self.plan = self.compute_plan();
        if self.plan.is_empty() {
            return;
        }
        let index = self.clamp_index(self.selection.selected);
        if self.config.has_pages() {
            let offset = self.config.page_width * index as f32;
            self.scroll_to_offset(offset);
        } else {
            self.surface
                .set_content_offset(self.plan.centered_strip_offset(index), false);
            self.place_focus_indicator(index, Duration::ZERO);
        }
    }

    /// Tracks a scroll offset of the paired page view.
    ///
    /// Returns `None` and changes nothing when there are no tabs or the page
    /// width is not positive.
    pub fn scroll_to_offset(&mut self, page_offset: Px) -> Option<ScrollUpdate> {
        let update =
            ScrollCoordinator::new(&self.plan, self.config.page_width).update(page_offset)?;

        self.selection.selected = update.selected_index;
        self.surface.set_content_offset(update.strip_offset, false);
        self.surface.select_item(update.selected_index, true);

        let frame = self.focus_frame_for(update.focus_offset, update.focus_width);
        self.focus_frame = Some(frame);
        self.surface.update_focus_indicator(FocusIndicatorUpdate::Frame {
            frame,
            duration: Duration::ZERO,
        });
        Some(update)
    }

    /// Selects a tab programmatically. Out-of-range indices are clamped.
    pub fn select_tab_at(&mut self, index: usize, animated: bool) {
        self.surface.layout_if_needed();
        self.commit_selection(index, animated);
    }

    /// Handles a tap on the cell at `index`.
    ///
    /// The listener is notified first, then the tab is selected with
    /// animation.
    pub fn handle_tap(&mut self, index: usize) {
        if index >= self.tabs.len() {
            debug!(index, count = self.tabs.len(), "Ignoring tap outside the tabs");
            return;
        }
        if let Some(listener) = self.listener.as_mut() {
            listener.on_tab_selected(index);
        }
        self.surface.layout_if_needed();
        self.commit_selection(index, true);
    }

    /// Number of cells the surface should show.
    pub fn item_count(&self) -> usize {
        self.tabs.len()
    }

    /// Size of the cell at `index`.
    pub fn item_size(&self, index: usize) -> Option<PxSize> {
        let width = self.plan.tab_widths().get(index).copied()?;
        Some(PxSize::new(width, self.surface.viewport_size().height))
    }

    /// Leading and trailing inset of the cell row.
    pub fn section_inset(&self) -> (Px, Px) {
        let margin = self.plan.content_margin();
        (margin, margin)
    }

    /// Labels for the cell at `index`.
    pub fn cell_content(&self, index: usize) -> Option<TabCellContent<'_>> {
        let item = self.tabs.get(index)?;
        Some(TabCellContent {
            index,
            normal: item.effective_variant(TabState::Normal),
            highlighted: item.effective_variant(TabState::Highlighted),
            selected: item.effective_variant(TabState::Selected),
        })
    }

    /// State the cell at `index` should be drawn in when not pressed.
    pub fn cell_state(&self, index: usize) -> TabState {
        if index == self.selection.selected {
            TabState::Selected
        } else {
            TabState::Normal
        }
    }

    fn compute_plan(&self) -> LayoutPlan {
        let viewport_width = self.surface.viewport_size().width;
        TabWidthPlanner::new(&self.measurer).plan(&self.tabs, viewport_width, &self.config)
    }

    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.tabs.len().saturating_sub(1))
    }

    fn commit_selection(&mut self, index: usize, animated: bool) {
        if self.plan.is_empty() {
            debug!(index, "No tabs to select");
            return;
        }
        let index = self.clamp_index(index);
        self.selection.commit(index);
        debug!(
            index,
            previous = self.selection.previous,
            animated,
            "Selection committed"
        );

        self.surface.select_item(index, animated);
        self.surface
            .set_content_offset(self.plan.centered_strip_offset(index), animated);
        let duration = if animated {
            TabBarDefaults::SELECTION_ANIMATION
        } else {
            Duration::ZERO
        };
        self.place_focus_indicator(index, duration);
    }

    fn place_focus_indicator(&mut self, index: usize, duration: Duration) {
        let Some(&width) = self.plan.tab_widths().get(index) else {
            return;
        };
        let frame = self.focus_frame_for(self.plan.tab_x(index), width);
        self.focus_frame = Some(frame);
        self.surface
            .update_focus_indicator(FocusIndicatorUpdate::Frame { frame, duration });
    }

    fn focus_frame_for(&self, x: Px, width: Px) -> PxRect {
        let margin = self.config.focus_vertical_margin;
        let height = (self.surface.viewport_size().height - margin * 2.0).max(Px::ZERO);
        PxRect::new(x, margin, width.max(height), height)
    }
}
