//! A horizontally scrolling tab bar that follows a paged content view.
//!
//! # Usage
//!
//! Implement [`RenderSurface`](controller::RenderSurface) for the list widget
//! that draws the tab cells, then drive a
//! [`TabBarController`](controller::TabBarController) from it.
//!
//! ```
//! use std::time::Duration;
//!
//! use tabstrip_components::{
//!     config::TabBarConfig,
//!     controller::{FocusIndicatorUpdate, RenderSurface, TabBarController},
//!     tab_item::TabItem,
//! };
//! use tabstrip_ui::{GraphemeAdvanceMeasurer, Px, PxSize};
//!
//! #[derive(Default)]
//! struct Strip {
//!     offset: Px,
//!     enabled: bool,
//! }
//!
//! impl RenderSurface for Strip {
//!     fn viewport_size(&self) -> PxSize {
//!         PxSize::new(Px(375.0), Px(44.0))
//!     }
//!     fn reload_data(&mut self, _transition: Duration) {}
//!     fn layout_if_needed(&mut self) {}
//!     fn content_offset(&self) -> Px {
//!         self.offset
//!     }
//!     fn set_content_offset(&mut self, offset: Px, _animated: bool) {
//!         self.offset = offset;
//!     }
//!     fn is_scroll_enabled(&self) -> bool {
//!         self.enabled
//!     }
//!     fn set_scroll_enabled(&mut self, enabled: bool) {
//!         self.enabled = enabled;
//!     }
//!     fn select_item(&mut self, _index: usize, _animated: bool) {}
//!     fn update_focus_indicator(&mut self, _update: FocusIndicatorUpdate) {}
//! }
//!
//! # fn main() -> Result<(), tabstrip_components::error::TabBarError> {
//! let config = TabBarConfig::default().page_width(Px(375.0));
//! let mut tab_bar =
//!     TabBarController::new(config, GraphemeAdvanceMeasurer::default(), Strip::default())?;
//! tab_bar.set_listener(|index| println!("tapped {index}"));
//!
//! let stations = ["Shibuya", "Omotesando", "Aoyama-itchome", "Akasaka-mitsuke"];
//! tab_bar.reload_tabs(stations.into_iter().map(TabItem::from).collect(), 0);
//!
//! // The paged view settled on its third page.
//! tab_bar.scroll_to_offset(Px(375.0 * 2.0));
//! assert_eq!(tab_bar.index_of_selected_tab(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Layout
//!
//! [`TabWidthPlanner`](planner::TabWidthPlanner) turns labels into a
//! [`LayoutPlan`](planner::LayoutPlan): one width per tab and one scroll
//! interval per tab, such that scrolling the strip by the interval of tab
//! `i` moves the next tab to the viewport center.
//! [`ScrollCoordinator`](scroll::ScrollCoordinator) maps page offsets onto
//! that plan.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod config;
pub mod controller;
pub mod error;
pub mod planner;
pub mod scroll;
pub mod tab_item;

pub use crate::{
    config::{TabBarConfig, TabBarDefaults},
    controller::{
        FocusIndicatorUpdate, RenderSurface, SelectionState, TabBarController, TabBarPhase,
        TabCellContent, TabSelectionListener,
    },
    error::TabBarError,
    planner::{LayoutPlan, TabWidthPlanner},
    scroll::{ScrollCoordinator, ScrollUpdate, linear_blend},
    tab_item::{TabItem, TabState},
};
