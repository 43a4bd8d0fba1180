//! Tab content and its per-state label variants.
use tabstrip_ui::StyledText;

/// Interaction state a tab cell is displayed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TabState {
    /// Idle, not selected.
    #[default]
    Normal,
    /// Pressed or hovered.
    Highlighted,
    /// The selected tab.
    Selected,
}

/// One tab's label, rendered in one of three variants.
///
/// The highlighted and selected variants are optional and fall back to the
/// normal variant when absent.
///
/// # Examples
///
/// ```
/// use tabstrip_components::tab_item::{TabItem, TabState};
/// use tabstrip_ui::{FontWeight, StyledText};
///
/// let normal = StyledText::new("Hanzomon");
/// let item = TabItem::new(normal.clone()).selected(normal.clone().weight(FontWeight::Bold));
///
/// assert_eq!(item.effective_variant(TabState::Highlighted), &normal);
/// assert_eq!(item.effective_variant(TabState::Selected).style.weight, FontWeight::Bold);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabItem {
    normal: StyledText,
    highlighted: Option<StyledText>,
    selected: Option<StyledText>,
}

impl TabItem {
    /// Creates an item that renders `normal` in every state.
    pub fn new(normal: impl Into<StyledText>) -> Self {
        Self {
            normal: normal.into(),
            highlighted: None,
            selected: None,
        }
    }

    /// Sets the variant shown while the tab is pressed.
    pub fn highlighted(mut self, highlighted: impl Into<StyledText>) -> Self {
        self.highlighted = Some(highlighted.into());
        self
    }

    /// Sets the variant shown while the tab is selected.
    pub fn selected(mut self, selected: impl Into<StyledText>) -> Self {
        self.selected = Some(selected.into());
        self
    }

    /// The variant shown in [`TabState::Normal`].
    pub fn normal_text(&self) -> &StyledText {
        &self.normal
    }

    /// The explicitly configured highlighted variant, if any.
    pub fn highlighted_text(&self) -> Option<&StyledText> {
        self.highlighted.as_ref()
    }

    /// The explicitly configured selected variant, if any.
    pub fn selected_text(&self) -> Option<&StyledText> {
        self.selected.as_ref()
    }

    /// Resolves the variant to draw for `state`.
    pub fn effective_variant(&self, state: TabState) -> &StyledText {
        let variant = match state {
            TabState::Normal => None,
            TabState::Highlighted => self.highlighted.as_ref(),
            TabState::Selected => self.selected.as_ref(),
        };
        variant.unwrap_or(&self.normal)
    }
}

impl From<&str> for TabItem {
    fn from(text: &str) -> Self {
        TabItem::new(text)
    }
}

impl From<StyledText> for TabItem {
    fn from(text: StyledText) -> Self {
        TabItem::new(text)
    }
}

#[cfg(test)]
mod tests {
    use tabstrip_ui::{Color, FontWeight};

    use super::*;

    #[test]
    fn missing_variants_fall_back_to_normal() {
        let item = TabItem::new("Jimbocho");
        for state in [TabState::Normal, TabState::Highlighted, TabState::Selected] {
            assert_eq!(item.effective_variant(state).text, "Jimbocho");
        }
        assert!(item.highlighted_text().is_none());
        assert!(item.selected_text().is_none());
    }

    #[test]
    fn each_state_picks_its_own_variant() {
        let normal = StyledText::new("Otemachi").color(Color::GRAY);
        let item = TabItem::new(normal.clone())
            .highlighted(normal.clone().color(Color::WHITE))
            .selected(normal.clone().weight(FontWeight::Bold));

        assert_eq!(item.effective_variant(TabState::Normal), &normal);
        assert_eq!(
            item.effective_variant(TabState::Highlighted).style.color,
            Color::WHITE
        );
        assert_eq!(
            item.effective_variant(TabState::Selected).style.weight,
            FontWeight::Bold
        );
    }
}
