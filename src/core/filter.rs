use crate::core::render::{has_badge, CARD_CLASS, FILTER_BUTTON_ID};
use crate::core::view::{Element, Node, HIDDEN_CLASS};

pub const SHOW_GEMS_LABEL: &str = "穴場のみ表示";
pub const SHOW_ALL_LABEL: &str = "すべて表示";
pub const INACTIVE_CLASS: &str = "bg-green-500";
pub const ACTIVE_CLASS: &str = "bg-gray-500";

/// 「穴場のみ表示」篩選的狀態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    hidden_gems_only: bool,
}

impl FilterState {
    pub fn new(hidden_gems_only: bool) -> Self {
        Self { hidden_gems_only }
    }

    pub fn is_active(&self) -> bool {
        self.hidden_gems_only
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self {
            hidden_gems_only: !self.hidden_gems_only,
        }
    }

    pub fn label(&self) -> &'static str {
        if self.hidden_gems_only {
            SHOW_ALL_LABEL
        } else {
            SHOW_GEMS_LABEL
        }
    }

    pub fn style_class(&self) -> &'static str {
        if self.hidden_gems_only {
            ACTIVE_CLASS
        } else {
            INACTIVE_CLASS
        }
    }

    pub fn button(&self) -> Element {
        let mut button = Element::new("button")
            .with_id(FILTER_BUTTON_ID)
            .with_class("text-white px-4 py-2 rounded");
        self.sync_button(&mut button);
        button
    }

    /// 依目前狀態更新按鈕文字，兩個樣式 class 永遠只保留一個
    pub fn sync_button(&self, button: &mut Element) {
        button.replace_children(vec![Node::Text(self.label().to_string())]);
        button.set_class(ACTIVE_CLASS, self.hidden_gems_only);
        button.set_class(INACTIVE_CLASS, !self.hidden_gems_only);
    }

    /// 走訪已渲染的卡片：啟用時隱藏沒有穴場徽章的卡片，停用時全部顯示
    pub fn apply(&self, root: &mut Element) -> usize {
        let mut visible = 0;
        let hidden_gems_only = self.hidden_gems_only;
        root.for_each_by_class_mut(CARD_CLASS, &mut |card: &mut Element| {
            let hide = hidden_gems_only && !has_badge(card);
            card.set_class(HIDDEN_CLASS, hide);
            if !hide {
                visible += 1;
            }
        });
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::{cards, render_grid};
    use crate::domain::model::Sauna;

    fn sauna(name: &str, is_hidden_gem: bool) -> Sauna {
        Sauna {
            name: name.to_string(),
            price: "¥800".to_string(),
            review_count: 1,
            url: format!("https://example.com/{}", name),
            is_hidden_gem,
        }
    }

    fn sample_grid() -> Element {
        render_grid(
            &[sauna("a", true), sauna("b", false), sauna("c", true), sauna("d", false)],
            FilterState::default(),
        )
    }

    #[test]
    fn test_toggle_hides_cards_without_badge_then_restores() {
        let mut grid = sample_grid();
        let state = FilterState::default().toggled();

        let visible = state.apply(&mut grid);
        assert_eq!(visible, 2);
        for card in cards(&grid) {
            assert_eq!(card.is_hidden(), !has_badge(card));
        }

        let state = state.toggled();
        let visible = state.apply(&mut grid);
        assert_eq!(visible, 4);
        assert!(cards(&grid).iter().all(|card| !card.is_hidden()));
    }

    #[test]
    fn test_button_label_and_classes_follow_state() {
        let mut state = FilterState::default();
        let mut button = state.button();
        assert_eq!(button.text_content(), SHOW_GEMS_LABEL);

        for _ in 0..4 {
            state = state.toggled();
            state.sync_button(&mut button);

            let expected = if state.is_active() { SHOW_ALL_LABEL } else { SHOW_GEMS_LABEL };
            assert_eq!(button.text_content(), expected);
            // 兩個樣式 class 恰好一個存在
            assert_ne!(button.has_class(ACTIVE_CLASS), button.has_class(INACTIVE_CLASS));
            assert_eq!(button.has_class(ACTIVE_CLASS), state.is_active());
            assert!(button.has_class(state.style_class()));
        }
    }

    #[test]
    fn test_active_filter_on_grid_without_gems_hides_everything() {
        let mut grid = render_grid(&[sauna("x", false), sauna("y", false)], FilterState::default());
        assert_eq!(FilterState::new(true).apply(&mut grid), 0);
        assert!(cards(&grid).iter().all(|card| card.is_hidden()));
    }
}
