use crate::core::filter::FilterState;
use crate::core::view::{Element, Node};
use crate::domain::model::Sauna;
use chrono::{DateTime, Utc};

pub const CARD_CLASS: &str = "sauna-card";
pub const HIDDEN_GEM_BADGE_CLASS: &str = "bg-yellow-100";
pub const GRID_ID: &str = "sauna-grid";
pub const REFRESH_BUTTON_ID: &str = "refresh-btn";
pub const FILTER_BUTTON_ID: &str = "filter-btn";
pub const DEFAULT_PAGE_TITLE: &str = "サウナ穴場チェッカー";

const CARD_BASE_CLASSES: &str = "bg-white rounded-lg shadow-md overflow-hidden sauna-card fade-in";
const BADGE_CLASSES: &str =
    "inline-block bg-yellow-100 text-yellow-800 text-xs px-2 py-1 rounded-full mb-4";
const BADGE_LABEL: &str = "穴場サウナ";
const DETAIL_LINK_LABEL: &str = "詳細を見る";
const EMPTY_STATE_TEXT: &str = "表示できるサウナ情報がありません";
const TAILWIND_CDN: &str = "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css";

const PAGE_STYLE: &str = "@keyframes fadeIn { from { opacity: 0; transform: translateY(10px); } to { opacity: 1; transform: translateY(0); } }\n\
.fade-in { animation: fadeIn 0.5s ease-out both; }\n\
.hidden { display: none; }";

/// 卡片進場動畫的延遲，依序每張多 0.1 秒
pub fn animation_delay(index: usize) -> String {
    format!("animation-delay: {:.1}s", index as f64 * 0.1)
}

pub fn render_card(sauna: &Sauna, index: usize) -> Element {
    let mut body = Element::new("div")
        .with_class("p-6")
        .with_child(
            Element::new("h2")
                .with_class("text-xl font-semibold mb-2")
                .with_text(sauna.name.as_str()),
        )
        .with_child(
            Element::new("p")
                .with_class("text-gray-600 mb-2")
                .with_text(format!("料金: {}", sauna.price)),
        );

    if sauna.is_hidden_gem {
        body = body.with_child(
            Element::new("span")
                .with_class(BADGE_CLASSES)
                .with_text(BADGE_LABEL),
        );
    }

    let footer = Element::new("div")
        .with_class("flex items-center justify-between")
        .with_child(
            Element::new("span")
                .with_class("text-sm text-gray-500")
                .with_text(format!("レビュー数: {}", sauna.review_count)),
        )
        .with_child(
            Element::new("a")
                .with_class("bg-blue-500 text-white px-4 py-2 rounded hover:bg-blue-600")
                .with_attr("href", sauna.url.as_str())
                .with_attr("target", "_blank")
                .with_attr("rel", "noopener")
                .with_text(DETAIL_LINK_LABEL),
        );

    Element::new("div")
        .with_class(CARD_BASE_CLASSES)
        .with_attr("style", animation_delay(index))
        .with_child(body.with_child(footer))
}

pub fn render_cards(saunas: &[Sauna]) -> Vec<Node> {
    saunas
        .iter()
        .enumerate()
        .map(|(index, sauna)| Node::from(render_card(sauna, index)))
        .collect()
}

pub fn empty_grid() -> Element {
    Element::new("div")
        .with_id(GRID_ID)
        .with_class("grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6")
}

/// 以新的卡片取代網格內既有的全部子節點
pub fn update_grid(grid: &mut Element, saunas: &[Sauna]) {
    let mut children = render_cards(saunas);
    if children.is_empty() {
        children.push(
            Element::new("p")
                .with_class("empty-state text-gray-500")
                .with_text(EMPTY_STATE_TEXT)
                .into(),
        );
    }
    grid.replace_children(children);
}

pub fn render_grid(saunas: &[Sauna], filter: FilterState) -> Element {
    let mut grid = empty_grid();
    update_grid(&mut grid, saunas);
    filter.apply(&mut grid);
    grid
}

pub fn cards(grid: &Element) -> Vec<&Element> {
    grid.find_all_by_class(CARD_CLASS)
}

pub fn has_badge(card: &Element) -> bool {
    card.find_by_class(HIDDEN_GEM_BADGE_CLASS).is_some()
}

pub fn render_refresh_button() -> Element {
    Element::new("button")
        .with_id(REFRESH_BUTTON_ID)
        .with_class("bg-blue-500 text-white px-4 py-2 rounded mr-2")
        .with_text("情報を更新")
}

pub fn render_page(
    title: &str,
    saunas: &[Sauna],
    filter: FilterState,
    updated_at: DateTime<Utc>,
) -> Element {
    let head = Element::new("head")
        .with_child(Element::new("meta").with_attr("charset", "UTF-8"))
        .with_child(
            Element::new("meta")
                .with_attr("name", "viewport")
                .with_attr("content", "width=device-width, initial-scale=1.0"),
        )
        .with_child(Element::new("title").with_text(title))
        .with_child(
            Element::new("link")
                .with_attr("href", TAILWIND_CDN)
                .with_attr("rel", "stylesheet"),
        )
        .with_child(Element::new("style").with_child(Node::Raw(PAGE_STYLE.to_string())));

    let header = Element::new("header")
        .with_class("text-center mb-12")
        .with_child(
            Element::new("h1")
                .with_class("text-4xl font-bold text-gray-800 mb-4")
                .with_text(title),
        )
        .with_child(
            Element::new("p")
                .with_class("text-sm text-gray-500")
                .with_text(format!(
                    "最終更新: {}",
                    updated_at.format("%Y-%m-%d %H:%M:%S UTC")
                )),
        );

    let controls = Element::new("div")
        .with_class("flex justify-center mb-8")
        .with_child(render_refresh_button())
        .with_child(filter.button());

    let container = Element::new("div")
        .with_class("container mx-auto px-4 py-8")
        .with_child(header)
        .with_child(controls)
        .with_child(render_grid(saunas, filter));

    Element::new("html")
        .with_attr("lang", "ja")
        .with_child(head)
        .with_child(Element::new("body").with_class("bg-gray-100").with_child(container))
}
