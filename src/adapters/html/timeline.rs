//! Level timeline with accordion entries.

use super::node::{el, Element, Node};
use crate::domain::content::Level;
use crate::domain::interaction::Accordion;

const CHEVRON_PATH: &str = "M6 9l6 6 6-6";

pub fn render_levels(levels: &[Level], accordion: &Accordion) -> Vec<Node> {
    levels.iter().map(|level| level_item(level, accordion).into()).collect()
}

fn level_item(level: &Level, accordion: &Accordion) -> Element {
    let expanded = accordion.is_expanded(&level.level);
    let class = if expanded {
        "level-item expanded"
    } else {
        "level-item"
    };

    let header = el("div")
        .class("level-header")
        .attr("role", "button")
        .attr("tabindex", "0")
        .attr("data-action", "toggle-level")
        .attr("data-level", level.level.as_str())
        .attr("aria-expanded", accordion.aria_expanded(&level.level))
        .child(
            el("div")
                .child(
                    el("span")
                        .class("level-badge")
                        .style(format!("background-color: {};", level.color))
                        .text(level.level.as_str()),
                )
                .child(el("span").class("level-name").text(level.name.as_str()))
                .child(el("span").class("level-name-vn").text(level.vn.as_str())),
        )
        .child(el("div").class("level-toggle").child(chevron()));

    let signs = level.signs.as_ref().map(|signs| {
        el("div")
            .class("level-signs")
            .child(el("h4").text("Dấu hiệu nhận biết:"))
            .child(el("ul").children(signs.iter().map(|s| el("li").text(s.as_str()))))
    });

    let warning = level.warning.as_ref().map(|warning| {
        el("div")
            .class("level-warning")
            .child(el("strong").text("⚠️ Lưu ý:"))
            .text(format!(" {}", warning))
    });

    let details = el("div")
        .class("level-details")
        .child(el("p").class("level-description").text(level.description.as_str()))
        .maybe(signs)
        .child(
            el("div")
                .class("level-next-step")
                .child(el("strong").text("→ Bước tiếp theo:"))
                .text(format!(" {}", level.next_step)),
        )
        .maybe(warning);

    el("div")
        .class(class)
        .attr("data-level", level.level.as_str())
        .child(
            el("div")
                .class("level-marker")
                .style(format!("border-color: {}; color: {};", level.color, level.color))
                .text(level.marker()),
        )
        .child(header)
        .child(el("div").class("level-content").child(details))
}

fn chevron() -> Element {
    el("svg")
        .attr("width", "24")
        .attr("height", "24")
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .attr("stroke-width", "2")
        .child(el("path").attr("d", CHEVRON_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::html::node::render_nodes;

    fn level(code: &str) -> Level {
        Level {
            level: code.to_string(),
            name: "Vibe Coder".to_string(),
            vn: "Lập trình cảm tính".to_string(),
            color: "#f59e0b".to_string(),
            description: "Mô tả".to_string(),
            signs: Some(vec!["Copy-paste".to_string(), "Không test".to_string()]),
            next_step: "Học đọc code".to_string(),
            warning: None,
        }
    }

    #[test]
    fn marker_strips_prefix() {
        let html = render_nodes(&render_levels(&[level("L2")], &Accordion::default()));
        assert!(html.contains("color: #f59e0b;\">2</div>"));
    }

    #[test]
    fn collapsed_entry_reports_aria_false() {
        let html = render_nodes(&render_levels(&[level("L2")], &Accordion::default()));
        assert!(html.contains("class=\"level-item\""));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[test]
    fn expanded_entry_has_class_and_aria_true() {
        let mut accordion = Accordion::default();
        accordion.toggle("L3");
        let html = render_nodes(&render_levels(&[level("L2"), level("L3")], &accordion));
        assert_eq!(html.matches("level-item expanded").count(), 1);
        assert_eq!(html.matches("aria-expanded=\"true\"").count(), 1);
    }

    #[test]
    fn optional_blocks_are_omitted() {
        let mut bare = level("L0");
        bare.signs = None;
        let html = render_nodes(&render_levels(&[bare], &Accordion::default()));
        assert!(!html.contains("Dấu hiệu nhận biết:"));
        assert!(!html.contains("level-warning"));
        assert!(html.contains("<strong>→ Bước tiếp theo:</strong> Học đọc code"));
    }

    #[test]
    fn warning_and_signs_render_in_order() {
        let mut full = level("L6");
        full.warning = Some("Cẩn thận".to_string());
        let html = render_nodes(&render_levels(&[full], &Accordion::default()));
        let signs = html.find("<li>Copy-paste</li><li>Không test</li>").unwrap();
        let warning = html.find("<strong>⚠️ Lưu ý:</strong> Cẩn thận").unwrap();
        assert!(signs < warning);
    }
}
