//! Scatter chart markers and legend.

use super::node::{el, Node};
use crate::domain::chart::{layout_points, ChartCanvas};
use crate::domain::content::UserType;

/// Positioned markers with hover tooltips, in content order.
pub fn render_chart(user_types: &[UserType], canvas: &ChartCanvas) -> Vec<Node> {
    layout_points(user_types, canvas)
        .into_iter()
        .zip(user_types)
        .map(|(point, user_type)| {
            let tooltip = el("div")
                .class("chart-tooltip")
                .child(el("strong").text(user_type.name.as_str()))
                .child(el("p").text(user_type.description.as_str()))
                .child(
                    el("p")
                        .class("tooltip-philosophy")
                        .text(format!("Triết lý: {}", user_type.philosophy)),
                );

            el("div")
                .class("chart-point")
                .attr("data-type", point.id.as_str())
                .style(format!(
                    "left: {}px; top: {}px; background-color: {};",
                    point.x, point.y, point.color
                ))
                .child(el("span").class("chart-point-label").text(point.range_label))
                .child(tooltip)
                .into()
        })
        .collect()
}

pub fn render_legend(user_types: &[UserType]) -> Vec<Node> {
    user_types
        .iter()
        .map(|t| {
            el("div")
                .class("legend-item")
                .child(
                    el("span")
                        .class("legend-color")
                        .style(format!("background-color: {};", t.color)),
                )
                .child(
                    el("span")
                        .child(el("strong").text(t.name.as_str()))
                        .text(format!(": {}", t.en)),
                )
                .maybe(
                    t.risk
                        .as_deref()
                        .map(|risk| el("p").class("legend-risk").text(format!("⚠️ {}", risk))),
                )
                .into()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::html::node::render_nodes;
    use crate::domain::foundation::Percentage;

    fn user_type(id: &str, agency: u8, literacy: u8) -> UserType {
        UserType {
            id: id.to_string(),
            name: "Vibe Coder".to_string(),
            en: "Vibe Coder".to_string(),
            description: "Dựa vào cảm giác".to_string(),
            philosophy: "Chạy được là được".to_string(),
            risk: None,
            agency: Percentage::try_new(f64::from(agency)).unwrap(),
            literacy: Percentage::try_new(f64::from(literacy)).unwrap(),
            color: "#ff6b6b".to_string(),
        }
    }

    #[test]
    fn marker_position_follows_layout() {
        let html = render_nodes(&render_chart(
            &[user_type("vibe-coder", 0, 0)],
            &ChartCanvas::with_width(Some(800.0)),
        ));
        assert!(html.contains("left: 20px; top: 320px; background-color: #ff6b6b;"));
        assert!(html.contains(">L0-L2<"));
    }

    #[test]
    fn tooltip_carries_philosophy() {
        let html = render_nodes(&render_chart(
            &[user_type("autopilot", 50, 50)],
            &ChartCanvas::default(),
        ));
        assert!(html.contains("Triết lý: Chạy được là được"));
    }

    #[test]
    fn resize_changes_only_positions() {
        let types = [user_type("workflow-builder", 70, 60)];
        let narrow = render_nodes(&render_chart(&types, &ChartCanvas::with_width(Some(400.0))));
        let wide = render_nodes(&render_chart(&types, &ChartCanvas::with_width(Some(900.0))));
        assert_ne!(narrow, wide);
        assert!(narrow.contains(">L4<") && wide.contains(">L4<"));
    }

    #[test]
    fn legend_shows_risk_only_when_present() {
        let mut risky = user_type("vibe-coder", 10, 10);
        risky.risk = Some("Nợ kỹ thuật".to_string());
        let html = render_nodes(&render_legend(&[risky, user_type("autopilot", 1, 1)]));
        assert_eq!(html.matches("legend-risk").count(), 1);
        assert!(html.contains("⚠️ Nợ kỹ thuật"));
    }
}
