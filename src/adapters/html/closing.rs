//! Takeaways and references.

use super::node::{el, Node};
use crate::domain::content::Reference;

pub fn render_takeaways(takeaways: &[String]) -> Vec<Node> {
    takeaways
        .iter()
        .map(|t| el("div").class("takeaway-item").child(el("p").text(t.as_str())).into())
        .collect()
}

/// External links open in a new tab without leaking the opener.
pub fn render_references(references: &[Reference]) -> Vec<Node> {
    references
        .iter()
        .map(|r| {
            el("div")
                .class("reference-item")
                .child(
                    el("a")
                        .attr("href", r.url.as_str())
                        .attr("target", "_blank")
                        .attr("rel", "noopener noreferrer")
                        .text(r.title.as_str()),
                )
                .child(el("div").class("reference-source").text(r.source.as_str()))
                .into()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::html::node::render_nodes;

    #[test]
    fn takeaways_keep_order() {
        let html = render_nodes(&render_takeaways(&["Một".to_string(), "Hai".to_string()]));
        assert_eq!(
            html,
            "<div class=\"takeaway-item\"><p>Một</p></div><div class=\"takeaway-item\"><p>Hai</p></div>"
        );
    }

    #[test]
    fn reference_link_is_safe() {
        let html = render_nodes(&render_references(&[Reference {
            title: "State of AI".to_string(),
            url: "https://example.org/report?a=1&b=2".to_string(),
            source: "Example".to_string(),
        }]));
        assert!(html.contains(
            "<a href=\"https://example.org/report?a=1&amp;b=2\" target=\"_blank\" rel=\"noopener noreferrer\">State of AI</a>"
        ));
        assert!(html.contains("<div class=\"reference-source\">Example</div>"));
    }

    #[test]
    fn empty_lists_render_nothing() {
        assert!(render_takeaways(&[]).is_empty());
        assert!(render_references(&[]).is_empty());
    }
}
