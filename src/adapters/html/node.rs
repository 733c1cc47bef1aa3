//! Minimal HTML node tree.
//!
//! Renderers build `Node` values and serialise them once; escaping happens
//! here so no renderer concatenates raw content into markup.

use std::fmt::Write as _;

/// Elements serialised without a closing tag.
const VOID_TAGS: &[&str] = &["meta", "link", "input", "br", "img"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, Option<String>)>,
    children: Vec<Node>,
}

/// Starts an element.
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// A text node.
pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

impl Element {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, Some(value.into())));
        self
    }

    /// Boolean attribute such as `checked` or `hidden`, emitted only when
    /// `on` is true.
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.attrs.push((name, None));
        }
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn style(self, style: impl Into<String>) -> Self {
        self.attr("style", style)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Appends a text child.
    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(text(value))
    }

    /// Appends a child only when present.
    pub fn maybe(self, node: Option<impl Into<Node>>) -> Self {
        match node {
            Some(node) => self.child(node),
            None => self,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl Node {
    pub fn write_to(&self, out: &mut String) {
        match self {
            Node::Text(value) => out.push_str(&escape(value)),
            Node::Element(element) => element.write_to(out),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

impl Element {
    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            match value {
                Some(value) => {
                    let _ = write!(out, " {}=\"{}\"", name, escape(value));
                }
                None => {
                    let _ = write!(out, " {}", name);
                }
            }
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_to(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Serialises a list of sibling nodes.
pub fn render_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_to(&mut out);
    }
    out
}

/// Escape text for HTML text and attribute positions.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_with_attributes_and_text() {
        let node: Node = el("div").class("card").attr("data-id", "a").text("hi").into();
        assert_eq!(node.to_html(), r#"<div class="card" data-id="a">hi</div>"#);
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let node: Node = el("a")
            .attr("href", "https://x.test/?a=1&b=\"2\"")
            .text("<script>")
            .into();
        assert_eq!(
            node.to_html(),
            r#"<a href="https://x.test/?a=1&amp;b=&quot;2&quot;">&lt;script&gt;</a>"#
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let node: Node = el("input").attr("type", "radio").flag("checked", true).into();
        assert_eq!(node.to_html(), r#"<input type="radio" checked>"#);
    }

    #[test]
    fn flag_off_is_omitted() {
        let node: Node = el("div").flag("hidden", false).into();
        assert_eq!(node.to_html(), "<div></div>");
    }

    #[test]
    fn maybe_skips_none() {
        let none: Option<Element> = None;
        let node: Node = el("ul").maybe(none).maybe(Some(el("li"))).into();
        assert_eq!(node.to_html(), "<ul><li></li></ul>");
    }

    #[test]
    fn render_nodes_concatenates_siblings() {
        let nodes = vec![text("a"), el("br").into(), text("b")];
        assert_eq!(render_nodes(&nodes), "a<br>b");
    }
}
