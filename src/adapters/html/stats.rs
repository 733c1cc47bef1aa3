//! Stat cards and the two card grids.

use super::node::{el, Node};
use crate::domain::content::{Characteristic, Misconception, Stat};
use crate::domain::interaction::StatLiteral;

/// One card per stat. Values that parse as numeric literals carry a
/// `data-count-up` marker so the reveal animation can pick them up.
pub fn render_stats(stats: &[Stat]) -> Vec<Node> {
    stats
        .iter()
        .map(|stat| {
            let value = el("div")
                .class("stat-value")
                .flag("data-count-up", StatLiteral::parse(&stat.value).is_some())
                .attr("data-value", stat.value.as_str())
                .text(stat.value.as_str());

            el("div")
                .class("stat-card")
                .child(value)
                .child(el("div").class("stat-label").text(stat.label.as_str()))
                .child(el("div").class("stat-source").text(stat.source.as_str()))
                .into()
        })
        .collect()
}

pub fn render_characteristics(items: &[Characteristic]) -> Vec<Node> {
    items
        .iter()
        .map(|c| {
            el("div")
                .class("card")
                .child(el("div").class("card-icon").text(c.icon.as_str()))
                .child(el("h3").class("card-title").text(c.title.as_str()))
                .child(el("div").class("card-title-en").text(c.en.as_str()))
                .child(el("p").class("card-description").text(c.description.as_str()))
                .into()
        })
        .collect()
}

pub fn render_misconceptions(items: &[Misconception]) -> Vec<Node> {
    items
        .iter()
        .map(|m| {
            el("div")
                .class("misconception-card")
                .child(el("h3").text(m.title.as_str()))
                .child(el("p").text(m.description.as_str()))
                .child(
                    el("div")
                        .class("so-what")
                        .child(el("strong").text("So What?"))
                        .child(el("p").text(m.so_what.as_str())),
                )
                .into()
        })
        .collect()
}
