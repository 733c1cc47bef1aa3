//! HTML page renderer adapter.
//!
//! Builds the page shell (navigation, reading progress, sections) and fills
//! each mount point with the output of its section renderer. This is the
//! primary implementation of the PageRenderer port.

use std::collections::BTreeSet;

use super::chart::{render_chart, render_legend};
use super::closing::{render_references, render_takeaways};
use super::node::{el, render_nodes, Element, Node};
use super::quiz::{render_intro, render_questions, render_result};
use super::stats::{render_characteristics, render_misconceptions, render_stats};
use super::timeline::render_levels;
use crate::domain::chart::ChartCanvas;
use crate::domain::content::ContentDocument;
use crate::domain::interaction::{QuizPhase, Theme};
use crate::ports::{Fragment, MountPoint, PageRenderer, PageView, Section};

pub const PAGE_TITLE: &str = "Từ \"Vibe Coder\" đến Kiến trúc sư AI";
const STYLESHEET: &str = "assets/styles.css";

/// A page section: nav label, heading and the mounts it hosts in layout
/// order.
struct PageSection {
    section: Section,
    nav_label: &'static str,
    heading: &'static str,
    mounts: &'static [MountPoint],
}

const PAGE_SECTIONS: &[PageSection] = &[
    PageSection {
        section: Section::Stats,
        nav_label: "Tổng quan",
        heading: "Bức tranh toàn cảnh",
        mounts: &[MountPoint::StatsGrid],
    },
    PageSection {
        section: Section::Characteristics,
        nav_label: "Vibe Coder",
        heading: "Vibe Coder là ai?",
        mounts: &[MountPoint::CharacteristicsGrid],
    },
    PageSection {
        section: Section::Misconceptions,
        nav_label: "Ngộ nhận",
        heading: "Những ngộ nhận phổ biến",
        mounts: &[MountPoint::MisconceptionsGrid],
    },
    PageSection {
        section: Section::UserTypesChart,
        nav_label: "Bản đồ",
        heading: "Bản đồ người dùng AI",
        mounts: &[MountPoint::ScatterChart, MountPoint::UserTypesLegend],
    },
    PageSection {
        section: Section::Levels,
        nav_label: "Các level",
        heading: "Thang năng lực L0 đến L6",
        mounts: &[MountPoint::TimelineLevels],
    },
    PageSection {
        section: Section::Quiz,
        nav_label: "Tự đánh giá",
        heading: "Bạn đang ở đâu?",
        mounts: &[
            MountPoint::QuizIntro,
            MountPoint::QuizQuestions,
            MountPoint::QuizResult,
        ],
    },
    PageSection {
        section: Section::Takeaways,
        nav_label: "Kết luận",
        heading: "Kết luận",
        mounts: &[MountPoint::Takeaways],
    },
    PageSection {
        section: Section::References,
        nav_label: "Tham khảo",
        heading: "Tài liệu tham khảo",
        mounts: &[MountPoint::ReferencesList],
    },
];

/// Renders the article as a static HTML document.
///
/// The set of mount points is configurable so a page shell that lacks some
/// containers can be modelled; sections whose required mount is absent render
/// nothing.
#[derive(Debug, Clone)]
pub struct HtmlPageRenderer {
    mounts: BTreeSet<MountPoint>,
}

impl HtmlPageRenderer {
    /// Renderer with every mount point present.
    pub fn new() -> Self {
        Self::with_mounts(MountPoint::ALL)
    }

    pub fn with_mounts(mounts: impl IntoIterator<Item = MountPoint>) -> Self {
        Self {
            mounts: mounts.into_iter().collect(),
        }
    }

    pub fn has_mount(&self, mount: MountPoint) -> bool {
        self.mounts.contains(&mount)
    }

    /// Inner nodes for one mount, or `None` when its content slice is missing.
    fn mount_nodes(
        &self,
        mount: MountPoint,
        content: &ContentDocument,
        view: &PageView,
    ) -> Option<Vec<Node>> {
        match mount {
            MountPoint::StatsGrid => content.stats.as_deref().map(render_stats),
            MountPoint::CharacteristicsGrid => content.characteristics().map(render_characteristics),
            MountPoint::MisconceptionsGrid => {
                content.misconceptions.as_deref().map(render_misconceptions)
            }
            MountPoint::ScatterChart => content.user_types.as_deref().map(|types| {
                render_chart(types, &ChartCanvas::with_width(view.chart_width))
            }),
            MountPoint::UserTypesLegend => content.user_types.as_deref().map(render_legend),
            MountPoint::TimelineLevels => content
                .levels
                .as_deref()
                .map(|levels| render_levels(levels, &view.accordion)),
            MountPoint::QuizIntro => content.quiz.as_ref().map(|_| render_intro()),
            MountPoint::QuizQuestions => content
                .quiz
                .as_ref()
                .map(|quiz| render_questions(quiz, &view.quiz)),
            MountPoint::QuizResult => content.quiz.as_ref().map(|_| render_result(&view.quiz)),
            MountPoint::Takeaways => content.takeaways().map(render_takeaways),
            MountPoint::ReferencesList => content.references.as_deref().map(render_references),
        }
    }

    fn mount_container(&self, mount: MountPoint, content: &ContentDocument, view: &PageView) -> Element {
        let hidden = match mount {
            MountPoint::QuizIntro => view.quiz.phase != QuizPhase::Intro,
            MountPoint::QuizQuestions => view.quiz.phase != QuizPhase::Answering,
            MountPoint::QuizResult => view.quiz.phase != QuizPhase::Result,
            _ => false,
        };
        el("div")
            .id(mount.id())
            .class(container_class(mount))
            .flag("hidden", hidden)
            .children(self.mount_nodes(mount, content, view).unwrap_or_default())
    }

    fn nav(&self, view: &PageView) -> Element {
        let links = PAGE_SECTIONS.iter().map(|section| {
            let anchor = section.section.anchor();
            let active = view.active_section.as_deref() == Some(anchor);
            el("li").child(
                el("a")
                    .attr("href", format!("#{}", anchor))
                    .class(if active { "nav-link active" } else { "nav-link" })
                    .text(section.nav_label),
            )
        });

        let (icon, label) = match view.theme {
            Theme::Light => ("🌙", "Chuyển sang giao diện tối"),
            Theme::Dark => ("☀️", "Chuyển sang giao diện sáng"),
        };

        el("nav")
            .class("nav")
            .child(el("a").class("nav-brand").attr("href", "#top").text("Vibe Ladder"))
            .child(
                el("button")
                    .id("navToggle")
                    .class("nav-toggle")
                    .attr("data-action", "toggle-nav")
                    .attr("aria-expanded", if view.menu_open { "true" } else { "false" })
                    .attr("aria-label", "Menu")
                    .text("☰"),
            )
            .child(
                el("ul")
                    .id("navMenu")
                    .class(if view.menu_open { "nav-menu active" } else { "nav-menu" })
                    .children(links),
            )
            .child(
                el("button")
                    .id("themeToggle")
                    .class("theme-toggle")
                    .attr("data-action", "toggle-theme")
                    .attr("aria-label", label)
                    .text(icon),
            )
    }

    fn section(&self, section: &PageSection, content: &ContentDocument, view: &PageView) -> Element {
        el("section")
            .id(section.section.anchor())
            .class("section reveal")
            .child(el("h2").class("section-title").text(section.heading))
            .children(
                section
                    .mounts
                    .iter()
                    .filter(|m| self.has_mount(**m))
                    .map(|m| self.mount_container(*m, content, view)),
            )
    }
}

impl Default for HtmlPageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn container_class(mount: MountPoint) -> &'static str {
    match mount {
        MountPoint::StatsGrid => "stats-grid",
        MountPoint::CharacteristicsGrid => "cards-grid",
        MountPoint::MisconceptionsGrid => "misconceptions-grid",
        MountPoint::ScatterChart => "scatter-chart",
        MountPoint::UserTypesLegend => "chart-legend",
        MountPoint::TimelineLevels => "timeline",
        MountPoint::QuizIntro => "quiz-intro-container",
        MountPoint::QuizQuestions => "quiz-questions",
        MountPoint::QuizResult => "quiz-result",
        MountPoint::Takeaways => "takeaways",
        MountPoint::ReferencesList => "references-list",
    }
}

fn head() -> Element {
    el("head")
        .child(el("meta").attr("charset", "UTF-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(el("title").text(PAGE_TITLE))
        .child(el("link").attr("rel", "stylesheet").attr("href", STYLESHEET))
}

fn document(theme: Theme, body: Element) -> String {
    let html: Node = el("html")
        .attr("lang", "vi")
        .attr("data-theme", theme.as_str())
        .child(head())
        .child(body)
        .into();
    format!("<!DOCTYPE html>{}", html.to_html())
}

impl PageRenderer for HtmlPageRenderer {
    fn render_page(&self, content: &ContentDocument, view: &PageView) -> String {
        let body = el("body")
            .child(
                el("div")
                    .id("readingProgress")
                    .class("reading-progress")
                    .style(format!("width: {}%;", view.reading_progress)),
            )
            .child(self.nav(view))
            .child(
                el("header")
                    .id("top")
                    .class("hero")
                    .child(el("h1").text(PAGE_TITLE)),
            )
            .child(
                el("main").children(
                    PAGE_SECTIONS
                        .iter()
                        .map(|section| self.section(section, content, view)),
                ),
            );
        document(view.theme, body)
    }

    fn render_section(
        &self,
        section: Section,
        content: &ContentDocument,
        view: &PageView,
    ) -> Vec<Fragment> {
        let mounts = section.mounts();
        let Some(required) = mounts.first() else {
            return Vec::new();
        };
        if !self.has_mount(*required) {
            return Vec::new();
        }

        mounts
            .iter()
            .filter(|m| self.has_mount(**m))
            .filter_map(|m| {
                self.mount_nodes(*m, content, view).map(|nodes| Fragment {
                    mount: *m,
                    html: render_nodes(&nodes),
                })
            })
            .collect()
    }

    fn render_error_page(&self, message: &str) -> String {
        let body = el("body").child(
            el("div")
                .class("error-overlay")
                .attr("role", "alert")
                .child(el("p").text(message)),
        );
        document(Theme::default(), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::messages::CONTENT_LOAD_FAILED;
    use serde_json::json;

    fn content() -> ContentDocument {
        serde_json::from_value(json!({
            "stats": [{ "value": "120%", "label": "Tăng tốc", "source": "Survey" }],
            "userTypes": [{
                "id": "vibe-coder", "name": "Vibe Coder", "en": "Vibe Coder",
                "description": "d", "philosophy": "p",
                "agency": 20, "literacy": 10, "color": "#f00"
            }],
            "quiz": {
                "questions": [{ "id": "q1", "text": "t", "detail": "d", "scoring": { "0": "a", "1": "b" } }],
                "personaMapping": {}
            },
            "references": [{ "title": "R", "url": "https://r.test", "source": "S" }]
        }))
        .unwrap()
    }

    #[test]
    fn render_is_idempotent() {
        let renderer = HtmlPageRenderer::new();
        let view = PageView::default();
        assert_eq!(
            renderer.render_page(&content(), &view),
            renderer.render_page(&content(), &view)
        );
    }

    #[test]
    fn page_carries_theme_and_mounts() {
        let view = PageView {
            theme: Theme::Dark,
            ..PageView::default()
        };
        let html = HtmlPageRenderer::new().render_page(&content(), &view);
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"vi\" data-theme=\"dark\">"));
        for mount in MountPoint::ALL {
            assert!(html.contains(&format!("id=\"{}\"", mount.id())), "{}", mount);
        }
    }

    #[test]
    fn missing_slice_leaves_mount_empty() {
        let html = HtmlPageRenderer::new().render_page(&content(), &PageView::default());
        assert!(html.contains("<div id=\"timelineLevels\" class=\"timeline\"></div>"));
    }

    #[test]
    fn absent_mount_is_a_no_op() {
        let renderer = HtmlPageRenderer::with_mounts([MountPoint::StatsGrid]);
        let fragments =
            renderer.render_section(Section::References, &content(), &PageView::default());
        assert!(fragments.is_empty());

        let html = renderer.render_page(&content(), &PageView::default());
        assert!(!html.contains("referencesList"));
    }

    #[test]
    fn chart_section_needs_scatter_mount() {
        let renderer = HtmlPageRenderer::with_mounts([MountPoint::UserTypesLegend]);
        let fragments =
            renderer.render_section(Section::UserTypesChart, &content(), &PageView::default());
        assert!(fragments.is_empty());
    }

    #[test]
    fn chart_fragment_tracks_width() {
        let renderer = HtmlPageRenderer::new();
        let narrow = PageView {
            chart_width: Some(400.0),
            ..PageView::default()
        };
        let wide = PageView {
            chart_width: Some(900.0),
            ..PageView::default()
        };
        let a = renderer.render_section(Section::UserTypesChart, &content(), &narrow);
        let b = renderer.render_section(Section::UserTypesChart, &content(), &wide);

        assert_eq!(a.len(), 2);
        assert_eq!(a[0].mount, MountPoint::ScatterChart);
        assert_ne!(a[0].html, b[0].html);
        assert_eq!(a[1].html, b[1].html);
    }

    #[test]
    fn quiz_visibility_follows_phase() {
        let renderer = HtmlPageRenderer::new();
        let mut view = PageView::default();
        view.quiz.phase = QuizPhase::Answering;
        let html = renderer.render_page(&content(), &view);

        assert!(html.contains("id=\"quizIntro\" class=\"quiz-intro-container\" hidden"));
        assert!(html.contains("id=\"quizQuestions\" class=\"quiz-questions\">"));
        assert!(html.contains("id=\"quizResult\" class=\"quiz-result\" hidden"));
    }

    #[test]
    fn active_section_highlights_nav_link() {
        let view = PageView {
            active_section: Some("quiz".to_string()),
            menu_open: true,
            ..PageView::default()
        };
        let html = HtmlPageRenderer::new().render_page(&content(), &view);
        assert!(html.contains("<a href=\"#quiz\" class=\"nav-link active\">"));
        assert_eq!(html.matches("nav-link active").count(), 1);
        assert!(html.contains("class=\"nav-menu active\""));
    }

    #[test]
    fn error_page_shows_message_only() {
        let html = HtmlPageRenderer::new().render_error_page(CONTENT_LOAD_FAILED);
        assert!(html.contains(CONTENT_LOAD_FAILED));
        assert!(html.contains("role=\"alert\""));
        assert!(!html.contains("statsGrid"));
    }
}
