//! Page Renderer Port - Markup generation interface.
//!
//! The session builds a [`PageView`] from its state and hands it, together
//! with the content document, to a renderer. Renderers never fail: missing
//! content or a missing mount point renders nothing.

use std::fmt;

use crate::domain::content::ContentDocument;
use crate::domain::foundation::messages::COPY_LABEL;
use crate::domain::interaction::{Accordion, QuizPhase, Theme};
use crate::domain::quiz::{QuizAnswers, QuizResult};

/// Page sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Stats,
    Characteristics,
    Misconceptions,
    UserTypesChart,
    Levels,
    Quiz,
    Takeaways,
    References,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Stats,
        Section::Characteristics,
        Section::Misconceptions,
        Section::UserTypesChart,
        Section::Levels,
        Section::Quiz,
        Section::Takeaways,
        Section::References,
    ];

    /// Element id of the section's `<section>` wrapper, used for anchors,
    /// scroll-spy and reveal tracking.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Stats => "overview",
            Section::Characteristics => "vibe-coder",
            Section::Misconceptions => "misconceptions",
            Section::UserTypesChart => "user-types",
            Section::Levels => "levels",
            Section::Quiz => "quiz",
            Section::Takeaways => "conclusion",
            Section::References => "references",
        }
    }

    /// Mount points the section writes into. The first one is required; the
    /// section renders nothing when it is absent.
    pub fn mounts(&self) -> &'static [MountPoint] {
        match self {
            Section::Stats => &[MountPoint::StatsGrid],
            Section::Characteristics => &[MountPoint::CharacteristicsGrid],
            Section::Misconceptions => &[MountPoint::MisconceptionsGrid],
            Section::UserTypesChart => &[MountPoint::ScatterChart, MountPoint::UserTypesLegend],
            Section::Levels => &[MountPoint::TimelineLevels],
            Section::Quiz => &[
                MountPoint::QuizQuestions,
                MountPoint::QuizIntro,
                MountPoint::QuizResult,
            ],
            Section::Takeaways => &[MountPoint::Takeaways],
            Section::References => &[MountPoint::ReferencesList],
        }
    }
}

/// Stable element ids renderers bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MountPoint {
    StatsGrid,
    CharacteristicsGrid,
    MisconceptionsGrid,
    ScatterChart,
    UserTypesLegend,
    TimelineLevels,
    QuizIntro,
    QuizQuestions,
    QuizResult,
    Takeaways,
    ReferencesList,
}

impl MountPoint {
    pub const ALL: [MountPoint; 11] = [
        MountPoint::StatsGrid,
        MountPoint::CharacteristicsGrid,
        MountPoint::MisconceptionsGrid,
        MountPoint::ScatterChart,
        MountPoint::UserTypesLegend,
        MountPoint::TimelineLevels,
        MountPoint::QuizIntro,
        MountPoint::QuizQuestions,
        MountPoint::QuizResult,
        MountPoint::Takeaways,
        MountPoint::ReferencesList,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            MountPoint::StatsGrid => "statsGrid",
            MountPoint::CharacteristicsGrid => "characteristicsGrid",
            MountPoint::MisconceptionsGrid => "misconceptionsGrid",
            MountPoint::ScatterChart => "scatterChart",
            MountPoint::UserTypesLegend => "userTypesLegend",
            MountPoint::TimelineLevels => "timelineLevels",
            MountPoint::QuizIntro => "quizIntro",
            MountPoint::QuizQuestions => "quizQuestions",
            MountPoint::QuizResult => "quizResult",
            MountPoint::Takeaways => "takeaways",
            MountPoint::ReferencesList => "referencesList",
        }
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Inner markup for one mount point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub mount: MountPoint,
    pub html: String,
}

/// Quiz panel state as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub phase: QuizPhase,
    pub answers: QuizAnswers,
    pub result: Option<QuizResult>,
    /// Validation or clipboard message to surface, if any.
    pub message: Option<String>,
    pub copy_label: String,
}

impl Default for QuizView {
    fn default() -> Self {
        Self {
            phase: QuizPhase::default(),
            answers: QuizAnswers::new(),
            result: None,
            message: None,
            copy_label: COPY_LABEL.to_string(),
        }
    }
}

/// View-model for a full page render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageView {
    pub theme: Theme,
    /// Measured chart width; `None` when unknown.
    pub chart_width: Option<f64>,
    pub accordion: Accordion,
    pub menu_open: bool,
    pub active_section: Option<String>,
    pub reading_progress: f64,
    pub quiz: QuizView,
}

/// Port for turning content plus view state into markup.
///
/// # Contract
///
/// Implementations must:
/// - Be pure: identical inputs produce byte-identical output
/// - Preserve the content document's ordering in every list
/// - Escape all content text
/// - Render nothing for missing content slices or absent mount points
pub trait PageRenderer: Send + Sync {
    /// Render the complete page.
    fn render_page(&self, content: &ContentDocument, view: &PageView) -> String;

    /// Render the fragments of one section, for targeted re-renders such as
    /// the chart after a resize.
    fn render_section(
        &self,
        section: Section,
        content: &ContentDocument,
        view: &PageView,
    ) -> Vec<Fragment>;

    /// Render the blocking overlay shown when content could not be loaded.
    fn render_error_page(&self, message: &str) -> String;
}
