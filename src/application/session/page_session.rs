//! PageSession - single-owner state for one reader's page.
//!
//! The session owns the loaded content, the quiz attempt and every UI
//! controller. It is driven one [`PageEvent`] at a time and reports what
//! changed through a [`PageUpdate`]; re-rendering is limited to the sections
//! an event affects.

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::events::{PageEvent, PageUpdate};
use crate::application::handlers::{
    CopyResultHandler, LoadContentHandler, LoadThemeHandler, ToggleThemeCommand,
    ToggleThemeHandler,
};
use crate::domain::content::{ContentStore, Score};
use crate::domain::foundation::messages::{CONTENT_LOAD_FAILED, COPY_FAILED};
use crate::domain::foundation::StateMachine;
use crate::domain::interaction::{
    anchor_scroll_top, reading_progress, Accordion, CopyFeedback, CountUp, Debouncer, NavMenu,
    QuizPhase, RevealTracker, ScrollSpy, Theme, COPY_FEEDBACK_DURATION, COUNT_UP_DURATION,
    RESIZE_DEBOUNCE,
};
use crate::domain::quiz::{QuizAnswers, QuizEngine};
use crate::ports::{
    Clipboard, ContentSource, Fragment, PageRenderer, PageView, QuizView, Section, ThemeStore,
};

/// Tunable timings and the initial chart width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    pub resize_debounce: Duration,
    pub copy_feedback: Duration,
    pub chart_width: Option<f64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            resize_debounce: RESIZE_DEBOUNCE,
            copy_feedback: COPY_FEEDBACK_DURATION,
            chart_width: None,
        }
    }
}

/// Ports a session talks to.
#[derive(Clone)]
pub struct SessionPorts {
    pub content: Arc<dyn ContentSource>,
    pub theme_store: Arc<dyn ThemeStore>,
    pub renderer: Arc<dyn PageRenderer>,
    pub clipboard: Arc<dyn Clipboard>,
    pub fallback_clipboard: Option<Arc<dyn Clipboard>>,
}

pub struct PageSession {
    content: Option<ContentStore>,
    renderer: Arc<dyn PageRenderer>,
    toggle_theme: ToggleThemeHandler,
    copy_result: CopyResultHandler,

    theme: Theme,
    quiz: Option<QuizEngine>,
    phase: QuizPhase,
    quiz_message: Option<String>,

    menu: NavMenu,
    scroll_spy: ScrollSpy,
    reveal: RevealTracker,
    accordion: Accordion,
    resize: Debouncer<f64>,
    chart_width: Option<f64>,
    copy_feedback: CopyFeedback,
    copy_label_shown: &'static str,
    reading_progress: f64,
}

impl PageSession {
    /// Loads the theme and the content document and prepares the controllers.
    ///
    /// A content failure does not fail the session; it renders the blocking
    /// overlay instead.
    pub async fn open(ports: SessionPorts, options: SessionOptions) -> Self {
        let theme = LoadThemeHandler::new(ports.theme_store.clone()).handle().await;
        let content = LoadContentHandler::new(ports.content).handle().await.ok();

        let mut copy_result = CopyResultHandler::new(ports.clipboard);
        if let Some(fallback) = ports.fallback_clipboard {
            copy_result = copy_result.with_fallback(fallback);
        }

        let mut reveal = RevealTracker::default();
        if content.is_some() {
            for section in Section::ALL {
                reveal.observe(section.anchor());
            }
        }

        let copy_feedback = CopyFeedback::new(options.copy_feedback);
        let quiz = content
            .as_ref()
            .and_then(|c| c.quiz())
            .map(|quiz| QuizEngine::new(quiz.clone()));

        Self {
            content,
            renderer: ports.renderer,
            toggle_theme: ToggleThemeHandler::new(ports.theme_store),
            copy_result,
            theme,
            quiz,
            phase: QuizPhase::default(),
            quiz_message: None,
            menu: NavMenu::default(),
            scroll_spy: ScrollSpy::default(),
            reveal,
            accordion: Accordion::default(),
            resize: Debouncer::new(options.resize_debounce),
            chart_width: options.chart_width,
            copy_label_shown: copy_feedback.label(Instant::now()),
            copy_feedback,
            reading_progress: 0.0,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&ContentStore> {
        self.content.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn quiz(&self) -> Option<&QuizEngine> {
        self.quiz.as_ref()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn chart_width(&self) -> Option<f64> {
        self.chart_width
    }

    /// When the next [`PageEvent::Tick`] has work to do, if ever.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.resize.deadline()
    }

    /// View-model snapshot at `now`.
    pub fn view(&self, now: Instant) -> PageView {
        PageView {
            theme: self.theme,
            chart_width: self.chart_width,
            accordion: self.accordion.clone(),
            menu_open: self.menu.is_open(),
            active_section: self.scroll_spy.active().map(str::to_string),
            reading_progress: self.reading_progress,
            quiz: QuizView {
                phase: self.phase,
                answers: self
                    .quiz
                    .as_ref()
                    .map(|q| q.answers().clone())
                    .unwrap_or_else(QuizAnswers::new),
                result: self.quiz.as_ref().and_then(|q| q.result()).cloned(),
                message: self.quiz_message.clone(),
                copy_label: self.copy_feedback.label(now).to_string(),
            },
        }
    }

    /// Full page markup, or the blocking overlay when content failed to load.
    pub fn render(&self, now: Instant) -> String {
        match &self.content {
            Some(content) => self.renderer.render_page(content.document(), &self.view(now)),
            None => self.renderer.render_error_page(CONTENT_LOAD_FAILED),
        }
    }

    fn rerender(&self, section: Section, now: Instant) -> Vec<Fragment> {
        match &self.content {
            Some(content) => {
                self.renderer
                    .render_section(section, content.document(), &self.view(now))
            }
            None => Vec::new(),
        }
    }

    /// Applies one event.
    pub async fn handle(&mut self, event: PageEvent, now: Instant) -> PageUpdate {
        let mut update = PageUpdate::default();
        match event {
            PageEvent::ToggleTheme => {
                update.theme = Some(self.apply_theme_toggle().await);
            }
            PageEvent::ToggleMenu => {
                self.menu.toggle();
                update.menu_open = Some(self.menu.is_open());
            }
            PageEvent::NavLinkClicked {
                target_top,
                header_height,
            } => {
                self.menu.on_link_click();
                update.menu_open = Some(false);
                update.scroll_to = Some(anchor_scroll_top(target_top, header_height));
            }
            PageEvent::KeyPressed { key } => {
                if self.menu.on_key(&key) {
                    update.menu_open = Some(false);
                }
            }
            PageEvent::Scrolled {
                scroll_y,
                scroll_height,
                viewport_height,
                sections,
            } => {
                self.reading_progress = reading_progress(scroll_y, scroll_height, viewport_height);
                update.reading_progress = Some(self.reading_progress);
                update.active_section = self
                    .scroll_spy
                    .on_scroll(viewport_height, &sections)
                    .map(str::to_string);
            }
            PageEvent::Intersected { element_id, ratio } => {
                if self.reveal.on_intersection(&element_id, ratio) {
                    if element_id == Section::Stats.anchor() {
                        update.count_ups = self.stat_count_ups();
                    }
                    update.revealed = Some(element_id);
                }
            }
            PageEvent::Resized { chart_width } => {
                self.resize.push(chart_width, now);
            }
            PageEvent::Tick => {
                if let Some(width) = self.resize.poll(now) {
                    self.chart_width = Some(width);
                    tracing::debug!(width, "Chart re-laid out");
                    update.fragments.extend(self.rerender(Section::UserTypesChart, now));
                }
                let label = self.copy_feedback.label(now);
                if label != self.copy_label_shown {
                    self.copy_label_shown = label;
                    update.fragments.extend(self.rerender(Section::Quiz, now));
                }
            }
            PageEvent::ToggleLevel { level } => {
                self.accordion.toggle(&level);
                update.fragments = self.rerender(Section::Levels, now);
            }
            PageEvent::StartQuiz => {
                if self.quiz.is_some() && self.advance_phase(QuizPhase::Answering) {
                    update.fragments = self.rerender(Section::Quiz, now);
                }
            }
            PageEvent::SelectAnswer { question_id, score } => {
                self.select_answer(&question_id, score);
                update.message = self.quiz_message.clone();
                update.fragments = self.rerender(Section::Quiz, now);
            }
            PageEvent::SubmitQuiz => {
                self.submit_quiz();
                update.message = self.quiz_message.clone();
                update.fragments = self.rerender(Section::Quiz, now);
            }
            PageEvent::ResetQuiz => {
                if let Some(quiz) = self.quiz.as_mut() {
                    quiz.reset();
                }
                if self.phase != QuizPhase::Intro {
                    self.advance_phase(QuizPhase::Intro);
                }
                self.quiz_message = None;
                update.fragments = self.rerender(Section::Quiz, now);
            }
            PageEvent::CopyResult => {
                self.copy(now).await;
                update.message = self.quiz_message.clone();
                self.copy_label_shown = self.copy_feedback.label(now);
                update.fragments = self.rerender(Section::Quiz, now);
            }
        }
        update
    }

    async fn apply_theme_toggle(&mut self) -> Theme {
        let cmd = ToggleThemeCommand {
            current: self.theme,
        };
        self.theme = match self.toggle_theme.handle(cmd).await {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!(error = %e, "Theme not persisted");
                self.theme.toggled()
            }
        };
        self.theme
    }

    fn advance_phase(&mut self, target: QuizPhase) -> bool {
        match self.phase.transition_to(target) {
            Ok(next) => {
                self.phase = next;
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "Quiz phase change ignored");
                false
            }
        }
    }

    fn select_answer(&mut self, question_id: &str, score: Score) {
        let Some(quiz) = self.quiz.as_mut() else {
            return;
        };
        self.quiz_message = match quiz.select_answer(question_id, score) {
            Ok(()) => None,
            Err(e) => Some(e.user_message().to_string()),
        };
    }

    fn submit_quiz(&mut self) {
        if self.phase != QuizPhase::Answering {
            return;
        }
        let Some(quiz) = self.quiz.as_mut() else {
            return;
        };
        let outcome = quiz.compute_result().map(|_| ()).map_err(|e| e.user_message().to_string());
        match outcome {
            Ok(()) => {
                self.quiz_message = None;
                self.advance_phase(QuizPhase::Result);
            }
            Err(message) => self.quiz_message = Some(message),
        }
    }

    async fn copy(&mut self, now: Instant) {
        let Some(result) = self.quiz.as_ref().and_then(|q| q.result()).cloned() else {
            return;
        };
        match self.copy_result.handle(&result).await {
            Ok(()) => {
                self.quiz_message = None;
                self.copy_feedback.mark_copied(now);
            }
            Err(_) => self.quiz_message = Some(COPY_FAILED.to_string()),
        }
    }

    fn stat_count_ups(&self) -> Vec<CountUp> {
        self.content
            .as_ref()
            .and_then(|c| c.document().stats.as_deref())
            .map(|stats| {
                stats
                    .iter()
                    .map(|s| CountUp::new(&s.value, COUNT_UP_DURATION))
                    .collect()
            })
            .unwrap_or_default()
    }
}
