//! Quiz intro, question list and result panel.

use super::node::{el, Element, Node};
use crate::domain::content::QuizDefinition;
use crate::domain::foundation::messages::COPY_LABEL;
use crate::domain::interaction::QuizPhase;
use crate::ports::QuizView;

pub fn render_intro() -> Vec<Node> {
    vec![el("div")
        .class("quiz-intro")
        .child(el("p").text(
            "Trả lời 3 câu hỏi ngắn để biết bạn đang ở level nào và persona nào.",
        ))
        .child(
            el("button")
                .id("startQuizBtn")
                .class("btn btn-primary btn-large")
                .attr("data-action", "start-quiz")
                .text("Bắt đầu đánh giá"),
        )
        .into()]
}

/// Questions with their options in ascending score order, plus the submit
/// and reset actions. A pending validation message is shown above the
/// actions while answering.
pub fn render_questions(quiz: &QuizDefinition, view: &QuizView) -> Vec<Node> {
    let mut nodes: Vec<Node> = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let selected = view.answers.get(&question.id);
            let options = question.scoring.iter().map(|(score, description)| {
                let is_selected = selected == Some(*score);
                el("label")
                    .class(if is_selected {
                        "quiz-option selected"
                    } else {
                        "quiz-option"
                    })
                    .child(
                        el("input")
                            .attr("type", "radio")
                            .attr("name", question.id.as_str())
                            .attr("value", score.to_string())
                            .attr("data-action", "select-answer")
                            .flag("checked", is_selected),
                    )
                    .child(el("div").class("quiz-option-label").text(description.as_str()))
                    .child(el("div").class("quiz-option-score").text(format!("{} điểm", score)))
            });

            el("div")
                .class("quiz-question")
                .attr("data-question", question.id.as_str())
                .child(el("h3").text(format!("Câu {}: {}", index + 1, question.text)))
                .child(el("p").class("quiz-question-detail").text(question.detail.as_str()))
                .child(el("div").class("quiz-options").children(options))
                .into()
        })
        .collect();

    if view.phase == QuizPhase::Answering {
        if let Some(message) = &view.message {
            nodes.push(message_node(message).into());
        }
    }

    nodes.push(
        el("div")
            .class("quiz-actions")
            .child(
                el("button")
                    .class("btn btn-primary btn-large")
                    .attr("data-action", "submit-quiz")
                    .text("Xem kết quả"),
            )
            .child(reset_button())
            .into(),
    );
    nodes
}

/// Result panel; empty until a result exists.
pub fn render_result(view: &QuizView) -> Vec<Node> {
    let Some(result) = &view.result else {
        return Vec::new();
    };
    let level = result.level.label();
    let score = format!("{}/{}", result.total_score, result.max_score);

    let header = el("div")
        .class("result-header")
        .child(el("div").class("result-level").text(level))
        .child(el("div").class("result-persona").text(result.persona.name.as_str()))
        .child(el("div").class("result-score").text(format!("Tổng điểm: {}", score)));

    let explanation = el("div")
        .class("result-explanation")
        .child(el("h4").text("Giải thích"))
        .child(labelled("Điểm số của bạn:", format!("{} điểm", score)))
        .child(labelled(
            "Level:",
            format!("{} - {}", level, result.level.title()),
        ))
        .child(labelled(
            "Persona:",
            format!("{} ({})", result.persona.name, result.persona.condition),
        ));

    let upgrade = el("div")
        .class("result-upgrade")
        .child(el("h4").text("3 bước nâng cấp tiếp theo"))
        .child(
            el("ol").children(
                result
                    .persona
                    .upgrade
                    .iter()
                    .map(|step| el("li").text(step.as_str())),
            ),
        );

    let copy_class = if view.copy_label == COPY_LABEL {
        "btn btn-primary copy-result-btn"
    } else {
        "btn btn-primary copy-result-btn copied"
    };

    let mut nodes: Vec<Node> = vec![
        header.into(),
        el("div")
            .class("result-details")
            .child(explanation)
            .child(upgrade)
            .into(),
    ];
    if view.phase == QuizPhase::Result {
        if let Some(message) = &view.message {
            nodes.push(message_node(message).into());
        }
    }
    nodes.push(
        el("div")
            .class("result-actions")
            .child(
                el("button")
                    .class(copy_class)
                    .attr("data-action", "copy-result")
                    .text(view.copy_label.as_str()),
            )
            .child(reset_button())
            .into(),
    );
    nodes
}

fn labelled(label: &str, value: String) -> Element {
    el("p").child(el("strong").text(label)).text(format!(" {}", value))
}

fn message_node(message: &str) -> Element {
    el("div")
        .class("quiz-message")
        .attr("role", "alert")
        .text(message)
}

fn reset_button() -> Element {
    el("button")
        .class("btn btn-secondary")
        .attr("data-action", "reset-quiz")
        .text("Làm lại")
}
