//! Catalog fixture shared across crates' tests.

use lingua_catalog::model::{
    AnswerOption, LearningPath, Node, NodeKind, Prompt, QuizQuestion, Section, Unit,
};
use lingua_catalog::Catalog;

fn question(id: &str, text: &str, correct: &str, wrong: &str) -> QuizQuestion {
    QuizQuestion {
        id: id.to_owned(),
        prompt: Prompt::text(text),
        options: vec![
            AnswerOption {
                id: format!("{id}-a"),
                text: correct.to_owned(),
                correct: true,
            },
            AnswerOption {
                id: format!("{id}-b"),
                text: wrong.to_owned(),
                correct: false,
            },
        ],
    }
}

/// Builds the two-path sample catalog used across the test suites.
///
/// Layout: path `id` (Bahasa Indonesia) → section `s1` → unit `u1` with
/// lesson node `n42` (questions `q1`, `q2`) and a question-less checkpoint
/// node `n-checkpoint`; plus a priced path `es` with one lesson node `n7`.
///
/// # Panics
///
/// Panics if the fixture fails catalog validation; that indicates a bug in
/// the fixture itself.
#[must_use]
pub fn sample_catalog() -> Catalog {
    let indonesian = LearningPath {
        id: "id".to_owned(),
        name: "Bahasa Indonesia".to_owned(),
        price: 0,
        sections: vec![Section {
            id: "s1".to_owned(),
            title: "Basics".to_owned(),
            units: vec![Unit {
                id: "u1".to_owned(),
                title: "Greetings".to_owned(),
                nodes: vec![
                    Node {
                        id: "n42".to_owned(),
                        kind: NodeKind::Lesson,
                        questions: vec![
                            question("q1", "Which one means \"good morning\"?", "selamat pagi", "selamat malam"),
                            question("q2", "Which one means \"thank you\"?", "terima kasih", "sama-sama"),
                        ],
                    },
                    Node {
                        id: "n-checkpoint".to_owned(),
                        kind: NodeKind::Checkpoint,
                        questions: vec![],
                    },
                ],
            }],
        }],
    };

    let spanish = LearningPath {
        id: "es".to_owned(),
        name: "Spanish".to_owned(),
        price: 499,
        sections: vec![Section {
            id: "s2".to_owned(),
            title: "Basics".to_owned(),
            units: vec![Unit {
                id: "u2".to_owned(),
                title: "Food".to_owned(),
                nodes: vec![Node {
                    id: "n7".to_owned(),
                    kind: NodeKind::Lesson,
                    questions: vec![question(
                        "q7",
                        "Which one means \"the apple\"?",
                        "la manzana",
                        "el pan",
                    )],
                }],
            }],
        }],
    };

    Catalog::new(vec![indonesian, spanish]).expect("sample catalog is valid")
}
