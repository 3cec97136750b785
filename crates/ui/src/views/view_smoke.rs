use quiz_core::model::Question;
use services::QuestionBank;

use super::test_harness::{setup_view_harness, setup_view_harness_with_bank};
use crate::vm::QuizIntent;

#[test]
fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Question 1: What is 2 + 2?"),
        "missing heading in {html}"
    );
    assert!(html.contains("0 of 5 answered"), "missing progress in {html}");
    assert!(html.contains("width: 0%"), "missing progress bar in {html}");
    for option in ["3", "4", "5", "6"] {
        assert!(
            html.contains(&format!(">{option}<")),
            "missing option {option} in {html}"
        );
    }
    assert!(html.contains("Submit"), "missing submit in {html}");
    assert!(
        !html.contains("quiz-option--selected"),
        "unexpected selection in {html}"
    );
}

#[test]
fn quiz_view_smoke_marks_selected_option() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    harness.answer("4");
    harness.select("30");
    let html = harness.render();

    assert!(
        html.contains("Question 2: What is 5 * 6?"),
        "missing heading in {html}"
    );
    assert!(html.contains("1 of 5 answered"), "missing progress in {html}");
    assert!(html.contains("width: 20%"), "missing progress bar in {html}");
    assert_eq!(
        html.matches("quiz-option--selected").count(),
        1,
        "expected one selected option in {html}"
    );
}

#[test]
fn quiz_view_smoke_shows_and_clears_action_errors() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    harness.dispatch(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("quiz-error"), "missing error in {html}");
    assert!(
        html.contains("Question 1: What is 2 + 2?"),
        "submit without selection should not advance: {html}"
    );

    harness.select("4");
    let html = harness.render();
    assert!(!html.contains("quiz-error"), "stale error in {html}");
}

#[test]
fn quiz_view_smoke_renders_final_score_and_restarts() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    for answer in ["4", "32", "5", "6", "14"] {
        harness.answer(answer);
    }
    let html = harness.render();

    assert!(
        html.contains("Your score is: 3/5"),
        "missing score in {html}"
    );
    assert!(html.contains("Restart"), "missing restart in {html}");
    assert!(!html.contains("Submit"), "unexpected submit in {html}");

    harness.dispatch(QuizIntent::Restart);
    let html = harness.render();

    assert!(
        html.contains("Question 1: What is 2 + 2?"),
        "restart should return to the first question: {html}"
    );
    assert!(html.contains("0 of 5 answered"), "missing progress in {html}");
    assert!(
        !html.contains("quiz-option--selected"),
        "unexpected selection in {html}"
    );
}

#[test]
fn quiz_view_smoke_uses_custom_bank() {
    let question = Question::new(
        "Capital of France?",
        vec!["Paris".to_string(), "Lyon".to_string()],
        "Paris",
    )
    .unwrap();
    let bank = QuestionBank::new("Capitals", vec![question]).unwrap();

    let mut harness = setup_view_harness_with_bank(bank);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Question 1: Capital of France?"),
        "missing heading in {html}"
    );
    assert!(html.contains("0 of 1 answered"), "missing progress in {html}");
}
