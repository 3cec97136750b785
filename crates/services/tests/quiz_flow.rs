use quiz_core::model::{Question, QuizSnapshot};
use services::{ErrorKind, QuestionBank, QuizError, QuizLoopService};

fn arithmetic_bank() -> QuestionBank {
    let questions = vec![
        Question::new(
            "2+2?",
            vec!["3".into(), "4".into(), "5".into(), "6".into()],
            "4",
        )
        .unwrap(),
        Question::new(
            "5*6?",
            vec!["30".into(), "32".into(), "28".into(), "36".into()],
            "30",
        )
        .unwrap(),
    ];
    QuestionBank::new("Arithmetic", questions).unwrap()
}

#[test]
fn two_question_quiz_scores_and_restarts() {
    let mut quiz = QuizLoopService::new(arithmetic_bank().start_session().unwrap());

    quiz.select_option("4").unwrap();
    let first = quiz.submit().unwrap();
    assert!(first.correct);
    assert_eq!(quiz.session().score(), 1);
    assert_eq!(quiz.session().current_index(), 1);

    quiz.select_option("32").unwrap();
    let second = quiz.submit().unwrap();
    assert!(!second.correct);
    assert_eq!(
        second.snapshot,
        QuizSnapshot::Complete {
            score: 1,
            total_questions: 2
        }
    );

    let err = quiz.submit().unwrap_err();
    assert_eq!(err, QuizError::Completed);
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);

    let restarted = quiz.reset();
    match restarted {
        QuizSnapshot::InProgress {
            question,
            selected_option,
            question_number,
            total_questions,
        } => {
            assert_eq!(question.text(), "2+2?");
            assert_eq!(selected_option, None);
            assert_eq!(question_number, 1);
            assert_eq!(total_questions, 2);
        }
        other => panic!("expected first question after reset, got {other:?}"),
    }
    assert_eq!(quiz.session().score(), 0);
}

#[test]
fn builtin_quiz_counts_correct_answers() {
    let bank = QuestionBank::builtin().unwrap();
    let mut quiz = QuizLoopService::new(bank.start_session().unwrap());

    // Answer the first three correctly and the last two with the first option.
    let mut expected = 0;
    for (index, question) in bank.questions().iter().enumerate() {
        let answer = if index < 3 {
            question.correct_answer().to_string()
        } else {
            question.options()[0].clone()
        };
        if question.is_correct(&answer) {
            expected += 1;
        }
        quiz.select_option(answer).unwrap();
        quiz.submit().unwrap();
    }

    assert_eq!(expected, 3);
    assert_eq!(
        quiz.snapshot(),
        QuizSnapshot::Complete {
            score: expected,
            total_questions: bank.len()
        }
    );
    assert!(quiz.progress().is_complete);
}
