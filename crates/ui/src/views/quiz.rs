use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{QuestionScreenVm, QuizIntent, QuizScreenVm, QuizVm, ResultScreenVm};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = use_signal(move || ctx.start_quiz().ok());

    rsx! {
        QuizScreen { quiz }
    }
}

/// Renders whichever screen the quiz is on and forwards gestures into it.
#[component]
fn QuizScreen(quiz: Signal<Option<QuizVm>>) -> Element {
    let mut quiz = quiz;
    let mut error = use_signal(|| None::<ViewError>);
    let dispatch = use_callback(move |intent: QuizIntent| {
        if let Some(vm) = &mut *quiz.write() {
            error.set(vm.apply(intent).err());
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let screen = Option::as_ref(&*quiz.read()).map(QuizVm::screen);
    let empty_message = ViewError::EmptyQuiz.message();

    rsx! {
        div { class: "page quiz-page",
            match screen {
                None => rsx! {
                    p { class: "quiz-error", "{empty_message}" }
                },
                Some(QuizScreenVm::Question(question)) => rsx! {
                    QuestionPanel {
                        question,
                        error: error(),
                        onselect: move |option: String| dispatch.call(QuizIntent::Select(option)),
                        onsubmit: move |()| dispatch.call(QuizIntent::Submit),
                    }
                },
                Some(QuizScreenVm::Result(result)) => rsx! {
                    ResultPanel {
                        result,
                        onrestart: move |()| dispatch.call(QuizIntent::Restart),
                    }
                },
            }
        }
    }
}

#[component]
fn QuestionPanel(
    question: QuestionScreenVm,
    error: Option<ViewError>,
    onselect: EventHandler<String>,
    onsubmit: EventHandler<()>,
) -> Element {
    let options = question.options.iter().enumerate().map(|(index, option)| {
        let label = option.label.clone();
        let class = if option.selected {
            "quiz-option quiz-option--selected"
        } else {
            "quiz-option"
        };
        rsx! {
            button {
                key: "{index}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| onselect.call(label.clone()),
                span { class: "quiz-option-marker" }
                span { class: "quiz-option-label", "{option.label}" }
            }
        }
    });

    rsx! {
        section { class: "quiz-question",
            p { class: "quiz-progress", "{question.progress_label}" }
            div { class: "quiz-progress-bar",
                div {
                    class: "quiz-progress-fill",
                    style: "width: {question.progress_percent}%",
                }
            }
            h2 { class: "quiz-heading", "{question.heading}" }
            div { class: "quiz-options", {options} }
            if let Some(err) = error {
                p { class: "quiz-error", "{err.message()}" }
            }
            button {
                class: "btn btn-primary quiz-submit",
                r#type: "button",
                disabled: !question.can_submit,
                onclick: move |_| onsubmit.call(()),
                "Submit"
            }
        }
    }
}

#[component]
fn ResultPanel(result: ResultScreenVm, onrestart: EventHandler<()>) -> Element {
    rsx! {
        section { class: "quiz-result",
            h2 { class: "quiz-score", "{result.score_label}" }
            button {
                class: "btn btn-primary quiz-restart",
                r#type: "button",
                onclick: move |_| onrestart.call(()),
                "Restart"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: std::rc::Rc<std::cell::RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
