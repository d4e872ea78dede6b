use exam_core::model::{Choice, Exam, ExamFlow, Modal};
use exam_core::time::fixed_now;
use storage::repository::InMemoryCatalog;

use super::test_harness::{ViewKind, exam_name, pages, setup_view_harness};

fn seeded_catalog() -> InMemoryCatalog {
    let catalog = InMemoryCatalog::new();
    catalog
        .insert_exam(
            exam_name("2024-1"),
            pages("2024-1", 2),
            Some(r#"{"1": 2, "2": 4}"#.to_string()),
        )
        .unwrap();
    catalog
        .insert_exam(exam_name("2023-2"), pages("2023-2", 1), None)
        .unwrap();
    catalog
}

fn flow_in_exam(name: &str, page_count: usize) -> ExamFlow {
    let exam = Exam::new(exam_name(name), pages(name, page_count));
    let mut flow = ExamFlow::new();
    flow.start(&exam, fixed_now()).unwrap();
    flow
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_lists_exams() {
    let mut harness =
        setup_view_harness(ViewKind::Home, seeded_catalog(), ExamFlow::new(), None);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Choose an exam"), "missing title in {html}");
    assert!(html.contains("2023-2"), "missing exam in {html}");
    assert!(html.contains("2024-1"), "missing exam in {html}");
    assert!(html.contains("Start"), "missing start button in {html}");
    assert!(html.contains("Catalog: memory"), "missing catalog label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_empty_catalog() {
    let mut harness =
        setup_view_harness(ViewKind::Home, InMemoryCatalog::new(), ExamFlow::new(), None);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No exams found."), "missing empty notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_renders_first_page() {
    let catalog = seeded_catalog();
    let flow = flow_in_exam("2024-1", 2);
    let mut harness = setup_view_harness(ViewKind::Exam, catalog, flow, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Page 1 / 2"), "missing page label in {html}");
    assert!(html.contains("Question 1"), "missing question label in {html}");
    assert!(html.contains("Answered 0 / 50"), "missing progress in {html}");
    assert!(html.contains("/data/2024-1/01.png"), "missing page image in {html}");
    assert!(html.contains("answer-4"), "missing answer buttons in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_highlights_selected_answer() {
    let catalog = seeded_catalog();
    let mut flow = flow_in_exam("2024-1", 2);
    flow.session_mut().select_answer(Choice::Three);
    let mut harness = setup_view_harness(ViewKind::Exam, catalog, flow, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("answer-selected"), "missing highlight in {html}");
    assert!(html.contains("Answered 1 / 50"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_without_session() {
    let mut harness =
        setup_view_harness(ViewKind::Exam, seeded_catalog(), ExamFlow::new(), None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No exam in progress."), "missing notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_renders_open_dialogs() {
    let catalog = seeded_catalog();
    let mut flow = flow_in_exam("2024-1", 2);
    flow.open_modal(Modal::EditQuestion).unwrap();
    let mut harness = setup_view_harness(ViewKind::Exam, catalog.clone(), flow, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Go to question"), "missing edit dialog in {html}");

    let mut flow = flow_in_exam("2024-1", 2);
    flow.open_modal(Modal::ConfirmExit).unwrap();
    let mut harness = setup_view_harness(ViewKind::Exam, catalog, flow, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Leave the exam?"), "missing exit dialog in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_smoke_renders_score() {
    let catalog = seeded_catalog();
    let mut flow = flow_in_exam("2024-1", 2);
    flow.session_mut().select_answer(Choice::Two);
    flow.session_mut().next_question();
    flow.session_mut().select_answer(Choice::One);
    flow.submit().unwrap();

    let mut harness = setup_view_harness(ViewKind::Result, catalog, flow, None);
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Correct: 1 / Incorrect: 49 / Score: 2"),
        "missing summary in {html}"
    );
    assert!(html.contains("Your answer"), "missing table header in {html}");
    assert!(html.contains("incorrect"), "missing verdict in {html}");
    assert!(html.contains("Back to exam"), "missing return button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_smoke_warns_without_answer_key() {
    let catalog = seeded_catalog();
    let mut flow = flow_in_exam("2023-2", 1);
    flow.session_mut().select_answer(Choice::One);
    flow.submit().unwrap();

    let mut harness = setup_view_harness(ViewKind::Result, catalog, flow, None);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Score: 0"), "missing zero score in {html}");
    assert!(html.contains("No answer key was found"), "missing warning in {html}");
}
