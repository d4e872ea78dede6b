use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use exam_core::model::{ExamFlow, ExamName, PageImage};
use exam_core::time::fixed_clock;
use services::ExamService;
use storage::repository::{InMemoryCatalog, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::{ExamView, HomeView, ResultView};

#[derive(Clone)]
struct TestApp {
    preselected: Option<ExamName>,
    exam_service: Arc<ExamService>,
}

impl UiApp for TestApp {
    fn catalog_label(&self) -> String {
        "memory".to_string()
    }

    fn preselected_exam(&self) -> Option<ExamName> {
        self.preselected.clone()
    }

    fn exam_service(&self) -> Arc<ExamService> {
        Arc::clone(&self.exam_service)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Exam,
    Result,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    flow: ExamFlow,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(props.flow.clone()));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Exam => rsx! { ExamView {} },
        ViewKind::Result => rsx! { ResultView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let pending resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn exam_name(raw: &str) -> ExamName {
    ExamName::new(raw).expect("valid exam name")
}

pub fn pages(exam: &str, count: usize) -> Vec<PageImage> {
    (1..=count)
        .map(|i| PageImage::new(format!("{i:02}.png"), format!("/data/{exam}/{i:02}.png")))
        .collect()
}

pub fn setup_view_harness(
    view: ViewKind,
    catalog: InMemoryCatalog,
    flow: ExamFlow,
    preselected: Option<ExamName>,
) -> ViewHarness {
    let storage = Storage::in_memory(catalog);
    let exam_service = Arc::new(ExamService::new(fixed_clock(), Arc::clone(&storage.exams)));

    let app = Arc::new(TestApp {
        preselected,
        exam_service,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, flow });

    ViewHarness { dom }
}
