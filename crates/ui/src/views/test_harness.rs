use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::catalog::defensive_concepts;
use services::QuizController;
use storage::{InMemoryStore, SnapshotStore};

use crate::context::AppContext;
use crate::views::QuizView;

#[derive(Props, Clone)]
struct HarnessProps {
    context: AppContext,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: HarnessProps) -> Element {
    use_context_provider(|| props.context.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub context: AppContext,
    pub store: SnapshotStore,
}

impl ViewHarness {
    /// Mount a fresh tree over the current controller state.
    pub fn remount(&mut self) {
        self.dom = new_dom(self.context.clone());
        self.rebuild();
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
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

fn new_dom(context: AppContext) -> VirtualDom {
    VirtualDom::new_with_props(QuizHarness, HarnessProps { context })
}

pub async fn setup_view_harness() -> ViewHarness {
    let store = SnapshotStore::with_default_key(Arc::new(InMemoryStore::new()));
    setup_view_harness_with_store(store).await
}

pub async fn setup_view_harness_with_store(store: SnapshotStore) -> ViewHarness {
    let quiz = Arc::new(defensive_concepts().expect("built-in catalog"));
    let controller = QuizController::open(quiz, store.clone()).await;
    let context = AppContext::new(controller);
    let mut harness = ViewHarness {
        dom: new_dom(context.clone()),
        context,
        store,
    };
    harness.rebuild();
    harness
}
