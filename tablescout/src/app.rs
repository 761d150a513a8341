//! Assembly of the decision graph out of the seven steps.

use std::sync::Arc;

use tablescout_core::{ChatModel, Console, OrderHistory, PageFetcher, SearchProvider};
use tablescout_graph::{
    ExecutableGraph, ExecutionConfig, GraphBuilder, GraphError, Observer, Transition,
};

use crate::routing::{decision_route, entry_route, validation_route};
use crate::state::{DinerState, Step};
use crate::steps::{
    DetailFetcher, HistoryAnalyst, Interviewer, Presenter, Recommender, Search, Validator,
};

/// The collaborators the workflow steps call out to.
#[derive(Clone)]
pub struct Collaborators {
    pub chat: Arc<dyn ChatModel>,
    pub search: Arc<dyn SearchProvider>,
    pub fetcher: Arc<dyn PageFetcher>,
    pub history: Arc<dyn OrderHistory>,
    pub console: Arc<dyn Console>,
}

/// Builds the full decision graph.
///
/// Interactive runs pass a config with `max_steps: None`: the only unbounded
/// loop goes through the menu, where the diner decides whether to keep going.
/// Tests tighten the limit instead.
pub fn build_graph(
    collaborators: Collaborators,
    config: ExecutionConfig,
) -> Result<ExecutableGraph<Step, DinerState>, GraphError> {
    let Collaborators {
        chat,
        search,
        fetcher,
        history,
        console,
    } = collaborators;

    GraphBuilder::new()
        .add_node(
            Step::Interviewer,
            Interviewer::new(chat.clone(), console.clone()),
        )
        .add_node(
            Step::HistoryAnalyst,
            HistoryAnalyst::new(chat.clone(), console.clone()),
        )
        .add_node(Step::Search, Search::new(search))
        .add_node(Step::Validator, Validator::new(chat.clone()))
        .add_node(Step::Presenter, Presenter::new(console.clone()))
        .add_node(
            Step::DetailFetcher,
            DetailFetcher::new(fetcher, console.clone()),
        )
        .add_node(Step::Recommender, Recommender::new(chat, console, history))
        .set_conditional_entry(vec![Step::Interviewer, Step::HistoryAnalyst], entry_route)
        .add_edge(Step::Interviewer, Step::Search)
        .add_edge(Step::HistoryAnalyst, Step::Search)
        .add_edge(Step::Search, Step::Validator)
        .add_conditional_edge(
            Step::Validator,
            vec![
                Transition::To(Step::Presenter),
                Transition::To(Step::Search),
            ],
            validation_route,
        )
        .add_conditional_edge(
            Step::Presenter,
            vec![
                Transition::To(Step::DetailFetcher),
                Transition::To(Step::Interviewer),
            ],
            decision_route,
        )
        .add_edge(Step::DetailFetcher, Step::Recommender)
        .set_finish(Step::Recommender)
        .with_default_config(config)
        .build()
}

/// Mirrors node lifecycle events into the log.
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_node_enter(&self, node: &str) {
        tracing::info!(node = %node, "step started");
    }

    fn on_node_exit(&self, node: &str) {
        tracing::info!(node = %node, "step finished");
    }

    fn on_error(&self, node: &str, error: &str) {
        tracing::error!(node = %node, error = %error, "step failed");
    }
}
