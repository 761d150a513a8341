//! Routing rules that decide which step runs next.
//!
//! Routers are pure functions over the state so they can be unit tested
//! without standing up the graph.

use tablescout_graph::{GraphState, Transition};

use crate::state::{DinerState, Step, Verdict};

/// True for non-empty strings made of ASCII digits only.
pub fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

/// Index into the candidate list for a menu answer, if the answer names a
/// real row. `"0"` and anything non-numeric mean "none of these".
pub fn chosen_index(choice: &str, menu_len: usize) -> Option<usize> {
    if !is_all_digits(choice) {
        return None;
    }
    match choice.parse::<usize>() {
        Ok(number) if number >= 1 && number <= menu_len => Some(number - 1),
        _ => None,
    }
}

/// First step of a run: diners with history get the analyst, newcomers get
/// interviewed.
pub fn entry_route(state: &GraphState<DinerState>) -> Step {
    if state.data.order_history.is_empty() {
        Step::Interviewer
    } else {
        Step::HistoryAnalyst
    }
}

/// After the quality check: approved results reach the menu, anything else
/// (including a missing verdict) goes around again.
pub fn validation_route(state: &GraphState<DinerState>) -> Transition<Step> {
    match state.data.validation {
        Some(Verdict::Approved) => Transition::To(Step::Presenter),
        _ => Transition::To(Step::Search),
    }
}

/// After the menu: a numeric pick moves on to the restaurant's page, anything
/// else restarts the interview. `"0"` is the explicit opt-out; numbers the
/// menu does not have still move forward and fail softly at the fetch step.
pub fn decision_route(state: &GraphState<DinerState>) -> Transition<Step> {
    let decision = state.data.decision.as_deref().unwrap_or("").trim();
    if !is_all_digits(decision) {
        return Transition::To(Step::Interviewer);
    }
    match decision.parse::<u64>() {
        Ok(0) | Err(_) => Transition::To(Step::Interviewer),
        Ok(_) => Transition::To(Step::DetailFetcher),
    }
}
