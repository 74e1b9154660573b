//! State for the lookup view.

use crate::ui::mvi::UiState;

use super::pagination::{can_go_next, can_go_previous, page_count, visible_slice};

/// How completions of overlapping lookups are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Every completion is applied in arrival order; the last one to land wins.
    #[default]
    LastWriteWins,
    /// Only the completion of the most recently issued lookup is applied.
    DiscardStale,
}

/// Which of the three mutually exclusive views is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Nothing has been submitted yet.
    Prompt,
    /// A lookup is in flight, or one failed.
    Loading,
    /// Results from the latest completed lookup.
    Results,
}

/// Everything the lookup view knows.
///
/// `results` is either empty or the complete output of one lookup,
/// and `page_index` stays inside the result pages whenever results exist.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryState {
    pub(super) input_text: String,
    pub(super) results: Vec<String>,
    pub(super) page_index: usize,
    pub(super) has_submitted_once: bool,
    pub(super) latest_request: u64,
    pub(super) stale_policy: StalePolicy,
}

impl UiState for QueryState {}

impl QueryState {
    pub fn new(stale_policy: StalePolicy) -> Self {
        Self {
            stale_policy,
            ..Self::default()
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn has_submitted_once(&self) -> bool {
        self.has_submitted_once
    }

    /// Request id of the most recently issued lookup (0 before any).
    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    pub fn stale_policy(&self) -> StalePolicy {
        self.stale_policy
    }

    pub fn render_mode(&self) -> RenderMode {
        if !self.results.is_empty() {
            RenderMode::Results
        } else if self.has_submitted_once {
            RenderMode::Loading
        } else {
            RenderMode::Prompt
        }
    }

    pub fn visible_results(&self) -> &[String] {
        visible_slice(&self.results, self.page_index)
    }

    pub fn page_count(&self) -> usize {
        page_count(self.results.len())
    }

    pub fn can_go_previous(&self) -> bool {
        can_go_previous(self.page_index)
    }

    pub fn can_go_next(&self) -> bool {
        can_go_next(&self.results, self.page_index)
    }
}
