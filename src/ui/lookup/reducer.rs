//! Reducer for the lookup view.

use crate::ui::mvi::Reducer;

use super::intent::LookupIntent;
use super::state::{QueryState, StalePolicy};

pub struct LookupReducer;

impl Reducer for LookupReducer {
    type State = QueryState;
    type Intent = LookupIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LookupIntent::InsertChar(ch) => {
                state.input_text.push(ch);
                state
            }

            LookupIntent::DeleteChar => {
                state.input_text.pop();
                state
            }

            LookupIntent::ClearInput => {
                state.input_text.clear();
                state
            }

            LookupIntent::Submit { request_id } => {
                state.has_submitted_once = true;
                state.results.clear();
                state.latest_request = request_id;
                state
            }

            LookupIntent::FetchCompleted {
                request_id,
                word,
                results,
            } => {
                if state.stale_policy == StalePolicy::DiscardStale
                    && request_id != state.latest_request
                {
                    return state;
                }
                state.input_text = word;
                state.page_index = 0;
                state.results = results;
                state
            }

            // Failure leaves the view in Loading.
            LookupIntent::FetchFailed { .. } => state,

            LookupIntent::NextPage => {
                if state.can_go_next() {
                    state.page_index += 1;
                }
                state
            }

            LookupIntent::PreviousPage => {
                if state.can_go_previous() {
                    state.page_index -= 1;
                }
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::lookup::RenderMode;

    fn words(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("w{i}")).collect()
    }

    fn completed(request_id: u64, word: &str, results: Vec<String>) -> LookupIntent {
        LookupIntent::FetchCompleted {
            request_id,
            word: word.into(),
            results,
        }
    }

    #[test]
    fn typing_edits_input() {
        let mut state = QueryState::default();
        for ch in "cat".chars() {
            state = LookupReducer::reduce(state, LookupIntent::InsertChar(ch));
        }
        assert_eq!(state.input_text(), "cat");

        state = LookupReducer::reduce(state, LookupIntent::DeleteChar);
        assert_eq!(state.input_text(), "ca");

        state = LookupReducer::reduce(state, LookupIntent::ClearInput);
        assert_eq!(state.input_text(), "");

        // Deleting from an empty field is a no-op.
        state = LookupReducer::reduce(state, LookupIntent::DeleteChar);
        assert_eq!(state.input_text(), "");
    }

    #[test]
    fn submit_clears_results_and_marks_submitted() {
        let state = LookupReducer::reduce(QueryState::default(), completed(0, "a", words(3)));
        let state = LookupReducer::reduce(state, LookupIntent::Submit { request_id: 7 });

        assert!(state.results().is_empty());
        assert!(state.has_submitted_once());
        assert_eq!(state.latest_request(), 7);
        assert_eq!(state.render_mode(), RenderMode::Loading);
    }

    #[test]
    fn completion_resets_page_and_sets_input() {
        let mut state = LookupReducer::reduce(QueryState::default(), completed(1, "a", words(30)));
        state = LookupReducer::reduce(state, LookupIntent::NextPage);
        state = LookupReducer::reduce(state, LookupIntent::NextPage);
        assert_eq!(state.page_index(), 2);

        state = LookupReducer::reduce(state, LookupIntent::Submit { request_id: 2 });
        state = LookupReducer::reduce(state, completed(2, "glad", words(4)));

        assert_eq!(state.page_index(), 0);
        assert_eq!(state.input_text(), "glad");
        assert_eq!(state.results().len(), 4);
    }

    #[test]
    fn failure_keeps_loading() {
        let state = LookupReducer::reduce(QueryState::default(), LookupIntent::Submit { request_id: 1 });
        let state = LookupReducer::reduce(state, LookupIntent::FetchFailed { request_id: 1 });
        assert_eq!(state.render_mode(), RenderMode::Loading);
        assert!(state.results().is_empty());
    }

    #[test]
    fn paging_is_noop_at_edges() {
        let state = LookupReducer::reduce(QueryState::default(), completed(1, "a", words(10)));
        let after_prev = LookupReducer::reduce(state.clone(), LookupIntent::PreviousPage);
        assert_eq!(after_prev, state);
        let after_next = LookupReducer::reduce(state.clone(), LookupIntent::NextPage);
        assert_eq!(after_next, state);
    }

    #[test]
    fn paging_is_noop_without_results() {
        let state = QueryState::default();
        assert_eq!(LookupReducer::reduce(state.clone(), LookupIntent::NextPage), state);
        assert_eq!(LookupReducer::reduce(state.clone(), LookupIntent::PreviousPage), state);
    }

    #[test]
    fn last_write_wins_applies_stale_completion() {
        let mut state = QueryState::new(StalePolicy::LastWriteWins);
        state = LookupReducer::reduce(state, LookupIntent::Submit { request_id: 1 });
        state = LookupReducer::reduce(state, LookupIntent::Submit { request_id: 2 });
        state = LookupReducer::reduce(state, completed(2, "second", vec!["b".into()]));
        state = LookupReducer::reduce(state, completed(1, "first", vec!["a".into()]));

        assert_eq!(state.input_text(), "first");
        assert_eq!(state.results(), ["a".to_string()]);
    }

    #[test]
    fn discard_stale_ignores_superseded_completion() {
        let mut state = QueryState::new(StalePolicy::DiscardStale);
        state = LookupReducer::reduce(state, LookupIntent::Submit { request_id: 1 });
        state = LookupReducer::reduce(state, LookupIntent::Submit { request_id: 2 });
        state = LookupReducer::reduce(state, completed(2, "second", vec!["b".into()]));
        state = LookupReducer::reduce(state, completed(1, "first", vec!["a".into()]));

        assert_eq!(state.input_text(), "second");
        assert_eq!(state.results(), ["b".to_string()]);
    }
}
