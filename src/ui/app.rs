use crate::ui::events::LookupEvent;
use crate::ui::fetcher::Fetcher;
use crate::ui::lookup::{LookupIntent, LookupReducer, QueryState, RenderMode, StalePolicy};
use crate::ui::mvi::Reducer;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Input,
    Results,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The lookup view.
///
/// Owns the `QueryState` and is its only mutator. Lookups run on the
/// fetcher; their outcomes come back through `on_lookup_event`.
pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Highlighted row within the visible page.
    cursor: usize,
    animation_tick: u8,
    lookup: QueryState,
    fetcher: Fetcher,
    next_request_id: u64,
}

impl App {
    pub fn new(stale_policy: StalePolicy, fetcher: Fetcher) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Input,
            cursor: 0,
            animation_tick: 0,
            lookup: QueryState::new(stale_policy),
            fetcher,
            next_request_id: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn lookup(&self) -> &QueryState {
        &self.lookup
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn on_tick(&mut self) {
        if self.lookup.render_mode() == RenderMode::Loading {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    /// Switches between the input field and the result list.
    ///
    /// The list can only take focus while it has something to show.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input if self.lookup.render_mode() == RenderMode::Results => Focus::Results,
            _ => Focus::Input,
        };
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    pub fn insert_char(&mut self, ch: char) {
        dispatch_mvi!(self, lookup, LookupReducer, LookupIntent::InsertChar(ch));
    }

    pub fn delete_char(&mut self) {
        dispatch_mvi!(self, lookup, LookupReducer, LookupIntent::DeleteChar);
    }

    pub fn clear_input(&mut self) {
        dispatch_mvi!(self, lookup, LookupReducer, LookupIntent::ClearInput);
    }

    /// Looks up whatever is in the input field, empty text included.
    pub fn submit_input(&mut self) -> u64 {
        let word = self.lookup.input_text().to_string();
        self.submit_query(word)
    }

    /// Looks up the highlighted result row, if any.
    pub fn select_highlighted(&mut self) -> Option<u64> {
        let word = self.lookup.visible_results().get(self.cursor)?.clone();
        Some(self.select_word(word))
    }

    pub fn select_word(&mut self, word: String) -> u64 {
        self.submit_query(word)
    }

    /// Clears the results and starts a lookup for `word`.
    ///
    /// Returns the request id. Earlier lookups keep running.
    pub fn submit_query(&mut self, word: String) -> u64 {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        tracing::info!(request_id, word = %word, "submitting lookup");

        dispatch_mvi!(self, lookup, LookupReducer, LookupIntent::Submit { request_id });
        self.cursor = 0;
        self.animation_tick = 0;
        self.fetcher.spawn(request_id, word);
        request_id
    }

    pub fn on_lookup_event(&mut self, event: LookupEvent) {
        match event {
            LookupEvent::Completed {
                request_id,
                word,
                results,
            } => {
                tracing::info!(request_id, word = %word, count = results.len(), "lookup completed");
                dispatch_mvi!(
                    self,
                    lookup,
                    LookupReducer,
                    LookupIntent::FetchCompleted {
                        request_id,
                        word,
                        results,
                    }
                );
                self.cursor = 0;
            }
            LookupEvent::Failed {
                request_id,
                word,
                error,
            } => {
                tracing::warn!(
                    request_id,
                    word = %word,
                    kind = error.kind(),
                    error = %error,
                    "lookup failed"
                );
                dispatch_mvi!(
                    self,
                    lookup,
                    LookupReducer,
                    LookupIntent::FetchFailed { request_id }
                );
            }
        }
    }

    /// Paging only applies while results are on screen.
    pub fn next_page(&mut self) {
        if self.lookup.render_mode() != RenderMode::Results {
            return;
        }
        let before = self.lookup.page_index();
        dispatch_mvi!(self, lookup, LookupReducer, LookupIntent::NextPage);
        if self.lookup.page_index() != before {
            self.cursor = 0;
        }
    }

    pub fn previous_page(&mut self) {
        if self.lookup.render_mode() != RenderMode::Results {
            return;
        }
        let before = self.lookup.page_index();
        dispatch_mvi!(self, lookup, LookupReducer, LookupIntent::PreviousPage);
        if self.lookup.page_index() != before {
            self.cursor = 0;
        }
    }

    /// Moves the highlighted row, clamped to the visible page.
    pub fn move_cursor(&mut self, delta: isize) {
        let visible = self.lookup.visible_results().len();
        if visible == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor.saturating_add_signed(delta);
        self.cursor = target.min(visible - 1);
    }
}
