//! Word source with canned answers and per-word delays.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

use thesaurus::lookup::{FetchError, WordSource};
use thesaurus::ui::app::App;
use thesaurus::ui::events::AppEvent;
use thesaurus::ui::fetcher::Fetcher;
use thesaurus::ui::lookup::StalePolicy;

#[derive(Clone)]
enum Answer {
    Words(Vec<String>),
    Fail(u16),
}

#[derive(Clone, Default)]
pub struct ScriptedSource {
    answers: HashMap<String, (Duration, Answer)>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, word: &str, results: Vec<String>) -> Self {
        self.answers
            .insert(word.to_string(), (Duration::ZERO, Answer::Words(results)));
        self
    }

    pub fn answer_after(mut self, word: &str, delay: Duration, results: Vec<String>) -> Self {
        self.answers
            .insert(word.to_string(), (delay, Answer::Words(results)));
        self
    }

    pub fn fail(mut self, word: &str, status: u16) -> Self {
        self.answers
            .insert(word.to_string(), (Duration::ZERO, Answer::Fail(status)));
        self
    }
}

#[async_trait]
impl WordSource for ScriptedSource {
    async fn related_words(&self, word: &str) -> Result<Vec<String>, FetchError> {
        let (delay, answer) = self
            .answers
            .get(word)
            .cloned()
            .unwrap_or((Duration::ZERO, Answer::Words(Vec::new())));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        match answer {
            Answer::Words(words) => Ok(words),
            Answer::Fail(status) => Err(FetchError::Status { status }),
        }
    }
}

/// An `App` wired to a scripted source, plus the channel its lookups report to.
pub struct Harness {
    pub app: App,
    pub events: Receiver<AppEvent>,
    // Keeps the worker threads alive for the lifetime of the harness
    _runtime: tokio::runtime::Runtime,
}

impl Harness {
    pub fn new(source: ScriptedSource, policy: StalePolicy) -> Self {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (tx, rx) = std::sync::mpsc::channel();
        let fetcher = Fetcher::new(Arc::new(source), runtime.handle().clone(), tx);
        Self {
            app: App::new(policy, fetcher),
            events: rx,
            _runtime: runtime,
        }
    }

    /// Waits for one lookup outcome and applies it.
    pub fn settle_one(&mut self) {
        match self.events.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::Lookup(event)) => self.app.on_lookup_event(event),
            Ok(other) => panic!("unexpected event: {other:?}"),
            Err(err) => panic!("no lookup outcome: {err}"),
        }
    }

    /// Asserts no outcome arrives within `wait`.
    pub fn assert_quiet(&self, wait: Duration) {
        assert!(self.events.recv_timeout(wait).is_err());
    }
}
