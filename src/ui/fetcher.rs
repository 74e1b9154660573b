//! Runs lookups off the UI thread.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::lookup::WordSource;
use crate::ui::events::{AppEvent, LookupEvent};

/// Spawns each lookup as a tokio task and posts its outcome to the
/// event channel. Lookups are never cancelled; each one reports back.
pub struct Fetcher {
    source: Arc<dyn WordSource>,
    runtime: Handle,
    events: Sender<AppEvent>,
}

impl Fetcher {
    pub fn new(source: Arc<dyn WordSource>, runtime: Handle, events: Sender<AppEvent>) -> Self {
        Self {
            source,
            runtime,
            events,
        }
    }

    pub fn spawn(&self, request_id: u64, word: String) {
        let source = Arc::clone(&self.source);
        let events = self.events.clone();

        self.runtime.spawn(async move {
            let event = match source.related_words(&word).await {
                Ok(results) => LookupEvent::Completed {
                    request_id,
                    word,
                    results,
                },
                Err(error) => LookupEvent::Failed {
                    request_id,
                    word,
                    error,
                },
            };
            // Receiver is gone only when the UI has exited
            let _ = events.send(AppEvent::Lookup(event));
        });
    }
}
