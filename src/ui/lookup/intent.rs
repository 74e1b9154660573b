//! Intents for the lookup view.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum LookupIntent {
    /// Append a character to the input field.
    InsertChar(char),
    /// Remove the last character of the input field.
    DeleteChar,
    ClearInput,

    /// A lookup was issued. Clears the results so the view shows Loading.
    Submit { request_id: u64 },

    /// A lookup finished; replaces the results wholesale.
    FetchCompleted {
        request_id: u64,
        /// The word that was looked up, becomes the input text.
        word: String,
        results: Vec<String>,
    },

    /// A lookup failed. The view stays in Loading.
    FetchFailed { request_id: u64 },

    NextPage,
    PreviousPage,
}

impl Intent for LookupIntent {}
