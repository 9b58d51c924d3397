use serde::Serialize;

use crate::challenge::CompletionStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryOutcome {
    Correct,
    CorrectWithHint,
    Incorrect,
}

impl HistoryOutcome {
    /// Maps a terminal challenge status to its history outcome. Active is
    /// not a valid input; callers finalize first.
    pub fn from_status(status: CompletionStatus) -> Self {
        match status {
            CompletionStatus::SolvedClean => HistoryOutcome::Correct,
            CompletionStatus::SolvedWithHints => HistoryOutcome::CorrectWithHint,
            CompletionStatus::Active | CompletionStatus::Revealed => HistoryOutcome::Incorrect,
        }
    }

    pub fn is_correct(self) -> bool {
        !matches!(self, HistoryOutcome::Incorrect)
    }
}

/// One finished challenge. Appended once per advance, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub word: String,
    pub translation: String,
    pub outcome: HistoryOutcome,
    /// What the user actually submitted, recorded for missed answers.
    pub user_attempt: Option<String>,
}
