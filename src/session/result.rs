use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::session::history::HistoryEntry;
use crate::session::quiz::QuizSession;

/// Snapshot of a finished (or abandoned) quiz run, suitable for printing
/// or exporting. Nothing is persisted between sessions.
#[derive(Clone, Debug, Serialize)]
pub struct QuizSummary {
    pub mode: String,
    pub score: f64,
    pub answered: usize,
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub history: Vec<HistoryEntry>,
    pub timestamp: DateTime<Utc>,
}

impl QuizSummary {
    pub fn from_session(quiz: &QuizSession) -> Self {
        let correct = quiz
            .history()
            .iter()
            .filter(|e| e.outcome.is_correct())
            .count();
        Self {
            mode: quiz.mode().as_str().to_string(),
            score: quiz.score(),
            answered: quiz.history().len(),
            total: quiz.len(),
            correct,
            incorrect: quiz.history().len() - correct,
            history: quiz.history().to_vec(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::challenge::{Attempt, Mode};
    use crate::vocab::VocabularyItem;

    fn item(word: &str, translation: &str) -> VocabularyItem {
        VocabularyItem {
            word: word.to_string(),
            translation: translation.to_string(),
            part_of_speech: None,
            example: None,
        }
    }

    #[test]
    fn summary_counts_correct_and_incorrect() {
        let items = vec![item("run", "chạy"), item("walk", "đi bộ")];
        let mut quiz =
            QuizSession::new(items, Mode::TypedRecall, SmallRng::seed_from_u64(1)).unwrap();

        quiz.submit(&Attempt::Typed("run".into())).unwrap();
        quiz.advance().unwrap();
        for _ in 0..4 {
            quiz.submit(&Attempt::Typed("nope".into())).unwrap();
        }
        quiz.advance().unwrap();

        let summary = QuizSummary::from_session(&quiz);
        assert_eq!(summary.mode, "typed");
        assert_eq!(summary.score, 1.0);
        assert_eq!(summary.answered, 2);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.incorrect, 1);
    }

    #[test]
    fn summary_serializes_to_json() {
        let quiz =
            QuizSession::new(Vec::new(), Mode::SentenceReorder, SmallRng::seed_from_u64(1))
                .unwrap();
        let summary = QuizSummary::from_session(&quiz);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"mode\":\"reorder\""));
        assert!(json.contains("\"score\":0.0"));
    }
}
