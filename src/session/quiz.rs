use rand::rngs::SmallRng;

use crate::challenge::{Attempt, Mode, factory};
use crate::error::EngineError;
use crate::session::challenge::{ChallengeSession, Outcome};
use crate::session::history::{HistoryEntry, HistoryOutcome};
use crate::vocab::VocabularyItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The next challenge is ready.
    Next,
    /// No items remain; the session is done.
    Completed,
}

/// Sequences one run of challenges over an ordered item list. Owns the
/// active challenge session, the score and the history; invariants:
/// `index <= items.len()`, `history.len() == index` whenever no challenge
/// is mid-flight, `score >= 0`.
#[derive(Debug)]
pub struct QuizSession {
    items: Vec<VocabularyItem>,
    mode: Mode,
    index: usize,
    score: f64,
    history: Vec<HistoryEntry>,
    active: Option<ChallengeSession>,
    rng: SmallRng,
}

impl QuizSession {
    /// An empty item list is not an error: the session simply starts
    /// completed with zero score.
    pub fn new(
        items: Vec<VocabularyItem>,
        mode: Mode,
        mut rng: SmallRng,
    ) -> Result<Self, EngineError> {
        let active = match items.first() {
            Some(first) => Some(ChallengeSession::new(factory::create(
                first, mode, &items, &mut rng,
            )?)),
            None => None,
        };
        Ok(Self {
            items,
            mode,
            index: 0,
            score: 0.0,
            history: Vec::new(),
            active,
            rng,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn is_completed(&self) -> bool {
        self.index >= self.items.len()
    }

    /// The active challenge, or `None` once the session is completed.
    pub fn current(&self) -> Option<&ChallengeSession> {
        self.active.as_ref()
    }

    /// Route an attempt into the active challenge. Submitting with no
    /// challenge left counts as submitting against a finalized one.
    pub fn submit(&mut self, attempt: &Attempt) -> Result<Outcome, EngineError> {
        match self.active.as_mut() {
            Some(session) => session.submit(attempt),
            None => Err(EngineError::AlreadyFinalized),
        }
    }

    /// Record the finished challenge and move to the next item. Requires
    /// the active challenge to be terminal; once completed, further calls
    /// are no-ops reporting `Completed`.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, EngineError> {
        let Some(session) = self.active.as_ref() else {
            return Ok(AdvanceOutcome::Completed);
        };
        if !session.is_terminal() {
            return Err(EngineError::ChallengeStillActive);
        }

        // Build the successor before committing anything: if creation
        // fails, history, score and index must be exactly as they were so
        // a retry cannot record the finished challenge twice.
        let next = match self.items.get(self.index + 1) {
            Some(item) => Some(ChallengeSession::new(factory::create(
                item,
                self.mode,
                &self.items,
                &mut self.rng,
            )?)),
            None => None,
        };

        let outcome = HistoryOutcome::from_status(session.status());
        let item = &self.items[self.index];
        self.history.push(HistoryEntry {
            word: item.word.clone(),
            translation: item.translation.clone(),
            outcome,
            user_attempt: if outcome.is_correct() {
                None
            } else {
                session.last_attempt().map(str::to_string)
            },
        });
        self.score += session.credit();
        self.index += 1;

        match next {
            Some(challenge) => {
                self.active = Some(challenge);
                Ok(AdvanceOutcome::Next)
            }
            None => {
                self.active = None;
                Ok(AdvanceOutcome::Completed)
            }
        }
    }

    /// Move on from a solved or revealed typed challenge. Same bookkeeping
    /// as `advance`; only the typed modes expose it.
    pub fn skip(&mut self) -> Result<AdvanceOutcome, EngineError> {
        if !self.mode.supports_skip() {
            return Err(EngineError::SkipUnsupported);
        }
        self.advance()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::vocab::ExampleSentence;

    fn item(word: &str, translation: &str) -> VocabularyItem {
        VocabularyItem {
            word: word.to_string(),
            translation: translation.to_string(),
            part_of_speech: None,
            example: Some(ExampleSentence {
                source_text: format!("We say {word} often."),
                translated_text: format!("Chúng tôi thường nói {translation}."),
            }),
        }
    }

    fn pool() -> Vec<VocabularyItem> {
        vec![
            item("run", "chạy"),
            item("walk", "đi bộ"),
            item("sleep", "ngủ"),
            item("read", "đọc"),
            item("write", "viết"),
        ]
    }

    fn session(mode: Mode) -> QuizSession {
        QuizSession::new(pool(), mode, SmallRng::seed_from_u64(21)).unwrap()
    }

    #[test]
    fn empty_item_list_starts_completed() {
        let quiz = QuizSession::new(Vec::new(), Mode::TypedRecall, SmallRng::seed_from_u64(0))
            .unwrap();
        assert!(quiz.is_completed());
        assert!(quiz.current().is_none());
        assert_eq!(quiz.score(), 0.0);
        assert!(quiz.history().is_empty());
    }

    #[test]
    fn advance_on_completed_session_is_a_noop() {
        let mut quiz =
            QuizSession::new(Vec::new(), Mode::TypedRecall, SmallRng::seed_from_u64(0)).unwrap();
        assert_eq!(quiz.advance().unwrap(), AdvanceOutcome::Completed);
        assert_eq!(quiz.advance().unwrap(), AdvanceOutcome::Completed);
        assert!(quiz.history().is_empty());
    }

    #[test]
    fn advance_requires_terminal_challenge() {
        let mut quiz = session(Mode::TypedRecall);
        let err = quiz.advance().unwrap_err();
        assert!(matches!(err, EngineError::ChallengeStillActive));
        assert_eq!(quiz.index(), 0);
        assert!(quiz.history().is_empty());
    }

    #[test]
    fn full_typed_run_accumulates_score_and_history() {
        let mut quiz = session(Mode::TypedRecall);
        let words = ["run", "walk", "sleep", "read", "write"];
        for (i, word) in words.iter().enumerate() {
            let attempt = Attempt::Typed(word.to_string());
            assert!(matches!(
                quiz.submit(&attempt).unwrap(),
                Outcome::Correct { .. }
            ));
            let outcome = quiz.advance().unwrap();
            if i + 1 < words.len() {
                assert_eq!(outcome, AdvanceOutcome::Next);
            } else {
                assert_eq!(outcome, AdvanceOutcome::Completed);
            }
            assert_eq!(quiz.history().len(), i + 1);
        }
        assert!(quiz.is_completed());
        assert!(quiz.current().is_none());
        assert_eq!(quiz.score(), 5.0);
        assert!(quiz.history().iter().all(|e| e.outcome.is_correct()));
    }

    #[test]
    fn score_is_sum_of_recorded_credits() {
        let mut quiz = session(Mode::TypedRecall);

        // First word clean: +1
        quiz.submit(&Attempt::Typed("run".into())).unwrap();
        quiz.advance().unwrap();
        // Second word after one hint: +0.5
        quiz.submit(&Attempt::Typed("wrong".into())).unwrap();
        quiz.submit(&Attempt::Typed("walk".into())).unwrap();
        quiz.advance().unwrap();
        // Third word exhausted: +0
        for _ in 0..4 {
            quiz.submit(&Attempt::Typed("no".into())).unwrap();
        }
        quiz.advance().unwrap();

        assert_eq!(quiz.score(), 1.5);
        assert_eq!(quiz.history().len(), 3);
        assert_eq!(quiz.history()[0].outcome, HistoryOutcome::Correct);
        assert_eq!(quiz.history()[1].outcome, HistoryOutcome::CorrectWithHint);
        assert_eq!(quiz.history()[2].outcome, HistoryOutcome::Incorrect);
        assert_eq!(quiz.history()[2].user_attempt.as_deref(), Some("no"));
    }

    #[test]
    fn skip_matches_advance_bookkeeping() {
        let mut quiz = session(Mode::TypedRecall);
        quiz.submit(&Attempt::Typed("run".into())).unwrap();
        let score_before = quiz.score();
        quiz.skip().unwrap();
        assert_eq!(quiz.index(), 1);
        assert_eq!(quiz.history().len(), 1);
        assert_eq!(quiz.score(), score_before + 1.0);
    }

    #[test]
    fn skip_is_refused_outside_typed_modes() {
        let mut quiz = session(Mode::MultipleChoice);
        let answer = quiz.current().unwrap().challenge().answer_text();
        quiz.submit(&Attempt::Choice(answer)).unwrap();
        let err = quiz.skip().unwrap_err();
        assert!(matches!(err, EngineError::SkipUnsupported));
        // advance still works
        assert_eq!(quiz.advance().unwrap(), AdvanceOutcome::Next);
    }

    #[test]
    fn submit_after_completion_reports_already_finalized() {
        let mut quiz = QuizSession::new(
            vec![item("run", "chạy")],
            Mode::TypedRecall,
            SmallRng::seed_from_u64(0),
        )
        .unwrap();
        quiz.submit(&Attempt::Typed("run".into())).unwrap();
        quiz.advance().unwrap();
        let err = quiz.submit(&Attempt::Typed("run".into())).unwrap_err();
        assert!(matches!(err, EngineError::AlreadyFinalized));
        assert_eq!(quiz.score(), 1.0);
        assert_eq!(quiz.history().len(), 1);
    }

    #[test]
    fn failed_advance_commits_nothing() {
        // The second item cannot become a reorder challenge; advancing
        // onto it must fail without recording the finished first one, so
        // a retry can never double-count its credit.
        let items = vec![
            item("run", "chạy"),
            VocabularyItem {
                example: None,
                ..item("walk", "đi bộ")
            },
        ];
        let mut quiz =
            QuizSession::new(items, Mode::SentenceReorder, SmallRng::seed_from_u64(13)).unwrap();
        let tokens: Vec<String> = quiz
            .current()
            .unwrap()
            .challenge()
            .answer_text()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        quiz.submit(&Attempt::Reorder(tokens)).unwrap();

        for _ in 0..2 {
            let err = quiz.advance().unwrap_err();
            assert!(matches!(err, EngineError::InvalidVocabularyItem(_)));
            assert_eq!(quiz.index(), 0);
            assert_eq!(quiz.score(), 0.0);
            assert!(quiz.history().is_empty());
            assert!(quiz.current().unwrap().is_terminal());
        }
    }

    #[test]
    fn multiple_choice_run_draws_fresh_options_each_item() {
        let mut quiz = session(Mode::MultipleChoice);
        let mut answered = 0;
        loop {
            let Some(current) = quiz.current() else { break };
            let answer = current.challenge().answer_text();
            quiz.submit(&Attempt::Choice(answer)).unwrap();
            answered += 1;
            if quiz.advance().unwrap() == AdvanceOutcome::Completed {
                break;
            }
        }
        assert_eq!(answered, 5);
        assert_eq!(quiz.score(), 5.0);
        assert_eq!(quiz.history().len(), 5);
    }
}
