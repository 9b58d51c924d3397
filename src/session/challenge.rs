use crate::challenge::{
    Attempt, Challenge, ChallengeKind, ChallengeView, CompletionStatus, Mode,
};
use crate::engine::{hint, scoring};
use crate::error::EngineError;

/// Result of one submission against the active challenge.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Answer matched; the challenge is terminal and `credit` was fixed.
    Correct {
        credit: f64,
        status: CompletionStatus,
    },
    /// Answer was wrong but hints remain. The snapshot already includes
    /// the newly revealed information.
    Retry { view: ChallengeView },
    /// Answer was wrong and hints are exhausted (or the mode allows only
    /// one submission). Carries the revealed answer.
    Failed { answer: String },
}

/// State machine driving one challenge. Owns the challenge exclusively;
/// every submission is handled to completion before the next one.
#[derive(Debug)]
pub struct ChallengeSession {
    challenge: Challenge,
    last_attempt: Option<String>,
}

impl ChallengeSession {
    pub fn new(challenge: Challenge) -> Self {
        Self {
            challenge,
            last_attempt: None,
        }
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    pub fn mode(&self) -> Mode {
        self.challenge.mode
    }

    pub fn status(&self) -> CompletionStatus {
        self.challenge.status
    }

    pub fn is_terminal(&self) -> bool {
        self.challenge.is_terminal()
    }

    pub fn credit(&self) -> f64 {
        self.challenge.credit()
    }

    /// Text of the most recent submission, kept for the history entry.
    pub fn last_attempt(&self) -> Option<&str> {
        self.last_attempt.as_deref()
    }

    /// Read-only snapshot for rendering.
    pub fn view(&self) -> ChallengeView {
        self.challenge.view()
    }

    /// Validate one attempt. Correct answers finalize the challenge with
    /// clean or hinted credit; wrong answers escalate hints until they are
    /// exhausted, which finalizes with zero credit. Submissions after a
    /// terminal state are refused.
    pub fn submit(&mut self, attempt: &Attempt) -> Result<Outcome, EngineError> {
        if self.challenge.is_terminal() {
            return Err(EngineError::AlreadyFinalized);
        }
        let correct = self.matches(attempt)?;
        self.challenge.attempts += 1;
        self.last_attempt = Some(attempt.display());

        if correct {
            let status = if self.challenge.mistakes == 0 {
                CompletionStatus::SolvedClean
            } else {
                CompletionStatus::SolvedWithHints
            };
            return Ok(self.finalize(status));
        }

        if self.challenge.mode.is_single_shot() {
            self.challenge.mistakes += 1;
            return Ok(self.fail());
        }

        // Typed modes: escalate before counting the mistake so the hint
        // index matches the 0-based mistake count.
        let ChallengeKind::Typed(state) = &self.challenge.kind else {
            return Err(EngineError::AttemptModeMismatch);
        };
        let (next_state, step) = hint::apply(self.challenge.mode, state, self.challenge.mistakes);
        self.challenge.kind = ChallengeKind::Typed(next_state);
        self.challenge.mistakes += 1;
        match step {
            hint::HintStep::Escalated => Ok(Outcome::Retry {
                view: self.challenge.view(),
            }),
            hint::HintStep::Exhausted => Ok(self.fail()),
        }
    }

    fn matches(&self, attempt: &Attempt) -> Result<bool, EngineError> {
        match (&self.challenge.kind, attempt) {
            (ChallengeKind::Typed(state), Attempt::Typed(text)) => {
                let target: String = state.target.iter().collect();
                Ok(text.trim().to_lowercase() == target.to_lowercase())
            }
            (ChallengeKind::Choice(state), Attempt::Choice(value)) => Ok(value == &state.answer),
            (ChallengeKind::Reorder(state), Attempt::Reorder(tokens)) => {
                Ok(tokens.join(" ") == state.target_sentence())
            }
            _ => Err(EngineError::AttemptModeMismatch),
        }
    }

    /// Fix the terminal state and compute credit exactly once.
    fn finalize(&mut self, status: CompletionStatus) -> Outcome {
        self.challenge.status = status;
        self.challenge.credit = scoring::credit(self.challenge.mode, status);
        Outcome::Correct {
            credit: self.challenge.credit,
            status,
        }
    }

    fn fail(&mut self) -> Outcome {
        if let ChallengeKind::Typed(state) = &mut self.challenge.kind {
            state.revealed.fill(true);
        }
        self.challenge.status = CompletionStatus::Revealed;
        self.challenge.credit = scoring::credit(self.challenge.mode, CompletionStatus::Revealed);
        Outcome::Failed {
            answer: self.challenge.answer_text(),
        }
    }
}
