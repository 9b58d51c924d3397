use crate::challenge::{Mode, TypedState};

/// What a failed attempt unlocked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintStep {
    /// More information was revealed; the challenge stays active.
    Escalated,
    /// Hints are used up: the whole answer is revealed and the challenge
    /// must go terminal.
    Exhausted,
}

/// Hint escalation for the typed modes, keyed by how many mistakes had
/// been made before this one (0-based). Pure: returns a new state and
/// never hides a character that was already revealed.
///
/// TypedRecall reveals one character per mistake, left to right, and gives
/// the whole word away on the fourth. Dictation is shorter: first the
/// leading character, then the translation as a textual hint, then the
/// full word.
pub fn apply(mode: Mode, state: &TypedState, mistake_count: u32) -> (TypedState, HintStep) {
    debug_assert!(!mode.is_single_shot(), "single-shot modes have no hints");
    let mut next = state.clone();
    match mode {
        Mode::TypedRecall => match mistake_count {
            0..=2 => {
                let pos = mistake_count as usize;
                if pos < next.revealed.len() {
                    next.revealed[pos] = true;
                }
                (next, HintStep::Escalated)
            }
            _ => {
                next.revealed.fill(true);
                (next, HintStep::Exhausted)
            }
        },
        Mode::AudioDictation => match mistake_count {
            0 => {
                if let Some(first) = next.revealed.first_mut() {
                    *first = true;
                }
                (next, HintStep::Escalated)
            }
            1 => {
                next.translation_hint = true;
                (next, HintStep::Escalated)
            }
            _ => {
                next.revealed.fill(true);
                (next, HintStep::Exhausted)
            }
        },
        Mode::MultipleChoice | Mode::SentenceReorder => (next, HintStep::Exhausted),
    }
}
