use crate::challenge::{CompletionStatus, Mode};

/// Credit awarded when a challenge reaches the given terminal state.
/// Typed modes give half credit once any hint was needed; the single-shot
/// modes are all or nothing. Active challenges score zero.
pub fn credit(mode: Mode, status: CompletionStatus) -> f64 {
    match (mode, status) {
        (_, CompletionStatus::Active) => 0.0,
        (_, CompletionStatus::SolvedClean) => 1.0,
        (Mode::TypedRecall | Mode::AudioDictation, CompletionStatus::SolvedWithHints) => 0.5,
        (_, CompletionStatus::SolvedWithHints) => 1.0,
        (_, CompletionStatus::Revealed) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_credit_table() {
        for mode in [Mode::TypedRecall, Mode::AudioDictation] {
            assert_eq!(credit(mode, CompletionStatus::SolvedClean), 1.0);
            assert_eq!(credit(mode, CompletionStatus::SolvedWithHints), 0.5);
            assert_eq!(credit(mode, CompletionStatus::Revealed), 0.0);
            assert_eq!(credit(mode, CompletionStatus::Active), 0.0);
        }
    }

    #[test]
    fn single_shot_credit_is_all_or_nothing() {
        for mode in [Mode::MultipleChoice, Mode::SentenceReorder] {
            assert_eq!(credit(mode, CompletionStatus::SolvedClean), 1.0);
            assert_eq!(credit(mode, CompletionStatus::Revealed), 0.0);
        }
    }
}
