use rand::Rng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::challenge::{
    Challenge, ChallengeKind, ChoiceOption, ChoiceState, CompletionStatus, Direction, Mode,
    ReorderState, TypedState,
};
use crate::error::EngineError;
use crate::vocab::VocabularyItem;

const DISTRACTOR_COUNT: usize = 3;
const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Build a challenge for one vocabulary item. `pool` is the full session
/// item list; multiple choice draws its distractors from it. All
/// randomness (question direction, distractor draw, shuffles) comes from
/// the caller's rng so tests can seed it.
pub fn create(
    item: &VocabularyItem,
    mode: Mode,
    pool: &[VocabularyItem],
    rng: &mut SmallRng,
) -> Result<Challenge, EngineError> {
    let kind = match mode {
        Mode::TypedRecall | Mode::AudioDictation => typed_kind(item)?,
        Mode::MultipleChoice => choice_kind(item, pool, rng)?,
        Mode::SentenceReorder => reorder_kind(item, rng)?,
    };
    Ok(Challenge {
        item: item.clone(),
        mode,
        kind,
        attempts: 0,
        mistakes: 0,
        status: CompletionStatus::Active,
        credit: 0.0,
    })
}

fn typed_kind(item: &VocabularyItem) -> Result<ChallengeKind, EngineError> {
    if item.word.is_empty() {
        return Err(EngineError::InvalidVocabularyItem(
            "empty target word".to_string(),
        ));
    }
    Ok(ChallengeKind::Typed(TypedState::new(&item.word)))
}

fn choice_kind(
    item: &VocabularyItem,
    pool: &[VocabularyItem],
    rng: &mut SmallRng,
) -> Result<ChallengeKind, EngineError> {
    if item.word.is_empty() || item.translation.is_empty() {
        return Err(EngineError::InvalidVocabularyItem(
            "empty word or translation".to_string(),
        ));
    }

    let direction = if rng.gen_bool(0.5) {
        Direction::TranslationToWord
    } else {
        Direction::WordToTranslation
    };
    let value_of = |it: &VocabularyItem| match direction {
        Direction::TranslationToWord => it.word.clone(),
        Direction::WordToTranslation => it.translation.clone(),
    };
    let answer = value_of(item);

    // Candidate distractors: same-direction values from the rest of the
    // pool, deduplicated, never colliding with the answer.
    let mut candidates: Vec<String> = Vec::new();
    for other in pool {
        if other.word == item.word {
            continue;
        }
        let value = value_of(other);
        if value != answer && !value.is_empty() && !candidates.contains(&value) {
            candidates.push(value);
        }
    }
    if candidates.len() < DISTRACTOR_COUNT {
        return Err(EngineError::InsufficientPool {
            available: candidates.len(),
        });
    }
    candidates.shuffle(rng);
    candidates.truncate(DISTRACTOR_COUNT);

    let mut values = candidates;
    values.push(answer.clone());
    values.shuffle(rng);
    let options = OPTION_LABELS
        .iter()
        .zip(values)
        .map(|(&label, value)| ChoiceOption { label, value })
        .collect();

    Ok(ChallengeKind::Choice(ChoiceState {
        direction,
        answer,
        options,
    }))
}

fn reorder_kind(item: &VocabularyItem, rng: &mut SmallRng) -> Result<ChallengeKind, EngineError> {
    let sentence = item
        .example
        .as_ref()
        .map(|ex| ex.source_text.as_str())
        .unwrap_or("");
    let target: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
    if target.is_empty() {
        return Err(EngineError::InvalidVocabularyItem(
            "no example sentence to reorder".to_string(),
        ));
    }

    let mut shuffled = target.clone();
    shuffled.shuffle(rng);
    // When another arrangement exists the presentation order must differ
    // from the solution. Rotating a non-uniform multiset always changes it.
    let has_alternative = target.len() > 1 && target.iter().any(|t| t != &target[0]);
    if has_alternative && shuffled == target {
        shuffled.rotate_left(1);
    }

    Ok(ChallengeKind::Reorder(ReorderState { target, shuffled }))
}
