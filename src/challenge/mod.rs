pub mod factory;

use crate::vocab::{ExampleSentence, VocabularyItem};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    TypedRecall,
    MultipleChoice,
    AudioDictation,
    SentenceReorder,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::TypedRecall => "typed",
            Mode::MultipleChoice => "choice",
            Mode::AudioDictation => "audio",
            Mode::SentenceReorder => "reorder",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "typed" => Some(Mode::TypedRecall),
            "choice" => Some(Mode::MultipleChoice),
            "audio" => Some(Mode::AudioDictation),
            "reorder" => Some(Mode::SentenceReorder),
            _ => None,
        }
    }

    /// Typed modes escalate hints across attempts; the other two allow a
    /// single submission and finish immediately.
    pub fn is_single_shot(self) -> bool {
        matches!(self, Mode::MultipleChoice | Mode::SentenceReorder)
    }

    pub fn supports_skip(self) -> bool {
        matches!(self, Mode::TypedRecall | Mode::AudioDictation)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionStatus {
    Active,
    SolvedClean,
    SolvedWithHints,
    Revealed,
}

impl CompletionStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, CompletionStatus::Active)
    }
}

/// Which side of the word pair a multiple choice question asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Prompt shows the translation, options are words.
    TranslationToWord,
    /// Prompt shows the word, options are translations.
    WordToTranslation,
}

/// Hint state for the typed modes: which target positions are visible and
/// whether the translation has been given away as a textual hint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypedState {
    pub target: Vec<char>,
    pub revealed: Vec<bool>,
    pub translation_hint: bool,
}

impl TypedState {
    pub fn new(word: &str) -> Self {
        let target: Vec<char> = word.chars().collect();
        let revealed = vec![false; target.len()];
        Self {
            target,
            revealed,
            translation_hint: false,
        }
    }

    pub fn mask(&self) -> Vec<Option<char>> {
        self.target
            .iter()
            .zip(&self.revealed)
            .map(|(&ch, &shown)| if shown { Some(ch) } else { None })
            .collect()
    }

    /// First slot still hidden, i.e. where typing should resume.
    pub fn next_slot(&self) -> Option<usize> {
        self.revealed.iter().position(|&shown| !shown)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceOption {
    pub label: char,
    pub value: String,
}

#[derive(Clone, Debug)]
pub struct ChoiceState {
    pub direction: Direction,
    pub answer: String,
    pub options: Vec<ChoiceOption>,
}

#[derive(Clone, Debug)]
pub struct ReorderState {
    pub target: Vec<String>,
    pub shuffled: Vec<String>,
}

impl ReorderState {
    pub fn target_sentence(&self) -> String {
        self.target.join(" ")
    }
}

#[derive(Clone, Debug)]
pub enum ChallengeKind {
    Typed(TypedState),
    Choice(ChoiceState),
    Reorder(ReorderState),
}

/// One question instance: immutable target plus mutable progress fields.
/// Owned exclusively by a `ChallengeSession`.
#[derive(Clone, Debug)]
pub struct Challenge {
    pub item: VocabularyItem,
    pub mode: Mode,
    pub kind: ChallengeKind,
    pub attempts: u32,
    pub mistakes: u32,
    pub status: CompletionStatus,
    pub(crate) credit: f64,
}

impl Challenge {
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Credit awarded for this challenge. Zero until a terminal state is
    /// reached; fixed afterwards.
    pub fn credit(&self) -> f64 {
        self.credit
    }

    /// The full answer as it would be shown after a reveal.
    pub fn answer_text(&self) -> String {
        match &self.kind {
            ChallengeKind::Typed(state) => state.target.iter().collect(),
            ChallengeKind::Choice(state) => state.answer.clone(),
            ChallengeKind::Reorder(state) => state.target_sentence(),
        }
    }

    /// Word the speech collaborator should pronounce, if the mode calls
    /// for audio at all.
    pub fn spoken_word(&self) -> Option<&str> {
        match (self.mode, &self.kind) {
            (Mode::AudioDictation, _) => Some(self.item.word.as_str()),
            (Mode::MultipleChoice, ChallengeKind::Choice(state))
                if state.direction == Direction::WordToTranslation =>
            {
                Some(self.item.word.as_str())
            }
            _ => None,
        }
    }

    pub fn view(&self) -> ChallengeView {
        // The example sentence is withheld until the challenge finishes.
        let example = if self.is_terminal() {
            self.item.example.clone()
        } else {
            None
        };
        match &self.kind {
            ChallengeKind::Typed(state) => ChallengeView::Typed {
                prompt: match self.mode {
                    // Dictation shows no text up front; the translation
                    // only appears as an escalated hint.
                    Mode::AudioDictation => None,
                    _ => Some(self.item.translation.clone()),
                },
                part_of_speech: self.item.part_of_speech_label().to_string(),
                mask: state.mask(),
                next_slot: state.next_slot(),
                translation_hint: state
                    .translation_hint
                    .then(|| self.item.translation.clone()),
                spoken_word: self.spoken_word().map(str::to_string),
                example,
                status: self.status,
            },
            ChallengeKind::Choice(state) => ChallengeView::Choice {
                prompt: match state.direction {
                    Direction::TranslationToWord => self.item.translation.clone(),
                    Direction::WordToTranslation => self.item.word.clone(),
                },
                options: state.options.clone(),
                spoken_word: self.spoken_word().map(str::to_string),
                example,
                status: self.status,
            },
            ChallengeKind::Reorder(state) => ChallengeView::Reorder {
                tokens: state.shuffled.clone(),
                example,
                status: self.status,
            },
        }
    }
}

/// Read-only snapshot for rendering. Copies out of the challenge so the
/// presentation layer never aliases mutable state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChallengeView {
    Typed {
        prompt: Option<String>,
        part_of_speech: String,
        mask: Vec<Option<char>>,
        next_slot: Option<usize>,
        translation_hint: Option<String>,
        spoken_word: Option<String>,
        example: Option<ExampleSentence>,
        status: CompletionStatus,
    },
    Choice {
        prompt: String,
        options: Vec<ChoiceOption>,
        spoken_word: Option<String>,
        example: Option<ExampleSentence>,
        status: CompletionStatus,
    },
    Reorder {
        tokens: Vec<String>,
        example: Option<ExampleSentence>,
        status: CompletionStatus,
    },
}

/// Render a mask the way hints are displayed: revealed characters
/// interleaved with underscores, space separated.
pub fn mask_string(mask: &[Option<char>]) -> String {
    mask.iter()
        .map(|slot| slot.map(String::from).unwrap_or_else(|| "_".to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A single user submission. Transient; only the display text may end up
/// in a history entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Attempt {
    Typed(String),
    Choice(String),
    Reorder(Vec<String>),
}

impl Attempt {
    pub fn display(&self) -> String {
        match self {
            Attempt::Typed(text) | Attempt::Choice(text) => text.clone(),
            Attempt::Reorder(tokens) => tokens.join(" "),
        }
    }
}
