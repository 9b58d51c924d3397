pub mod provider;

use serde::{Deserialize, Serialize};

/// One sentence pair illustrating a vocabulary item in context.
/// The aliases accept the field names used by the original vocabulary API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleSentence {
    #[serde(alias = "english")]
    pub source_text: String,
    #[serde(alias = "vietnamese")]
    pub translated_text: String,
}

/// A single word pair as supplied by the vocabulary provider. Read-only to
/// the engine; challenges copy what they need out of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    #[serde(alias = "englishWord")]
    pub word: String,
    #[serde(alias = "vietnameseMeaning")]
    pub translation: String,
    #[serde(default, alias = "partOfSpeech")]
    pub part_of_speech: Option<String>,
    #[serde(default, alias = "exampleSentence")]
    pub example: Option<ExampleSentence>,
}

impl VocabularyItem {
    pub fn part_of_speech_label(&self) -> &str {
        self.part_of_speech.as_deref().unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_original_api_field_names() {
        let json = r#"{
            "englishWord": "run",
            "vietnameseMeaning": "chạy",
            "partOfSpeech": "verb",
            "exampleSentence": {
                "english": "I run every morning.",
                "vietnamese": "Tôi chạy mỗi sáng."
            }
        }"#;
        let item: VocabularyItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.word, "run");
        assert_eq!(item.translation, "chạy");
        assert_eq!(item.part_of_speech_label(), "verb");
        assert_eq!(
            item.example.unwrap().source_text,
            "I run every morning."
        );
    }

    #[test]
    fn parses_canonical_field_names() {
        let json = r#"{
            "word": "book",
            "translation": "sách",
            "example": { "sourceText": "I read a book.", "translatedText": "Tôi đọc một cuốn sách." }
        }"#;
        let item: VocabularyItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.word, "book");
        assert_eq!(item.part_of_speech_label(), "unknown");
        assert!(item.example.is_some());
    }
}
