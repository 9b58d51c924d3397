use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
#[cfg(feature = "network")]
use serde::Deserialize;

use crate::error::EngineError;
use crate::vocab::VocabularyItem;

const BUNDLED_VOCABULARY: &str = include_str!("../../assets/vocabulary-en-vi.json");

/// One-shot source of vocabulary items that seeds a quiz session. An empty
/// result is valid (the session starts completed); transport or parse
/// failures surface as `ProviderUnavailable`.
pub trait VocabularyProvider {
    fn fetch(&mut self, count: usize) -> Result<Vec<VocabularyItem>, EngineError>;
}

#[cfg(feature = "network")]
#[derive(Deserialize)]
struct FetchResponse {
    #[serde(default)]
    data: Vec<VocabularyItem>,
}

/// Offline provider backed by the word list shipped in `assets/`. Draws a
/// random subset so repeated sessions see different words.
pub struct BundledProvider {
    items: Vec<VocabularyItem>,
    rng: SmallRng,
}

impl BundledProvider {
    pub fn load(rng: SmallRng) -> Result<Self, EngineError> {
        let items: Vec<VocabularyItem> = serde_json::from_str(BUNDLED_VOCABULARY)
            .map_err(|e| EngineError::ProviderUnavailable(format!("bundled list: {e}")))?;
        Ok(Self { items, rng })
    }
}

impl VocabularyProvider for BundledProvider {
    fn fetch(&mut self, count: usize) -> Result<Vec<VocabularyItem>, EngineError> {
        let mut items = self.items.clone();
        items.shuffle(&mut self.rng);
        items.truncate(count);
        Ok(items)
    }
}

/// Remote provider hitting the vocabulary API: POST `{ "count": n }`,
/// response `{ "data": [...] }`.
#[cfg(feature = "network")]
pub struct HttpProvider {
    url: String,
}

#[cfg(feature = "network")]
impl HttpProvider {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

#[cfg(feature = "network")]
impl VocabularyProvider for HttpProvider {
    fn fetch(&mut self, count: usize) -> Result<Vec<VocabularyItem>, EngineError> {
        let unavailable = |e: reqwest::Error| EngineError::ProviderUnavailable(e.to_string());
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(unavailable)?;
        let response = client
            .post(&self.url)
            .json(&serde_json::json!({ "count": count }))
            .send()
            .map_err(unavailable)?;
        if !response.status().is_success() {
            return Err(EngineError::ProviderUnavailable(format!(
                "server returned {}",
                response.status()
            )));
        }
        let body: FetchResponse = response.json().map_err(unavailable)?;
        Ok(body.data)
    }
}
