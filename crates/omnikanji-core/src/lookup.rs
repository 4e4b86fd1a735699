use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;

use crate::dictionary::DictionarySource;
use crate::error::LookupError;
use crate::language::{Script, extract_kanji};
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::types::{AggregateResult, KanjiDetail, WordEntry};

/// Looks a query up in a word dictionary and enriches every kanji it contains
/// with its detail page.
///
/// Japanese queries fan out to the word source and all kanji sources at once.
/// Anything else is first resolved through the word source, and only the kanji
/// of the resolved word are looked up afterwards.
pub struct Aggregator<W, K> {
    words: Arc<W>,
    kanji: Arc<K>,
    preprocessor: DefaultPreprocessor,
    task_timeout: Option<Duration>,
}

impl<W, K> Aggregator<W, K>
where
    W: DictionarySource<Entry = Option<WordEntry>>,
    K: DictionarySource<Entry = KanjiDetail>,
{
    pub fn new(words: W, kanji: K) -> Self {
        Self::from_shared(Arc::new(words), Arc::new(kanji))
    }

    pub fn from_shared(words: Arc<W>, kanji: Arc<K>) -> Self {
        Self {
            words,
            kanji,
            preprocessor: DefaultPreprocessor,
            task_timeout: None,
        }
    }

    /// Deadline applied to every fetch task, `None` waits forever
    pub fn with_task_timeout(mut self, task_timeout: Option<Duration>) -> Self {
        self.task_timeout = task_timeout;
        self
    }

    /// Returns only once every task it started has finished
    pub async fn lookup(&self, query: &str) -> AggregateResult {
        let word = self.preprocessor.process(query);
        if word.is_empty() {
            return AggregateResult::failed(query, "empty query");
        }

        match Script::classify(&word) {
            Script::Japanese => self.lookup_direct(query, &word).await,
            Script::Foreign => self.lookup_indirect(query, &word).await,
        }
    }

    async fn lookup_direct(&self, query: &str, word: &str) -> AggregateResult {
        let targets = extract_kanji(word);
        tracing::debug!("Direct lookup of {word:?}, {} kanji", targets.len());

        let (entry, kanji_details) = tokio::join!(self.fetch_word(word), self.fetch_kanji(&targets));

        let mut result = AggregateResult::new(query);
        result.kanji_details = kanji_details;
        match entry {
            Ok(entry) => result.word = entry,
            Err(e) => {
                tracing::warn!("{} lookup of {word:?} failed: {e}", self.words.name());
                result.error = Some(e.to_string());
            }
        }

        result
    }

    async fn lookup_indirect(&self, query: &str, word: &str) -> AggregateResult {
        tracing::debug!("Resolving {word:?} before looking up kanji");

        let mut entry = match self.fetch_word(word).await {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                tracing::info!("No {} entry for {word:?}", self.words.name());
                let mut result = AggregateResult::new(query);
                result.resolved_word_link = self.words.url(word);
                return result;
            }
            Err(e) => {
                tracing::warn!("{} lookup of {word:?} failed: {e}", self.words.name());
                return AggregateResult::failed(query, e);
            }
        };

        let mut result = AggregateResult::new(query);
        result.resolved_word_link = self.words.url(word);

        if !entry.full_word.is_empty()
            && let Some(link) = self.words.url(&entry.full_word)
        {
            entry.source_link = link;
        }

        let targets = extract_kanji(&entry.full_word);
        result.kanji_details = self.fetch_kanji(&targets).await;
        result.word = Some(entry);

        result
    }

    async fn fetch_word(&self, word: &str) -> Result<Option<WordEntry>, LookupError> {
        with_deadline(
            self.task_timeout,
            self.words.name(),
            word,
            self.words.get(word),
        )
        .await
    }

    /// One task per kanji; results land in the slot of their kanji, failed slots are dropped
    async fn fetch_kanji(&self, targets: &[char]) -> Vec<KanjiDetail> {
        if targets.is_empty() {
            return Vec::new();
        }

        let mut slots: Vec<Option<KanjiDetail>> = std::iter::repeat_with(|| None)
            .take(targets.len())
            .collect();

        let mut tasks = JoinSet::new();
        for (slot, kanji) in targets.iter().enumerate() {
            let source = Arc::clone(&self.kanji);
            let task_timeout = self.task_timeout;
            let glyph = kanji.to_string();

            tasks.spawn(async move {
                let result = with_deadline(task_timeout, source.name(), &glyph, source.get(&glyph)).await;
                (slot, glyph, result)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((slot, _, Ok(detail))) => slots[slot] = Some(detail),
                Ok((_, glyph, Err(e))) => {
                    tracing::warn!("{} lookup of {glyph:?} failed: {e}", self.kanji.name());
                }
                Err(e) => {
                    let e = LookupError::TaskFailed(e.to_string());
                    tracing::error!("{} {e}", self.kanji.name());
                }
            }
        }

        slots.into_iter().flatten().collect()
    }
}

async fn with_deadline<T>(
    deadline: Option<Duration>,
    dictionary: &'static str,
    query: &str,
    task: impl Future<Output = Result<T, LookupError>>,
) -> Result<T, LookupError> {
    match deadline {
        Some(after) => tokio::time::timeout(after, task)
            .await
            .unwrap_or_else(|_| {
                Err(LookupError::Timeout {
                    dictionary,
                    query: query.to_string(),
                    after,
                })
            }),
        None => task.await,
    }
}
