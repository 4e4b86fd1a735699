//! Rebuilds per-kanji readings of a word from the furigana a word page shows

use omnikanji_core::language::{is_kanji, kanji_count};
use omnikanji_core::types::{Alignment, WordPart};

/// Reading annotations as they appear in the page markup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingMarkup {
    /// One fragment per annotated kanji, in order
    pub furigana: Vec<String>,
    /// Flat ruby base/reading text, when the page uses ruby tags instead
    pub ruby: Option<RubyText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RubyText {
    pub base: String,
    pub reading: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aligned {
    pub parts: Option<Vec<WordPart>>,
    pub alignment: Alignment,
}

/// Split `full_word` into kana runs and single kanji carrying their reading.
///
/// Furigana fragments are used when there is exactly one per kanji. Otherwise
/// ruby text is tried, which must hold exactly one reading char per kanji.
/// If neither fits, the whole word becomes one part without a reading.
pub fn align(full_word: &str, markup: &ReadingMarkup) -> Aligned {
    if full_word.is_empty() {
        return Aligned {
            parts: None,
            alignment: Alignment::Degraded,
        };
    }

    let kanji = kanji_count(full_word);

    if markup.furigana.len() == kanji {
        return Aligned {
            parts: Some(split(full_word, &markup.furigana)),
            alignment: Alignment::Furigana,
        };
    }

    if let Some(readings) = markup.ruby.as_ref().and_then(|ruby| ruby_readings(ruby, kanji)) {
        return Aligned {
            parts: Some(split(full_word, &readings)),
            alignment: Alignment::Ruby,
        };
    }

    tracing::debug!(
        "Cannot align {full_word:?}: {kanji} kanji, {} furigana",
        markup.furigana.len()
    );
    Aligned {
        parts: Some(vec![WordPart::kana(full_word)]),
        alignment: Alignment::Degraded,
    }
}

fn ruby_readings(ruby: &RubyText, kanji: usize) -> Option<Vec<String>> {
    let base_len = ruby.base.chars().count();
    let readings: Vec<String> = ruby.reading.chars().map(String::from).collect();

    if readings.is_empty() || base_len != readings.len() || readings.len() != kanji {
        return None;
    }
    Some(readings)
}

fn split(full_word: &str, readings: &[String]) -> Vec<WordPart> {
    let mut parts = Vec::new();
    let mut kana = String::new();
    let mut readings = readings.iter();

    for c in full_word.chars() {
        if is_kanji(c) {
            if !kana.is_empty() {
                parts.push(WordPart::kana(std::mem::take(&mut kana)));
            }
            let reading = readings.next().cloned().unwrap_or_default();
            parts.push(WordPart::kanji(c, reading));
        } else {
            kana.push(c);
        }
    }

    if !kana.is_empty() {
        parts.push(WordPart::kana(kana));
    }

    parts
}
