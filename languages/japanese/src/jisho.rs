use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use omnikanji_core::language::is_japanese_word;
use omnikanji_core::types::{KanjiSummary, LinkedText, Meaning, WordEntry, WordPart};
use omnikanji_core::{DictionarySource, LookupError, ParseError, Transport};
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::alignment::{ReadingMarkup, RubyText, align};
use crate::html::{
    has_class, parse_url, resolve_lenient, selector, text_of, trimmed_text, within_class,
};

static WORD_CARD: LazyLock<Selector> = LazyLock::new(|| selector(".concept_light"));
static READINGS: LazyLock<Selector> =
    LazyLock::new(|| selector(".concept_light-wrapper .concept_light-readings"));
static MEANINGS: LazyLock<Selector> = LazyLock::new(|| selector(".meanings-wrapper"));
static FULL_WORD: LazyLock<Selector> = LazyLock::new(|| selector(".text"));
static FURIGANA: LazyLock<Selector> = LazyLock::new(|| selector(".furigana .kanji"));
static RUBY: LazyLock<Selector> = LazyLock::new(|| selector(".furigana ruby"));
static RUBY_BASE: LazyLock<Selector> = LazyLock::new(|| selector("rb"));
static RUBY_READING: LazyLock<Selector> = LazyLock::new(|| selector("rt"));
static MEANING_TEXT: LazyLock<Selector> = LazyLock::new(|| selector(".meaning-meaning"));
static KANJI_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| selector("#secondary .kanji_light_block"));
static KANJI_CONTENT: LazyLock<Selector> = LazyLock::new(|| selector(".kanji_light_content"));
static KANJI_LINK: LazyLock<Selector> =
    LazyLock::new(|| selector(".literal_block .character a"));
static KANJI_GLOSS: LazyLock<Selector> = LazyLock::new(|| selector(".meanings"));
static KUN: LazyLock<Selector> = LazyLock::new(|| selector(".kun"));
static ON: LazyLock<Selector> = LazyLock::new(|| selector(".on"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));

/// Jisho word search
pub struct Jisho {
    search_url: String,
    transport: Arc<dyn Transport>,
}

impl Jisho {
    pub fn new(search_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            search_url: search_url.into(),
            transport,
        }
    }

    /// `word` is appended as one percent-encoded path segment
    pub fn search_url(&self, word: &str) -> Result<String, ParseError> {
        let mut url = parse_url(&self.search_url)?;
        url.path_segments_mut()
            .map_err(|_| ParseError::InvalidLink {
                link: self.search_url.clone(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            })?
            .pop_if_empty()
            .push(word);

        Ok(url.into())
    }
}

#[async_trait]
impl DictionarySource for Jisho {
    type Entry = Option<WordEntry>;

    fn name(&self) -> &'static str {
        "jisho"
    }

    fn url(&self, word: &str) -> Option<String> {
        self.search_url(word).ok()
    }

    async fn get(&self, word: &str) -> Result<Self::Entry, LookupError> {
        let url = self.search_url(word)?;
        let body = self.transport.fetch(&url).await?;

        let Some(mut entry) = parse_word_page(&String::from_utf8_lossy(&body), &url)? else {
            tracing::debug!("No word card at {url}");
            return Ok(None);
        };

        // Some entries do not expose the word itself
        if entry.full_word.is_empty() && is_japanese_word(word) {
            entry.full_word = word.to_string();
            entry.parts = Some(vec![WordPart::kana(word)]);
        }

        Ok(Some(entry))
    }
}

/// Parse a Jisho search page.
///
/// `Ok(None)` means the page has no word card at all; a card missing its
/// readings block is a `ParseError`.
pub fn parse_word_page(html: &str, page_url: &str) -> Result<Option<WordEntry>, ParseError> {
    let base = parse_url(page_url)?;
    let document = Html::parse_document(html);

    let Some(card) = document.select(&WORD_CARD).next() else {
        return Ok(None);
    };

    let readings = card
        .select(&READINGS)
        .next()
        .ok_or(ParseError::MissingElement("word readings"))?;

    let full_word = readings
        .select(&FULL_WORD)
        .next()
        .map(trimmed_text)
        .unwrap_or_default();

    let aligned = align(&full_word, &reading_markup(readings));

    let meanings = card
        .select(&MEANINGS)
        .next()
        .map(parse_meanings)
        .unwrap_or_default();

    Ok(Some(WordEntry {
        full_word,
        parts: aligned.parts,
        alignment: aligned.alignment,
        meanings,
        source_link: page_url.to_string(),
        kanji_summaries: parse_kanji_summaries(&document, &base),
    }))
}

fn reading_markup(readings: ElementRef<'_>) -> ReadingMarkup {
    let furigana = readings.select(&FURIGANA).map(trimmed_text).collect();

    let mut base = String::new();
    let mut reading = String::new();
    for ruby in readings.select(&RUBY) {
        base.extend(ruby.select(&RUBY_BASE).map(text_of));
        reading.extend(ruby.select(&RUBY_READING).map(text_of));
    }

    let ruby = (!reading.is_empty()).then(|| RubyText {
        base: base.trim().to_string(),
        reading: reading.trim().to_string(),
    });

    ReadingMarkup { furigana, ruby }
}

/// Tag blocks label the meaning blocks that follow them, up to the next meaning
fn parse_meanings(section: ElementRef<'_>) -> Vec<Meaning> {
    let mut meanings = Vec::new();
    let mut pending_tag: Option<String> = None;

    for child in section.children().filter_map(ElementRef::wrap) {
        if has_class(child, "meaning-tags") {
            let tag = trimmed_text(child);
            pending_tag = (!tag.is_empty()).then_some(tag);
        } else if has_class(child, "meaning-wrapper") {
            let text = child
                .select(&MEANING_TEXT)
                .next()
                .map(trimmed_text)
                .unwrap_or_default();

            meanings.push(Meaning {
                text,
                tag: pending_tag.take(),
                ordinal: meanings.len() + 1,
            });
        }
    }

    meanings
}

fn parse_kanji_summaries(document: &Html, base: &Url) -> Vec<KanjiSummary> {
    let Some(block) = document.select(&KANJI_BLOCK).next() else {
        return Vec::new();
    };

    block
        .select(&KANJI_CONTENT)
        .filter_map(|content| {
            let Some(anchor) = content.select(&KANJI_LINK).next() else {
                tracing::debug!("Skipping kanji summary without a glyph link");
                return None;
            };
            let glyph = linked_text(anchor, base);

            Some(KanjiSummary {
                glyph,
                gloss: content
                    .select(&KANJI_GLOSS)
                    .next()
                    .map(trimmed_text)
                    .unwrap_or_default(),
                kun_readings: reading_links(content.select(&KUN).next(), base),
                on_readings: reading_links(content.select(&ON).next(), base),
            })
        })
        .collect()
}

/// Anchors of a reading group, skipping its "Kun:"/"On:" label
fn reading_links(group: Option<ElementRef<'_>>, base: &Url) -> Vec<LinkedText> {
    group
        .into_iter()
        .flat_map(|group| {
            group
                .select(&ANCHOR)
                .filter(move |anchor| !within_class(*anchor, "type", group))
        })
        .map(|anchor| linked_text(anchor, base))
        .collect()
}

fn linked_text(anchor: ElementRef<'_>, base: &Url) -> LinkedText {
    LinkedText {
        text: trimmed_text(anchor),
        link: anchor
            .value()
            .attr("href")
            .map(|href| resolve_lenient(base, href))
            .unwrap_or_default(),
    }
}
