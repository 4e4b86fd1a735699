use serde::Serialize;

/// How the per-character readings of a word were reconstructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// One furigana fragment per kanji
    Furigana,
    /// Flat ruby base/reading strings, one reading char per kanji
    Ruby,
    /// Readings could not be matched to kanji, the word is a single part
    Degraded,
}

/// A dictionary word card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub full_word: String,
    /// Concatenated `text` of all parts equals `full_word`
    pub parts: Option<Vec<WordPart>>,
    pub alignment: Alignment,
    pub meanings: Vec<Meaning>,
    pub source_link: String,
    pub kanji_summaries: Vec<KanjiSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordPart {
    pub text: String,
    /// Empty for kana runs
    pub reading: String,
}

impl WordPart {
    pub fn kana(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reading: String::new(),
        }
    }

    pub fn kanji(text: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reading: reading.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meaning {
    pub text: String,
    pub tag: Option<String>,
    /// 1-based, consecutive within one entry
    pub ordinal: usize,
}

/// Text paired with the page it links to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedText {
    pub text: String,
    pub link: String,
}

/// Short kanji card embedded in a word page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KanjiSummary {
    pub glyph: LinkedText,
    pub gloss: String,
    pub kun_readings: Vec<LinkedText>,
    pub on_readings: Vec<LinkedText>,
}

/// A character either as text or, when the source only has a picture of it,
/// as a base64 encoded image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Glyph {
    #[serde(rename = "glyphText")]
    Text(String),
    #[serde(rename = "glyphImage")]
    Image(String),
}

impl Glyph {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Glyph::Text(text) => Some(text),
            Glyph::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&str> {
        match self {
            Glyph::Text(_) => None,
            Glyph::Image(encoded) => Some(encoded),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KanjiDetail {
    #[serde(flatten)]
    pub glyph: Glyph,
    pub gloss: String,
    pub source_link: String,
    pub radicals: Option<Vec<RadicalEntry>>,
    pub reading_notes: Option<String>,
    pub mnemonic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadicalEntry {
    #[serde(flatten)]
    pub glyph: Glyph,
    pub gloss: String,
    pub source_link: String,
}

/// Everything one lookup produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub query: String,
    /// Only set when the query had to be resolved from a foreign script
    pub resolved_word_link: Option<String>,
    pub word: Option<WordEntry>,
    /// In first-occurrence order of each kanji in the driving string
    pub kanji_details: Vec<KanjiDetail>,
    pub error: Option<String>,
}

impl AggregateResult {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn failed(query: impl Into<String>, error: impl ToString) -> Self {
        Self {
            query: query.into(),
            error: Some(error.to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_serializes_as_exclusive_field() {
        let detail = KanjiDetail {
            glyph: Glyph::Image("aGVsbG8=".to_string()),
            gloss: "older brother".to_string(),
            source_link: "http://www.kanjidamage.com/kanji/1".to_string(),
            radicals: None,
            reading_notes: None,
            mnemonic: None,
        };

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["glyphImage"], "aGVsbG8=");
        assert!(json.get("glyphText").is_none());
        assert_eq!(json["sourceLink"], "http://www.kanjidamage.com/kanji/1");
    }
}
