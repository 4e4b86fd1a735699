//! Japanese script classification

const KANJI_START: u32 = 0x4e00;
const KANJI_END: u32 = 0x9faf;

const JAPANESE_START: u32 = 0x3000;
const JAPANESE_END: u32 = 0x9faf;

/// Which script a query is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Already in the dictionary's script, look it up directly
    Japanese,
    /// Needs resolving to a Japanese word first (e.g. English)
    Foreign,
}

impl Script {
    /// Whitespace does not count; NFKC turns the ideographic space into an
    /// ASCII one, and a query split by it is still Japanese.
    pub fn classify(query: &str) -> Self {
        let mut chars = query.chars().filter(|c| !c.is_whitespace()).peekable();
        if chars.peek().is_some() && chars.all(is_japanese) {
            Script::Japanese
        } else {
            Script::Foreign
        }
    }
}

pub fn is_japanese(c: char) -> bool {
    (JAPANESE_START..=JAPANESE_END).contains(&(c as u32))
}

pub fn is_kanji(c: char) -> bool {
    (KANJI_START..=KANJI_END).contains(&(c as u32))
}

/// Non-empty and written entirely in Japanese script
pub fn is_japanese_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_japanese)
}

pub fn kanji_count(word: &str) -> usize {
    word.chars().filter(|&c| is_kanji(c)).count()
}

/// Distinct kanji of `word` in first-occurrence order
pub fn extract_kanji(word: &str) -> Vec<char> {
    let mut kanji: Vec<char> = Vec::new();
    for c in word.chars().filter(|&c| is_kanji(c)) {
        if !kanji.contains(&c) {
            kanji.push(c);
        }
    }
    kanji
}
