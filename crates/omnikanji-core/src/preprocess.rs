use unicode_normalization::UnicodeNormalization;

/// Turns raw user input into the string that gets looked up
pub trait Preprocessor {
    fn process(&self, query: &str) -> String;
}

/// NFKC-folds the query, drops control characters and collapses whitespace
/// runs into single spaces. Half-width kana and full-width latin come out in
/// the form the dictionary pages use.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPreprocessor;

impl Preprocessor for DefaultPreprocessor {
    fn process(&self, query: &str) -> String {
        let folded: String = query
            .nfkc()
            .filter(|c| !c.is_control() || c.is_whitespace())
            .collect();

        // NFKC maps the ideographic space to U+0020, so this also splits on it
        folded.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
