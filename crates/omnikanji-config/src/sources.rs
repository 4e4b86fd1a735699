use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_JISHO_SEARCH_URL: &str = "https://jisho.org/search/";
pub const DEFAULT_KANJIDMG_BASE_URL: &str = "http://www.kanjidamage.com";

/// Where the two dictionary sources live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Word lookups are `jisho_search_url + word`
    pub jisho_search_url: String,
    /// Base for relative links found on KanjiDamage pages
    pub kanjidmg_base_url: String,
    /// Listing page the link index is built from
    pub kanjidmg_list_url: String,
}

impl SourcesConfig {
    pub fn new() -> Self {
        let jisho_search_url = env::var("JISHO_SEARCH_URL")
            .unwrap_or_else(|_| DEFAULT_JISHO_SEARCH_URL.to_string());

        let kanjidmg_base_url = env::var("KANJIDMG_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_KANJIDMG_BASE_URL.to_string());

        let kanjidmg_list_url = env::var("KANJIDMG_LIST_URL")
            .unwrap_or_else(|_| format!("{}/kanji", kanjidmg_base_url.trim_end_matches('/')));

        Self {
            jisho_search_url,
            kanjidmg_base_url,
            kanjidmg_list_url,
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            jisho_search_url: DEFAULT_JISHO_SEARCH_URL.to_string(),
            kanjidmg_base_url: DEFAULT_KANJIDMG_BASE_URL.to_string(),
            kanjidmg_list_url: format!("{DEFAULT_KANJIDMG_BASE_URL}/kanji"),
        }
    }
}
