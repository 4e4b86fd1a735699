use std::sync::LazyLock;

use omnikanji_core::{LinkIndex, LookupError, ParseError, Transport};
use scraper::{Html, Selector};

use crate::html::{parse_url, resolve, selector, trimmed_text};

static LISTING_ROW: LazyLock<Selector> = LazyLock::new(|| selector(".container .row table tr"));
static GLYPH_LINK: LazyLock<Selector> = LazyLock::new(|| selector("td:nth-child(3) a"));

/// Fetch the KanjiDamage listing and index every kanji it links to.
///
/// Transport failures are fatal; a listing whose layout changed yields an
/// empty or partial index instead of an error.
pub async fn load_link_index(
    transport: &dyn Transport,
    list_url: &str,
    base_url: &str,
) -> Result<LinkIndex, LookupError> {
    tracing::info!("Loading kanji links from {list_url}");

    let body = transport.fetch(list_url).await?;
    let index = parse_link_index(&String::from_utf8_lossy(&body), base_url)?;

    if index.is_empty() {
        tracing::warn!("Kanji listing at {list_url} yielded no links");
    } else {
        tracing::info!("Indexed {} kanji", index.len());
    }

    Ok(index)
}

/// Rows without a usable link are skipped
pub fn parse_link_index(html: &str, base_url: &str) -> Result<LinkIndex, ParseError> {
    let base = parse_url(base_url)?;
    let document = Html::parse_document(html);

    let index = document
        .select(&LISTING_ROW)
        .filter_map(|row| {
            let anchor = row.select(&GLYPH_LINK).next()?;
            let href = anchor.value().attr("href")?;
            let glyph = trimmed_text(anchor);
            if glyph.is_empty() {
                return None;
            }

            match resolve(&base, href) {
                Ok(link) => Some((glyph, link)),
                Err(e) => {
                    tracing::debug!("Skipping {glyph:?}: {e}");
                    None
                }
            }
        })
        .collect();

    Ok(index)
}
