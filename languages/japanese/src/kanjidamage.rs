use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use omnikanji_core::types::{Glyph, KanjiDetail, RadicalEntry};
use omnikanji_core::{DictionarySource, LinkIndexHandle, LookupError, ParseError, Transport};
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::html::{
    next_element_sibling, parse_url, resolve, selector, text_of, trim_decorations, trimmed_text,
};

static CONTAINER: LazyLock<Selector> = LazyLock::new(|| selector(".container"));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector(".row"));
static GLYPH: LazyLock<Selector> = LazyLock::new(|| selector("h1 .kanji_character"));
static TRANSLATION: LazyLock<Selector> = LazyLock::new(|| selector("h1 .translation"));
// Current layout and the older bootstrap-2 one
static RADICALS: LazyLock<Selector> = LazyLock::new(|| selector(".col-md-8, div.span8"));
static IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("img"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static SECTION_HEADING: LazyLock<Selector> = LazyLock::new(|| selector("h2"));

const READING_NOTES_LABEL: &str = "Onyomi";
const MNEMONIC_LABEL: &str = "Mnemonic";

/// KanjiDamage kanji pages, located through the link index
pub struct KanjiDamage {
    base_url: String,
    links: LinkIndexHandle,
    transport: Arc<dyn Transport>,
}

impl KanjiDamage {
    pub fn new(
        base_url: impl Into<String>,
        links: LinkIndexHandle,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            links,
            transport,
        }
    }
}

#[async_trait]
impl DictionarySource for KanjiDamage {
    type Entry = KanjiDetail;

    fn name(&self) -> &'static str {
        "kanjidamage"
    }

    fn url(&self, glyph: &str) -> Option<String> {
        self.links.snapshot().get(glyph).map(str::to_string)
    }

    async fn get(&self, glyph: &str) -> Result<Self::Entry, LookupError> {
        let url = self.url(glyph).ok_or_else(|| LookupError::NotFound {
            glyph: glyph.to_string(),
        })?;

        let body = self.transport.fetch(&url).await?;
        let page = parse_detail_page(&String::from_utf8_lossy(&body), &url, &self.base_url)?;

        Ok(page.resolve(self.transport.as_ref()).await?)
    }
}

/// Where a glyph comes from before any image has been fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphSource {
    Text(String),
    Image(String),
}

impl GlyphSource {
    async fn resolve(self, transport: &dyn Transport) -> Result<Glyph, ParseError> {
        match self {
            GlyphSource::Text(text) => Ok(Glyph::Text(text)),
            GlyphSource::Image(url) => {
                tracing::debug!("Glyph only available as image: {url}");
                match transport.fetch(&url).await {
                    Ok(bytes) => Ok(Glyph::Image(STANDARD.encode(bytes))),
                    Err(source) => Err(ParseError::Image { url, source }),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadicalSource {
    pub glyph: GlyphSource,
    pub gloss: String,
    pub link: String,
}

/// A parsed detail page whose image glyphs are not fetched yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPage {
    pub glyph: GlyphSource,
    pub gloss: String,
    pub source_link: String,
    pub radicals: Option<Vec<RadicalSource>>,
    pub reading_notes: Option<String>,
    pub mnemonic: Option<String>,
}

impl DetailPage {
    /// Fetch every image glyph and build the final record
    pub async fn resolve(self, transport: &dyn Transport) -> Result<KanjiDetail, ParseError> {
        let glyph = self.glyph.resolve(transport).await?;

        let radicals = match self.radicals {
            Some(sources) => {
                let mut radicals = Vec::with_capacity(sources.len());
                for radical in sources {
                    radicals.push(RadicalEntry {
                        glyph: radical.glyph.resolve(transport).await?,
                        gloss: radical.gloss,
                        source_link: radical.link,
                    });
                }
                Some(radicals)
            }
            None => None,
        };

        Ok(KanjiDetail {
            glyph,
            gloss: self.gloss,
            source_link: self.source_link,
            radicals,
            reading_notes: self.reading_notes,
            mnemonic: self.mnemonic,
        })
    }
}

/// Parse a KanjiDamage kanji page; relative links resolve against `base_url`
pub fn parse_detail_page(
    html: &str,
    page_url: &str,
    base_url: &str,
) -> Result<DetailPage, ParseError> {
    let base = parse_url(base_url)?;
    let document = Html::parse_document(html);

    let container = document
        .select(&CONTAINER)
        .last()
        .ok_or(ParseError::MissingElement("container"))?;
    let rows: Vec<ElementRef<'_>> = container.select(&ROW).collect();

    let header = rows
        .get(1)
        .copied()
        .ok_or(ParseError::MissingElement("header row"))?;

    let glyph_node = header
        .select(&GLYPH)
        .next()
        .ok_or(ParseError::MissingElement("kanji character"))?;
    let gloss = header
        .select(&TRANSLATION)
        .next()
        .map(trimmed_text)
        .ok_or(ParseError::MissingElement("translation"))?;

    let radicals = match header.select(&RADICALS).next() {
        Some(region) => parse_radicals(region, &base)?,
        None => None,
    };

    let content = rows.get(2).copied();

    Ok(DetailPage {
        glyph: glyph_source(glyph_node, &base)?,
        gloss,
        source_link: page_url.to_string(),
        radicals,
        reading_notes: content.and_then(|c| labeled_section(c, READING_NOTES_LABEL)),
        mnemonic: content.and_then(|c| labeled_section(c, MNEMONIC_LABEL)),
    })
}

/// Literal text if there is any, otherwise the image standing in for it
fn glyph_source(node: ElementRef<'_>, base: &Url) -> Result<GlyphSource, ParseError> {
    let text = trimmed_text(node);
    if !text.is_empty() {
        return Ok(GlyphSource::Text(text));
    }

    let image = if node.value().name() == "img" {
        Some(node)
    } else {
        node.select(&IMAGE).next()
    };

    match image.and_then(|img| img.value().attr("src")) {
        Some(src) if !src.trim().is_empty() => Ok(GlyphSource::Image(resolve(base, src.trim())?)),
        _ => Err(ParseError::MissingGlyph),
    }
}

/// The page lists radicals as links interleaved with loose gloss text and does
/// not tie them together, so the n-th non-empty gloss goes with the n-th link.
fn parse_radicals(
    region: ElementRef<'_>,
    base: &Url,
) -> Result<Option<Vec<RadicalSource>>, ParseError> {
    let anchors: Vec<ElementRef<'_>> = region
        .select(&ANCHOR)
        .filter(|anchor| !inside_heading(*anchor, region))
        .collect();

    let mut radicals = Vec::new();
    for child in region.children() {
        let gloss = if let Some(text) = child.value().as_text() {
            trim_decorations(text).to_string()
        } else if let Some(el) = ElementRef::wrap(child) {
            if matches!(el.value().name(), "a" | "h1") {
                continue;
            }
            trim_decorations(&text_of(el)).to_string()
        } else {
            continue;
        };

        if gloss.is_empty() {
            continue;
        }

        let Some(anchor) = anchors.get(radicals.len()).copied() else {
            tracing::debug!("Gloss {gloss:?} has no radical link left");
            break;
        };

        let link = match anchor.value().attr("href") {
            Some(href) => resolve(base, href)?,
            None => String::new(),
        };

        radicals.push(RadicalSource {
            glyph: glyph_source(anchor, base)?,
            gloss,
            link,
        });
    }

    Ok((!radicals.is_empty()).then_some(radicals))
}

fn inside_heading(el: ElementRef<'_>, region: ElementRef<'_>) -> bool {
    el.ancestors()
        .take_while(|node| node.id() != region.id())
        .filter_map(ElementRef::wrap)
        .any(|e| e.value().name() == "h1")
}

/// Text after the `h2` whose title contains `label`
fn labeled_section(content: ElementRef<'_>, label: &str) -> Option<String> {
    let heading = content
        .select(&SECTION_HEADING)
        .find(|h| text_of(*h).contains(label))?;

    let text = trim_decorations(&text_of(next_element_sibling(heading)?)).to_string();
    (!text.is_empty()).then_some(text)
}
