//! Small helpers over `scraper` shared by both page parsers

use scraper::{ElementRef, Selector};
use url::Url;

use omnikanji_core::ParseError;

/// Characters KanjiDamage wraps around glosses and notes
const DECORATIONS: &[char] = &[
    '+', '_', '-', '=', ',', '.', ':', ';', '\'', '"', '/', '|', '\\', ']', '[', '(', ')', '!',
    '?', '@', '$', '#', '%', '*',
];

/// Parse a selector literal; only ever called with constants
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

pub(crate) fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

pub(crate) fn trimmed_text(el: ElementRef<'_>) -> String {
    text_of(el).trim().to_string()
}

pub(crate) fn trim_decorations(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || DECORATIONS.contains(&c))
}

pub(crate) fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// `el` itself or an ancestor below `scope` carries `class`
pub(crate) fn within_class(el: ElementRef<'_>, class: &str, scope: ElementRef<'_>) -> bool {
    std::iter::once(el)
        .chain(
            el.ancestors()
                .take_while(|node| node.id() != scope.id())
                .filter_map(ElementRef::wrap),
        )
        .any(|e| has_class(e, class))
}

pub(crate) fn next_element_sibling<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

pub(crate) fn parse_url(url: &str) -> Result<Url, ParseError> {
    Url::parse(url).map_err(|source| ParseError::InvalidLink {
        link: url.to_string(),
        source,
    })
}

pub(crate) fn resolve(base: &Url, href: &str) -> Result<String, ParseError> {
    base.join(href)
        .map(String::from)
        .map_err(|source| ParseError::InvalidLink {
            link: href.to_string(),
            source,
        })
}

/// Like `resolve` but keeps the raw `href` when it cannot be joined
pub(crate) fn resolve_lenient(base: &Url, href: &str) -> String {
    resolve(base, href).unwrap_or_else(|e| {
        tracing::debug!("Keeping unresolved link: {e}");
        href.to_string()
    })
}
