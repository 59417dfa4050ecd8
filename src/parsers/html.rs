use crate::filter::resolve_href;
use crate::parsers::mentions_disclosure;
use crate::results::DisclosureLink;
use scraper::{ElementRef, Html, Node, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid selector"));

/// Links collected so far, unique by resolved URL and kept in insertion order
#[derive(Debug, Default)]
struct LinkCollector {
    links: Vec<DisclosureLink>,
    seen: HashSet<String>,
}

impl LinkCollector {
    /// Add a link unless one with the same URL is already present
    fn push(&mut self, display_text: String, absolute_url: String) {
        if !self.seen.insert(absolute_url.clone()) {
            ::log::trace!("Skipping duplicate disclosure link: {}", absolute_url);
            return;
        }
        self.links.push(DisclosureLink {
            display_text,
            absolute_url,
        });
    }

    fn into_links(self) -> Vec<DisclosureLink> {
        self.links
    }
}

/// Extracts candidate Impressum links from an HTML page.
///
/// Two passes over the document:
/// 1. every `<a href>` whose visible text mentions "impressum";
/// 2. every text node mentioning "impressum" whose direct parent is an `<a>` with a
///    non-empty href, unless its resolved URL was already collected.
///
/// Hrefs are resolved against `base_url`. The result never holds two links with the
/// same URL; earlier matches win.
pub fn extract_disclosure_links(html: &str, base_url: &str) -> Vec<DisclosureLink> {
    if html.is_empty() {
        return Vec::new();
    }

    let base = match Url::parse(base_url) {
        Ok(base) => Some(base),
        Err(e) => {
            ::log::warn!(
                "Base URL {} does not parse ({}); only absolute hrefs will resolve",
                base_url,
                e
            );
            None
        }
    };

    let doc = Html::parse_document(html);
    let mut collector = LinkCollector::default();

    for anchor in doc.select(&ANCHOR_SELECTOR) {
        let text = visible_text(anchor);
        if !mentions_disclosure(&text) {
            continue;
        }
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if let Some(url) = resolve_href(href, base.as_ref()) {
            collector.push(text, url);
        }
    }

    for node in doc.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        if !mentions_disclosure(text) {
            continue;
        }
        let Some(href) = node.parent().and_then(ElementRef::wrap).and_then(linked_href) else {
            continue;
        };
        if let Some(url) = resolve_href(href, base.as_ref()) {
            collector.push(text.trim().to_string(), url);
        }
    }

    let links = collector.into_links();
    ::log::debug!("Found {} disclosure links on {}", links.len(), base_url);
    links
}

/// Text of an element with every piece trimmed and the non-empty pieces joined
fn visible_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// The href of an anchor element, if it has a non-empty one
fn linked_href(element: ElementRef<'_>) -> Option<&str> {
    if element.value().name() != "a" {
        return None;
    }
    element.value().attr("href").filter(|href| !href.is_empty())
}
