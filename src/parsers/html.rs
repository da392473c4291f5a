use crate::parsers::dom::{Document, Element};
use crate::parsers::text::{self, collapse_whitespace, meaningful, word_count};
use crate::results::{ExtractedPage, Heading, Image, Link, List, ListType, Table};
use chrono::{DateTime, SecondsFormat, Utc};

/// Extracts a full page record from raw markup.
///
/// Never fails: missing nodes produce empty strings and collections.
pub fn extract(url: &str, markup: &str, captured_at: DateTime<Utc>) -> ExtractedPage {
    let doc = Document::parse(markup);

    let full_text = extract_full_text(&doc);
    let word_count = word_count(&full_text);

    let page = ExtractedPage {
        url: url.to_string(),
        timestamp: captured_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        title: extract_title(&doc),
        description: extract_meta(&doc, "description"),
        keywords: extract_meta(&doc, "keywords"),
        author: extract_meta(&doc, "author"),
        links: extract_links(&doc),
        images: extract_images(&doc),
        headings: extract_headings(&doc),
        paragraphs: extract_paragraphs(&doc),
        lists: extract_lists(&doc),
        tables: extract_tables(&doc),
        full_text,
        word_count,
    };

    ::log::debug!(
        "HTML extractor found {} links, {} images, {} headings, {} paragraphs, {} lists, {} tables",
        page.links.len(),
        page.images.len(),
        page.headings.len(),
        page.paragraphs.len(),
        page.lists.len(),
        page.tables.len()
    );

    page
}

/// Text of the first `<title>` element, trimmed
pub fn extract_title(doc: &Document) -> String {
    doc.find_all("title")
        .next()
        .map(|title| text::trim(&title.text_content()).to_string())
        .unwrap_or_default()
}

/// `content` of the first `<meta name="...">` with the given name
pub fn extract_meta(doc: &Document, name: &str) -> String {
    doc.find_all("meta")
        .find(|meta| meta.attr("name") == Some(name))
        .and_then(|meta| meta.attr("content"))
        .unwrap_or_default()
        .to_string()
}

pub fn extract_links(doc: &Document) -> Vec<Link> {
    doc.find_all("a")
        .filter_map(|anchor| {
            let href = anchor.attr("href").filter(|href| !href.is_empty())?;
            let text = meaningful(&anchor.text_content())?;
            Some(Link {
                url: href.to_string(),
                text,
                is_external: is_external(href),
            })
        })
        .collect()
}

/// True if the raw href begins with an `http:` or `https:` scheme.
///
/// The href is not normalized, so leading whitespace means relative.
pub fn is_external(href: &str) -> bool {
    href.split_once(':').is_some_and(|(scheme, _)| {
        scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
    })
}

pub fn extract_images(doc: &Document) -> Vec<Image> {
    doc.find_all("img")
        .filter_map(|img| {
            let src = img.attr("src").filter(|src| !src.is_empty())?;
            Some(Image {
                src: src.to_string(),
                alt: img.attr("alt").unwrap_or_default().to_string(),
                title: img.attr("title").unwrap_or_default().to_string(),
            })
        })
        .collect()
}

/// Level of a heading tag (`h1` through `h6`)
pub fn heading_level(tag: &str) -> Option<u8> {
    match tag.as_bytes() {
        [b'h', digit @ b'1'..=b'6'] => Some(digit - b'0'),
        _ => None,
    }
}

pub fn extract_headings(doc: &Document) -> Vec<Heading> {
    doc.elements()
        .filter_map(|element| {
            let level = heading_level(element.tag_name())?;
            let text = meaningful(&element.text_content())?;
            Some(Heading { level, text })
        })
        .collect()
}

pub fn extract_paragraphs(doc: &Document) -> Vec<String> {
    doc.find_all("p")
        .filter_map(|p| meaningful(&p.text_content()))
        .collect()
}

fn is_list(element: &Element) -> bool {
    ListType::from_tag(element.tag_name()).is_some()
}

/// Every `<ul>`/`<ol>` with at least one meaningful item.
///
/// Items belong to the closest enclosing list, so nested lists come out as
/// their own entries right after their parent.
pub fn extract_lists(doc: &Document) -> Vec<List> {
    doc.elements()
        .filter_map(|element| {
            let list_type = ListType::from_tag(element.tag_name())?;
            let items: Vec<String> = element
                .find_within(|e| e.is("li"), is_list)
                .into_iter()
                .filter_map(|li| meaningful(&li.text_content()))
                .collect();

            if items.is_empty() {
                None
            } else {
                Some(List { list_type, items })
            }
        })
        .collect()
}

/// Every `<table>` with at least one row holding a meaningful cell.
///
/// Rows are scoped to their own table; nested tables are separate entries.
pub fn extract_tables(doc: &Document) -> Vec<Table> {
    doc.find_all("table")
        .filter_map(|table| {
            let rows: Vec<Vec<String>> = table
                .find_within(|e| e.is("tr"), |e| e.is("table"))
                .into_iter()
                .map(extract_row)
                .filter(|cells| !cells.is_empty())
                .collect();

            if rows.is_empty() {
                None
            } else {
                Some(Table { rows })
            }
        })
        .collect()
}

fn extract_row(row: &Element) -> Vec<String> {
    row.find_within(|e| e.is("td") || e.is("th"), |e| e.is("table"))
        .into_iter()
        .filter_map(|cell| meaningful(&cell.text_content()))
        .collect()
}

/// Body text with whitespace runs collapsed
pub fn extract_full_text(doc: &Document) -> String {
    doc.body()
        .map(|body| collapse_whitespace(&body.text_content()))
        .unwrap_or_default()
}
