use serde::{Deserialize, Serialize};

/// Structured record extracted from a single fetched page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedPage {
    /// URL of the page, echoed verbatim
    pub url: String,

    /// Capture time (ISO-8601, UTC)
    pub timestamp: String,

    /// Text of the first `<title>` element
    pub title: String,

    pub description: String,
    pub keywords: String,
    pub author: String,

    pub links: Vec<Link>,
    pub images: Vec<Image>,
    pub headings: Vec<Heading>,
    pub paragraphs: Vec<String>,
    pub lists: Vec<List>,
    pub tables: Vec<Table>,

    /// Visible body text with whitespace collapsed
    pub full_text: String,

    /// Number of whitespace-delimited tokens in `full_text`
    pub word_count: usize,
}

/// An anchor with a target and visible text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub url: String,
    pub text: String,
    pub is_external: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// 1 through 6, from the tag name
    pub level: u8,
    pub text: String,
}

/// Kind of list element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Ul,
    Ol,
}

impl ListType {
    /// Maps a tag name to a list kind, if it is one
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ul" => Some(ListType::Ul),
            "ol" => Some(ListType::Ol),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    #[serde(rename = "type")]
    pub list_type: ListType,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl ExtractedPage {
    /// Re-splits `full_text` and checks it against `word_count`
    pub fn word_count_consistent(&self) -> bool {
        crate::parsers::text::word_count(&self.full_text) == self.word_count
    }
}
