//! Typed, owned DOM tree built from tolerant HTML parsing.
//!
//! The tree is produced once from scraper's html5ever output. `script` and
//! `style` subtrees and comments never make it into the tree, so every text
//! query downstream sees visible content only.

use scraper::{ElementRef, Html};

/// Tags whose subtrees are dropped while building the tree
const STRIPPED_TAGS: [&str; 2] = ["script", "style"];

/// A node in the document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with a lowercase tag name, attributes in source order and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag_name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag_name: &str, attributes: Vec<(String, String)>, children: Vec<Node>) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            attributes,
            children,
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag_name == tag
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Value of the first attribute with the given name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Direct child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Concatenation of every descendant text node, in document order
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.push_text(out),
            }
        }
    }

    /// All descendant elements in document (pre-)order, excluding `self`
    pub fn descendants(&self) -> Descendants<'_> {
        let mut stack: Vec<&Element> = self.child_elements().collect();
        stack.reverse();
        Descendants { stack }
    }

    /// Descendant elements with the given tag name, in document order
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.descendants().filter(move |element| element.is(tag))
    }

    /// Collects descendants matching `is_target` without entering elements
    /// that match `is_boundary`, nor the matched targets themselves.
    ///
    /// Used to scope list items to their own list and rows to their own table.
    pub fn find_within<T, B>(&self, is_target: T, is_boundary: B) -> Vec<&Element>
    where
        T: Fn(&Element) -> bool,
        B: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        self.collect_within(&is_target, &is_boundary, &mut found);
        found
    }

    fn collect_within<'a, T, B>(
        &'a self,
        is_target: &T,
        is_boundary: &B,
        found: &mut Vec<&'a Element>,
    ) where
        T: Fn(&Element) -> bool,
        B: Fn(&Element) -> bool,
    {
        for child in self.child_elements() {
            if is_target(child) {
                found.push(child);
            } else if !is_boundary(child) {
                child.collect_within(is_target, is_boundary, found);
            }
        }
    }
}

/// Pre-order iterator over descendant elements
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        let start = self.stack.len();
        self.stack.extend(next.child_elements());
        self.stack[start..].reverse();
        Some(next)
    }
}

/// A parsed HTML document rooted at its `<html>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parses markup leniently; malformed or empty input yields a skeleton document
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            ::log::trace!("HTML parser recovered from {} errors", html.errors.len());
        }
        Self {
            root: convert(html.root_element()),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn head(&self) -> Option<&Element> {
        self.root.child_elements().find(|element| element.is("head"))
    }

    pub fn body(&self) -> Option<&Element> {
        self.root.child_elements().find(|element| element.is("body"))
    }

    /// Every element in the document in document order, the root included
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        std::iter::once(&self.root).chain(self.root.descendants())
    }

    /// Every element with the given tag name, in document order
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements().filter(move |element| element.is(tag))
    }
}

fn is_stripped(tag: &str) -> bool {
    STRIPPED_TAGS.iter().any(|stripped| tag.eq_ignore_ascii_case(stripped))
}

fn convert(element: ElementRef<'_>) -> Element {
    let value = element.value();

    let children = element
        .children()
        .filter_map(|child| match ElementRef::wrap(child) {
            Some(child_element) if is_stripped(child_element.value().name()) => None,
            Some(child_element) => Some(Node::Element(convert(child_element))),
            None => child
                .value()
                .as_text()
                .map(|text| Node::Text((&**text).to_owned())),
        })
        .collect();

    let attributes = value
        .attrs()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    Element::new(value.name(), attributes, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_and_style_are_dropped() {
        let doc = Document::parse(
            "<html><head><style>p { color: red }</style></head>\
             <body><p>Shown</p><script>var hidden = 1;</script></body></html>",
        );

        assert_eq!(doc.find_all("script").count(), 0);
        assert_eq!(doc.find_all("style").count(), 0);
        assert_eq!(doc.body().unwrap().text_content(), "Shown");
    }

    #[test]
    fn test_descendants_are_in_document_order() {
        let doc = Document::parse(
            "<body><div><h1>a</h1><section><h2>b</h2></section></div><h3>c</h3></body>",
        );
        let tags: Vec<&str> = doc
            .body()
            .unwrap()
            .descendants()
            .map(|element| element.tag_name())
            .collect();

        assert_eq!(tags, vec!["div", "h1", "section", "h2", "h3"]);
    }

    #[test]
    fn test_attributes_and_tag_names() {
        let doc = Document::parse(r#"<IMG SRC="a.png" alt="An image">"#);
        let img = doc.find_all("img").next().unwrap();

        assert_eq!(img.tag_name(), "img");
        assert_eq!(img.attr("src"), Some("a.png"));
        assert_eq!(img.attr("alt"), Some("An image"));
        assert_eq!(img.attr("title"), None);
    }

    #[test]
    fn test_children_keep_text_and_elements() {
        let doc = Document::parse("<body><p>Hello <b>bold</b> world</p></body>");
        let p = doc.find_all("p").next().unwrap();

        assert_eq!(p.children().len(), 3);
        assert_eq!(p.children()[0], Node::Text("Hello ".to_string()));
        assert_eq!(p.child_elements().map(|e| e.tag_name()).collect::<Vec<_>>(), vec!["b"]);
        assert_eq!(p.text_content(), "Hello bold world");
        assert!(p.attributes().is_empty());
    }

    #[test]
    fn test_find_within_stops_at_boundaries() {
        let doc = Document::parse(
            "<ul><li>one<ul><li>inner</li></ul></li><li>two</li></ul>",
        );
        let outer = doc.find_all("ul").next().unwrap();
        let items = outer.find_within(|e| e.is("li"), |e| e.is("ul") || e.is("ol"));

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].text_content(), "two");
    }

    #[test]
    fn test_empty_markup_yields_skeleton() {
        let doc = Document::parse("");

        assert_eq!(doc.root().tag_name(), "html");
        assert!(doc.head().is_some());
        assert_eq!(doc.body().map(|b| b.text_content()), Some(String::new()));
    }
}
