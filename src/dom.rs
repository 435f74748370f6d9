//! web-sys helpers over the pre-rendered log page.

use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement};

use crate::entry::EntryMeta;
use crate::error::ViewerError;
use crate::level::Level;

pub const ENTRY_SELECTOR: &str = ".log-entry";
pub const MESSAGE_SELECTOR: &str = ".message";
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";

/// A `.log-entry` element together with the metadata read from it.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntryNode {
    pub element: Element,
    pub meta: EntryMeta,
}

impl LogEntryNode {
    pub fn read(element: Element) -> Result<Self, ViewerError> {
        let level = Level::from_class_name(&element.class_name())?;
        let mut meta = EntryMeta::new(level)
            .with_tags(&element.get_attribute("data-tags").unwrap_or_default());
        meta.file = element.get_attribute("data-file").filter(|f| !f.is_empty());
        meta.line = element.get_attribute("data-line");
        Ok(Self { element, meta })
    }

    pub fn message(&self) -> Option<Element> {
        self.element.query_selector(MESSAGE_SELECTOR).ok().flatten()
    }

    pub fn set_hidden(&self, hidden: bool) -> Result<(), ViewerError> {
        let classes = self.element.class_list();
        if hidden {
            classes.add_1(HIDDEN_CLASS)?;
        } else {
            classes.remove_1(HIDDEN_CLASS)?;
        }
        Ok(())
    }
}

pub fn document() -> Result<Document, ViewerError> {
    window()
        .ok_or(ViewerError::NoWindow)?
        .document()
        .ok_or(ViewerError::NoDocument)
}

pub fn heading(doc: &Document) -> Result<Element, ViewerError> {
    doc.query_selector("h1")?.ok_or(ViewerError::MissingHeading)
}

pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, ViewerError> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect())
}

/// Every entry on the page, in document order.
pub fn scan_entries(doc: &Document) -> Result<Vec<LogEntryNode>, ViewerError> {
    let list = doc.query_selector_all(ENTRY_SELECTOR)?;
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .map(LogEntryNode::read)
        .collect()
}

/// Show or hide the `<br>` markers inside a message.
pub fn set_line_breaks_visible(message: &Element, visible: bool) -> Result<(), ViewerError> {
    let display = if visible { "" } else { "none" };
    for br in query_all(message, "br")? {
        if let Some(h) = br.dyn_ref::<HtmlElement>() {
            h.style().set_property("display", display)?;
        }
    }
    Ok(())
}

pub fn create(doc: &Document, tag: &str, class_name: &str) -> Result<Element, ViewerError> {
    let el = doc.create_element(tag)?;
    el.set_class_name(class_name);
    Ok(el)
}

pub fn create_with_text(
    doc: &Document,
    tag: &str,
    class_name: &str,
    text: &str,
) -> Result<Element, ViewerError> {
    let el = create(doc, tag, class_name)?;
    el.set_text_content(Some(text));
    Ok(el)
}

/// Insert `node` as the next sibling of `anchor`.
pub fn insert_after(anchor: &Element, node: &Element) -> Result<(), ViewerError> {
    let parent = anchor
        .parent_node()
        .ok_or_else(ViewerError::detached_heading)?;
    parent.insert_before(node, anchor.next_sibling().as_ref())?;
    Ok(())
}
