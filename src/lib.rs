//! Interactive filtering and expansion for pre-rendered HTML log pages.
//!
//! The log page loads this module; `start` scans the `.log-entry` elements,
//! mounts the filter panel right after the `<h1>` and wires each entry's
//! expand/collapse handler.

pub mod config;
pub mod dom;
pub mod entry;
pub mod error;
pub mod expand;
pub mod filter;
pub mod interact;
pub mod level;
pub mod panel;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::panel::{FilterPanel, FilterPanelProps, PANEL_ID};

fn init() -> Result<(), ViewerError> {
    let doc = dom::document()?;
    let heading = dom::heading(&doc)?;
    let config = Rc::new(ViewerConfig::from_document(&doc));

    let entries = dom::scan_entries(&doc)?;
    let tags = entry::discover_tags(entries.iter().map(|e| &e.meta));

    let container = doc.create_element("div")?;
    container.set_id(PANEL_ID);
    dom::insert_after(&heading, &container)?;

    interact::wire_entries(&doc, &entries, &config)?;

    gloo::console::log!(format!(
        "log viewer: {} entries, {} tags",
        entries.len(),
        tags.len()
    ));

    let props = FilterPanelProps {
        entries: Rc::new(entries),
        tags: Rc::new(tags),
    };
    yew::Renderer::<FilterPanel>::with_root_and_props(container, props).render();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init().map_err(|e| {
        gloo::console::error!(e.to_string());
        JsValue::from(e)
    })
}
