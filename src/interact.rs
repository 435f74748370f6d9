//! Click-to-expand behaviour for each entry, with lazily built details:
//! copy button, file/line info and tag chips.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, Document, Element, Event};

use crate::config::ViewerConfig;
use crate::dom::{self, LogEntryNode};
use crate::entry::EntryMeta;
use crate::error::ViewerError;
use crate::expand::{non_toggle_selector, EntryView, Transition};

const COPY_LABEL: &str = "Copy";
const COPIED_LABEL: &str = "Copied!";
const COPIED_CLASS: &str = "copied";
const EXPANDED_CLASS: &str = "expanded";

async fn copy_to_clipboard(text: String) -> Result<(), JsValue> {
    let w = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let cb = w.navigator().clipboard();
    JsFuture::from(cb.write_text(&text)).await.map(|_| ())
}

fn add_listener<F>(target: &Element, event: &str, handler: F) -> Result<(), ViewerError>
where
    F: FnMut(Event) + 'static,
{
    let c = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, c.as_ref().unchecked_ref())?;
    c.forget();
    Ok(())
}

/// Clicks inside `el` stay there.
fn swallow_clicks(el: &Element) -> Result<(), ViewerError> {
    add_listener(el, "click", |e| e.stop_propagation())
}

fn clicked_in_non_toggle_region(e: &Event) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(&non_toggle_selector()).ok().flatten())
        .is_some()
}

/// Collapse every entry's line breaks and hook up its click handler.
pub fn wire_entries(
    doc: &Document,
    entries: &[LogEntryNode],
    config: &Rc<ViewerConfig>,
) -> Result<(), ViewerError> {
    for entry in entries {
        if let Some(message) = entry.message() {
            dom::set_line_breaks_visible(&message, false)?;
        }
        wire_entry(doc, entry, config.clone())?;
    }
    Ok(())
}

fn wire_entry(
    doc: &Document,
    entry: &LogEntryNode,
    config: Rc<ViewerConfig>,
) -> Result<(), ViewerError> {
    let view = Rc::new(RefCell::new(EntryView::default()));
    let node = entry.clone();
    let doc = doc.clone();

    add_listener(&entry.element, "click", move |e: Event| {
        if clicked_in_non_toggle_region(&e) {
            return;
        }
        let Some(message) = node.message() else {
            return;
        };
        let transition = view.borrow_mut().toggle();
        if let Err(err) = apply_transition(&doc, &node, &message, transition, &config) {
            gloo::console::error!(err.to_string());
        }
    })
}

fn apply_transition(
    doc: &Document,
    entry: &LogEntryNode,
    message: &Element,
    transition: Transition,
    config: &Rc<ViewerConfig>,
) -> Result<(), ViewerError> {
    let expanded = matches!(transition, Transition::Expand { .. });
    message.class_list().toggle_with_force(EXPANDED_CLASS, expanded)?;
    dom::set_line_breaks_visible(message, expanded)?;

    if let Transition::Expand { build_details: true } = transition {
        build_details(doc, entry, message, config)?;
    }
    Ok(())
}

fn build_details(
    doc: &Document,
    entry: &LogEntryNode,
    message: &Element,
    config: &Rc<ViewerConfig>,
) -> Result<(), ViewerError> {
    let copy_btn = build_copy_button(doc, &entry.meta, message, config.copy_feedback_ms)?;
    entry.element.append_child(&copy_btn)?;

    if let Some(info) = build_file_info(doc, &entry.meta, &config.editor_uri_prefix)? {
        entry.element.append_child(&info)?;
    }

    let tags = build_tag_chips(doc, &entry.meta)?;
    entry.element.append_child(&tags)?;
    Ok(())
}

/// Label and `aria-pressed` value for the copy button.
fn copy_feedback(copied: bool) -> (&'static str, &'static str) {
    if copied {
        (COPIED_LABEL, "true")
    } else {
        (COPY_LABEL, "false")
    }
}

fn set_copy_feedback(btn: &Element, copied: bool) {
    let (label, pressed) = copy_feedback(copied);
    btn.set_text_content(Some(label));
    let result = btn
        .class_list()
        .toggle_with_force(COPIED_CLASS, copied)
        .and_then(|_| btn.set_attribute("aria-pressed", pressed));
    if let Err(err) = result {
        gloo::console::error!("Failed to update copy button:", err);
    }
}

fn build_copy_button(
    doc: &Document,
    meta: &EntryMeta,
    message: &Element,
    feedback_ms: u32,
) -> Result<Element, ViewerError> {
    let (label, pressed) = copy_feedback(false);
    let btn = dom::create_with_text(doc, "button", "copy-btn", label)?;
    btn.set_attribute("type", "button")?;
    btn.set_attribute("title", "Copy to clipboard")?;
    btn.set_attribute("aria-label", "Copy message to clipboard")?;
    btn.set_attribute("aria-pressed", pressed)?;

    let meta = meta.clone();
    let message = message.clone();
    let target = btn.clone();
    add_listener(&btn, "click", move |e: Event| {
        e.stop_propagation();
        let text = meta.copy_text(&message.text_content().unwrap_or_default());
        let btn = target.clone();
        spawn_local(async move {
            match copy_to_clipboard(text).await {
                Ok(()) => {
                    set_copy_feedback(&btn, true);
                    let _ = Timeout::new(feedback_ms, move || set_copy_feedback(&btn, false)).forget();
                }
                Err(err) => gloo::console::error!("Failed to copy:", err),
            }
        });
    })?;

    Ok(btn)
}

fn build_file_info(
    doc: &Document,
    meta: &EntryMeta,
    uri_prefix: &str,
) -> Result<Option<Element>, ViewerError> {
    let Some(file_info) = meta.file_info(uri_prefix) else {
        return Ok(None);
    };

    let info = dom::create(doc, "div", "log-file-info")?;
    let name = dom::create_with_text(doc, "span", "file-name", &file_info.file_name)?;
    info.append_child(&name)?;

    if let Some(line_link) = file_info.line_link {
        let separator = doc.create_text_node(" : ");
        info.append_child(&separator)?;

        let link = dom::create_with_text(doc, "a", "line-link", &line_link.text)?;
        link.set_attribute("href", &line_link.href)?;
        link.set_attribute("title", &line_link.title)?;
        swallow_clicks(&link)?;
        info.append_child(&link)?;
    }

    swallow_clicks(&info)?;
    Ok(Some(info))
}

fn build_tag_chips(doc: &Document, meta: &EntryMeta) -> Result<Element, ViewerError> {
    let container = dom::create(doc, "div", "log-tags")?;
    for chip in meta.tag_chips() {
        let span = dom::create_with_text(doc, "span", chip.class_name, &chip.label)?;
        container.append_child(&span)?;
    }
    swallow_clicks(&container)?;
    Ok(container)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_feedback_states() {
        assert_eq!(copy_feedback(true), ("Copied!", "true"));
        assert_eq!(copy_feedback(false), ("Copy", "false"));
    }
}
