//! Filter panel: level and tag toggles plus live counts.

use std::rc::Rc;

use yew::prelude::*;

use crate::dom::{LogEntryNode, ACTIVE_CLASS};
use crate::filter::{FilterState, FilterStats};
use crate::level::Level;

pub const PANEL_ID: &str = "filter-container";

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub entries: Rc<Vec<LogEntryNode>>,
    /// Discovered tags, in first-seen order.
    pub tags: Rc<Vec<String>>,
}

fn button_class(kind: &str, active: bool) -> Classes {
    classes!("filter-btn", kind.to_string(), active.then_some(ACTIVE_CLASS))
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let filters = use_state(FilterState::new);

    let visibility = filters.compute_visibility(props.entries.iter().map(|e| &e.meta));
    let stats = FilterStats::from_visibility(&visibility);

    // Push visibility onto the page after each filter change.
    {
        let entries = props.entries.clone();
        let visibility = visibility.clone();
        use_effect_with((*filters).clone(), move |_| {
            for (entry, shown) in entries.iter().zip(visibility) {
                if let Err(e) = entry.set_hidden(!shown) {
                    gloo::console::error!(e.to_string());
                }
            }
            || ()
        });
    }

    let level_buttons = Level::ALL.into_iter().map(|level| {
        let onclick = {
            let filters = filters.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*filters).clone();
                next.toggle_level(level);
                filters.set(next);
            })
        };
        html! {
            <button
                class={button_class("level-filter", filters.is_level_active(level))}
                data-level={level.number().to_string()}
                {onclick}
            >
                { level.label() }
            </button>
        }
    });

    let tag_section = if props.tags.is_empty() {
        html! {}
    } else {
        let tag_buttons = props.tags.iter().map(|tag| {
            let onclick = {
                let filters = filters.clone();
                let tag = tag.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut next = (*filters).clone();
                    next.toggle_tag(&tag);
                    filters.set(next);
                })
            };
            html! {
                <button
                    class={button_class("tag-filter", filters.is_tag_active(tag))}
                    data-tag={tag.clone()}
                    {onclick}
                >
                    { tag.clone() }
                </button>
            }
        });
        html! {
            <div class="filter-section">
                <label>{ "Filter by Tag:" }</label>
                <div class="filter-buttons">{ for tag_buttons }</div>
            </div>
        }
    };

    html! {
        <>
            <div class="filter-section">
                <label>{ "Filter by Level:" }</label>
                <div class="filter-buttons">{ for level_buttons }</div>
            </div>
            { tag_section }
            <div class="stats">
                <span>{ "Total: " }<strong id="total-count">{ stats.total }</strong></span>
                <span>{ "Visible: " }<strong id="visible-count">{ stats.visible }</strong></span>
            </div>
        </>
    }
}
