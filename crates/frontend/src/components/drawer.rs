use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use metroline_shared::models::{Line, Station};
use metroline_shared::selection::{navigation_status, Selection};

use crate::components::document_view::DocumentView;
use crate::data;

/// Smooth-scroll the active accordion entry into view inside the drawer body.
fn scroll_accordion_entry(station_id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(&format!("accordion-{station_id}")) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Nearest);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Reading surface for the current selection: a side panel on desktop, a
/// bottom sheet on phones. Renders nothing while the selection is clear.
#[component]
pub fn ContentDrawer(
    selection: ReadSignal<Selection>,
    on_close: EventHandler<()>,
    on_back: EventHandler<()>,
    on_next: EventHandler<()>,
    on_view_full_line: EventHandler<()>,
    on_station_select: EventHandler<String>,
) -> Element {
    let catalog = data::catalog();
    let current = selection.read().clone();

    // Bring the expanded accordion entry into view once the drawer has
    // re-rendered; the delay lets the expansion settle first.
    use_effect(move || {
        if let Selection::Station(id) = selection.read().clone() {
            spawn(async move {
                TimeoutFuture::new(100).await;
                scroll_accordion_entry(&id);
            });
        }
    });

    match current {
        Selection::None => rsx! {},
        Selection::Station(id) => {
            let Some(station) = catalog.station(&id) else {
                return rsx! {};
            };
            let Some(line) = catalog.line(&station.line_id) else {
                return rsx! {};
            };
            let status = navigation_status(&Selection::Station(id.clone()), catalog.station_ids());
            let header_style = format!("background: {}14;", line.color);
            let badge_style = format!("background: {};", line.color);

            let back = if status.has_back {
                rsx! {
                    button {
                        class: "drawer-nav-button",
                        onclick: move |_| on_back.call(()),
                        "\u{2190} Back"
                    }
                }
            } else {
                rsx! { div { class: "drawer-nav-spacer" } }
            };
            let next = if status.has_next {
                rsx! {
                    button {
                        class: "drawer-nav-button",
                        onclick: move |_| on_next.call(()),
                        "Next \u{2192}"
                    }
                }
            } else {
                rsx! { div { class: "drawer-nav-spacer" } }
            };
            let read_guide = line.full_content.is_some().then(|| {
                rsx! {
                    button {
                        class: "drawer-guide-button",
                        style: "{badge_style}",
                        onclick: move |_| on_view_full_line.call(()),
                        "Read Guide"
                    }
                }
            });

            rsx! {
                div { class: "drawer-backdrop", onclick: move |_| on_close.call(()) }
                aside { class: "drawer",
                    header { class: "drawer-header", style: "{header_style}",
                        {compass(&line.color)}
                        div { class: "drawer-header-text",
                            span { class: "drawer-badge", style: "{badge_style}", "{line.name}" }
                            h2 { class: "drawer-title", "{station.name}" }
                            p { class: "drawer-subtitle", "{station.description}" }
                        }
                        button {
                            class: "drawer-close",
                            title: "Close",
                            onclick: move |_| on_close.call(()),
                            {close_glyph()}
                        }
                    }

                    div { class: "drawer-body",
                        div { class: "drawer-section-label", "Stations in this line" }
                        for stop in catalog.line_stations(&line.id) {
                            {accordion_entry(stop, line, stop.id == station.id, on_station_select)}
                        }
                    }

                    footer { class: "drawer-footer",
                        {back}
                        {read_guide}
                        {next}
                    }
                }
            }
        }
        Selection::Line(id) => {
            let Some(line) = catalog.line(&id) else {
                return rsx! {};
            };
            let header_style = format!("background: {}14;", line.color);
            let badge_style = format!("background: {};", line.color);
            let document = line.full_content.clone().unwrap_or_default();

            rsx! {
                div { class: "drawer-backdrop", onclick: move |_| on_close.call(()) }
                aside { class: "drawer",
                    header { class: "drawer-header", style: "{header_style}",
                        {compass(&line.color)}
                        div { class: "drawer-header-text",
                            span { class: "drawer-badge", style: "{badge_style}",
                                "Underground Guide"
                            }
                            h2 { class: "drawer-title", "{line.name}" }
                            p { class: "drawer-subtitle", "{line.description}" }
                        }
                        button {
                            class: "drawer-close",
                            title: "Close",
                            onclick: move |_| on_close.call(()),
                            {close_glyph()}
                        }
                    }

                    div { class: "drawer-body",
                        DocumentView {
                            document: document,
                            accent: line.color.clone(),
                        }
                    }
                }
            }
        }
    }
}

/// Two-character tag shown beside each accordion entry, cut from the
/// station name.
fn station_chip(name: &str) -> String {
    name.chars().take(2).collect()
}

fn accordion_entry(
    station: &Station,
    line: &Line,
    active: bool,
    on_station_select: EventHandler<String>,
) -> Element {
    let entry_id = format!("accordion-{}", station.id);
    let chip = station_chip(&station.name);
    // the line color marks only the expanded entry; the rest stay muted
    let chip_style = if active {
        format!("background: {};", line.color)
    } else {
        String::new()
    };
    let entry_class = if active {
        "accordion-entry active"
    } else {
        "accordion-entry"
    };
    let select_id = station.id.clone();

    rsx! {
        div { id: "{entry_id}", class: "{entry_class}",
            button {
                class: "accordion-head",
                onclick: move |_| on_station_select.call(select_id.clone()),
                span { class: "accordion-chip", style: "{chip_style}", "{chip}" }
                div { class: "accordion-head-text",
                    div { class: "accordion-name", "{station.name}" }
                    div { class: "accordion-desc", "{station.description}" }
                }
                span { class: "accordion-chevron", {chevron_glyph()} }
            }
            if active {
                div { class: "accordion-content",
                    DocumentView {
                        document: station.content.clone(),
                        accent: line.color.clone(),
                    }
                }
            }
        }
    }
}

fn chevron_glyph() -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            width: "16",
            height: "16",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "m6 9 6 6 6-6" }
        }
    }
}

// Decorative spinning compass in the drawer header.
fn compass(color: &str) -> Element {
    rsx! {
        svg {
            class: "drawer-compass",
            view_box: "0 0 24 24",
            width: "40",
            height: "40",
            fill: "none",
            stroke: "{color}",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "m16.24 7.76-2.12 6.36-6.36 2.12 2.12-6.36z" }
        }
    }
}

fn close_glyph() -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            width: "18",
            height: "18",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_chip_takes_two_characters() {
        assert_eq!(station_chip("B5: Agentic Cleanup"), "B5");
        assert_eq!(station_chip("Central Hub"), "Ce");
        assert_eq!(station_chip("X"), "X");
    }
}
