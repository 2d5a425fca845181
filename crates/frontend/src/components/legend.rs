use dioxus::prelude::*;

use metroline_shared::models::Line;

use crate::data;

/// Key of the map: one row per line, doubling as line selection. Collapses to
/// a floating reopen button so phones keep the diagram clear.
#[component]
pub fn Legend(open: Signal<bool>, on_line_select: EventHandler<String>) -> Element {
    let catalog = data::catalog();

    if !*open.read() {
        return rsx! {
            button {
                class: "legend-reopen",
                title: "Show Legend",
                onpointerdown: move |evt: Event<PointerData>| evt.stop_propagation(),
                onclick: move |evt: Event<MouseData>| {
                    evt.stop_propagation();
                    open.set(true);
                },
                svg {
                    view_box: "0 0 24 24",
                    width: "22",
                    height: "22",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    path { d: "M9 3 3 6v15l6-3 6 3 6-3V3l-6 3-6-3z" }
                    path { d: "M9 3v15" }
                    path { d: "M15 6v15" }
                }
            }
        };
    }

    rsx! {
        div {
            class: "legend",
            // keep legend interaction away from the map gesture handlers
            onpointerdown: move |evt: Event<PointerData>| evt.stop_propagation(),
            onwheel: move |evt: Event<WheelData>| evt.stop_propagation(),

            div { class: "legend-header",
                div {
                    h2 { class: "legend-title", "Transit Map" }
                    p { class: "legend-subtitle", "Underground Guides" }
                }
                button {
                    class: "legend-close",
                    title: "Hide Legend",
                    onclick: move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        open.set(false);
                    },
                    svg {
                        view_box: "0 0 24 24",
                        width: "18",
                        height: "18",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        path { d: "m15 18-6-6 6-6" }
                    }
                }
            }

            div { class: "legend-lines",
                for line in catalog.lines.iter() {
                    {legend_row(line, on_line_select)}
                }
            }

            div { class: "legend-footer", "Click lines for guides \u{2022} Drag to pan" }
        }
    }
}

fn legend_row(line: &Line, on_line_select: EventHandler<String>) -> Element {
    let line_id = line.id.clone();
    rsx! {
        button {
            class: "legend-row",
            onclick: move |evt: Event<MouseData>| {
                evt.stop_propagation();
                on_line_select.call(line_id.clone());
            },
            span { class: "legend-dot", style: "background: {line.color};" }
            span { class: "legend-row-text",
                span { class: "legend-row-name", "{line.name}" }
                span { class: "legend-row-desc", "{line.description}" }
            }
        }
    }
}
