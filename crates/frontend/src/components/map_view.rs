use dioxus::html::geometry::WheelDelta;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use metroline_shared::camera::{fit_transform, Camera, Viewport};
use metroline_shared::models::{Catalog, LabelPlacement, Station, StationKind};
use metroline_shared::selection::Selection;

use crate::components::legend::Legend;
use crate::data;

const MAP_CONTAINER_ID: &str = "transit-map-container";

/// Scale factor change per wheel pixel.
const WHEEL_ZOOM_RATE: f64 = 0.001;

/// Milliseconds between animation frames.
const FRAME_MS: u32 = 16;

/// Viewport width below which the page switches to the compact layout
/// (bottom sheet drawer, legend closed by default).
const COMPACT_BREAKPOINT: f64 = 768.0;

/// Horizontal space the open legend takes away from line-focus framing.
const LEGEND_RESERVED_WIDTH: f64 = 280.0;

/// Gap between a station marker and its label.
const LABEL_GAP: f64 = 12.0;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

fn map_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(MAP_CONTAINER_ID)
}

/// Get the bounding client rect of the map container element.
fn container_rect() -> Option<web_sys::DomRect> {
    Some(map_element()?.get_bounding_client_rect())
}

fn window_size() -> Option<Viewport> {
    let window = web_sys::window()?;
    Some(Viewport {
        width: window.inner_width().ok()?.as_f64()?,
        height: window.inner_height().ok()?.as_f64()?,
    })
}

/// Live viewport dimensions, falling back to the window and then a fixed
/// extent while the container is not in the DOM yet.
fn viewport_size() -> Viewport {
    if let Some(rect) = container_rect() {
        return Viewport {
            width: rect.width(),
            height: rect.height(),
        };
    }
    window_size().unwrap_or(Viewport {
        width: 1000.0,
        height: 800.0,
    })
}

/// Whether the page is currently in the compact (phone) layout. Read per
/// event so window resizes take effect without a re-render.
pub fn is_compact() -> bool {
    window_size()
        .map(|v| v.width < COMPACT_BREAKPOINT)
        .unwrap_or(false)
}

/// Route pointer events to the container for the duration of one drag.
fn capture_pointer(pointer_id: i32) {
    if let Some(element) = map_element() {
        let _ = element.set_pointer_capture(pointer_id);
    }
}

fn release_pointer(pointer_id: i32) {
    if let Some(element) = map_element() {
        if element.has_pointer_capture(pointer_id) {
            let _ = element.release_pointer_capture(pointer_id);
        }
    }
}

// ---------------------------------------------------------------------------
// Presentation rules (pure functions, easily testable)
// ---------------------------------------------------------------------------

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like value.
fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * 40.0,
        WheelDelta::Pages(d) => d.y * 400.0,
    }
}

/// Marker radius and ring stroke width for a station kind.
fn station_metrics(kind: StationKind) -> (f64, f64) {
    match kind {
        StationKind::Hub => (24.0, 6.0),
        StationKind::Stop => (14.0, 5.0),
        StationKind::Terminus => (18.0, 6.0),
    }
}

struct LabelProps {
    x: f64,
    y: f64,
    anchor: &'static str,
    baseline: &'static str,
}

/// Label position and text alignment for a station under its configured
/// placement. Offsets clear the marker ring in each direction.
fn label_props(station: &Station) -> LabelProps {
    let (r, _) = station_metrics(station.kind);
    let gap = LABEL_GAP;
    let (x, y, anchor, baseline) = match station.label_placement {
        LabelPlacement::Top => (station.x, station.y - r - gap, "middle", "auto"),
        LabelPlacement::Bottom => (station.x, station.y + r + gap + 10.0, "middle", "middle"),
        LabelPlacement::Left => (station.x - r - gap, station.y, "end", "middle"),
        LabelPlacement::Right => (station.x + r + gap, station.y, "start", "middle"),
        LabelPlacement::TopRight => (
            station.x + r + gap * 0.5,
            station.y - r - gap * 0.5,
            "start",
            "middle",
        ),
        LabelPlacement::TopLeft => (
            station.x - r - gap * 0.5,
            station.y - r - gap * 0.5,
            "end",
            "middle",
        ),
        LabelPlacement::BottomRight => (
            station.x + r + gap * 0.5,
            station.y + r + gap + 4.0,
            "start",
            "middle",
        ),
        LabelPlacement::BottomLeft => (
            station.x - r - gap * 0.5,
            station.y + r + gap + 4.0,
            "end",
            "middle",
        ),
    };
    LabelProps {
        x,
        y,
        anchor,
        baseline,
    }
}

/// Whether a line keeps full strength under the current selection.
fn line_is_relevant(selection: &Selection, line_id: &str, catalog: &Catalog) -> bool {
    match selection {
        Selection::None => true,
        Selection::Line(id) => id == line_id,
        Selection::Station(id) => catalog
            .station(id)
            .map(|s| s.line_id == line_id)
            .unwrap_or(false),
    }
}

/// Whether a station renders dimmed: its line is irrelevant, or another
/// station holds the selection.
fn station_is_dimmed(selection: &Selection, station: &Station, catalog: &Catalog) -> bool {
    if !line_is_relevant(selection, &station.line_id, catalog) {
        return true;
    }
    match selection {
        Selection::Station(id) => id != &station.id,
        _ => false,
    }
}

/// Grid rulings run every 100 diagram units from -500 to 1500 on both axes.
fn grid_coord(i: i32) -> f64 {
    -500.0 + f64::from(i) * 100.0
}

// ---------------------------------------------------------------------------
// Station markers
// ---------------------------------------------------------------------------

fn station_marker(
    station: &Station,
    catalog: &Catalog,
    selection: &Selection,
    on_station_select: EventHandler<String>,
    mut hovered: Signal<Option<String>>,
) -> Element {
    let (radius, ring) = station_metrics(station.kind);
    let hit_radius = radius * 2.5;
    let label = label_props(station);
    let color = catalog
        .line(&station.line_id)
        .map(|l| l.color.clone())
        .unwrap_or_else(|| "#0f172a".to_string());

    let selected = selection.station_id() == Some(station.id.as_str());
    let dimmed = station_is_dimmed(selection, station, catalog);
    let group_class = if selected {
        "station selected"
    } else if dimmed {
        "station dimmed"
    } else {
        "station"
    };
    let origin = format!("transform-origin: {}px {}px;", station.x, station.y);

    let click_id = station.id.clone();
    let hover_id = station.id.clone();

    rsx! {
        g {
            class: "{group_class}",
            style: "{origin}",
            onclick: move |evt: Event<MouseData>| {
                evt.stop_propagation();
                on_station_select.call(click_id.clone());
            },
            // a tap on a station must not start a map drag
            onpointerdown: move |evt: Event<PointerData>| {
                evt.stop_propagation();
            },
            onmouseenter: move |_| {
                hovered.set(Some(hover_id.clone()));
            },
            onmouseleave: move |_| {
                hovered.set(None);
            },

            if selected {
                circle {
                    class: "pulse-ring",
                    cx: "{station.x}",
                    cy: "{station.y}",
                    r: "{radius}",
                    fill: "none",
                    stroke: "{color}",
                    stroke_width: "4",
                    style: "{origin}",
                }
            }
            // oversized invisible hit area
            circle {
                cx: "{station.x}",
                cy: "{station.y}",
                r: "{hit_radius}",
                fill: "transparent",
            }
            circle {
                class: "marker",
                cx: "{station.x}",
                cy: "{station.y}",
                r: "{radius}",
                fill: "white",
                stroke: "{color}",
                stroke_width: "{ring}",
            }
            text {
                class: "station-label",
                x: "{label.x}",
                y: "{label.y}",
                text_anchor: "{label.anchor}",
                dominant_baseline: "{label.baseline}",
                "{station.name}"
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Map view
// ---------------------------------------------------------------------------

#[component]
pub fn MapView(
    selection: ReadSignal<Selection>,
    on_station_select: EventHandler<String>,
    on_line_select: EventHandler<String>,
) -> Element {
    let catalog = data::catalog();

    // One owned transform cell; every mutation goes through the camera
    let mut camera = use_signal(Camera::new);
    let mut animating = use_signal(|| false);

    // Drag state
    let mut is_dragging = use_signal(|| false);
    let mut last_point = use_signal(|| (0.0_f64, 0.0_f64));

    // Hover tooltip state
    let hovered = use_signal(|| None::<String>);
    let mut tooltip_pos = use_signal(|| (0.0_f64, 0.0_f64));

    // Legend starts open on desktop, closed in the compact layout
    let mut legend_open = use_signal(|| !is_compact());

    // Single-instance frame task: ticks the camera until it reports the
    // animation is over, then retires itself.
    let mut ensure_animating = move || {
        if *animating.peek() {
            return;
        }
        animating.set(true);
        spawn(async move {
            loop {
                TimeoutFuture::new(FRAME_MS).await;
                if !camera.write().tick() {
                    break;
                }
            }
            animating.set(false);
        });
    };

    // Fit the overview once the container exists; a jump, not an animation
    use_effect(move || {
        camera.write().jump_to(fit_transform(
            viewport_size(),
            data::OVERVIEW_WIDTH,
            data::OVERVIEW_HEIGHT,
        ));
    });

    // Frame the selection whenever it changes. Clearing moves nothing. The
    // legend state is deliberately peeked: toggling it must not re-frame.
    use_effect(move || {
        match selection.read().clone() {
            Selection::None => {}
            Selection::Station(id) => {
                let Some(station) = catalog.station(&id) else {
                    return;
                };
                camera
                    .write()
                    .focus_station(station, viewport_size(), is_compact());
                ensure_animating();
            }
            Selection::Line(id) => {
                let compact = is_compact();
                let sidebar = if !compact && *legend_open.peek() {
                    LEGEND_RESERVED_WIDTH
                } else {
                    0.0
                };
                camera
                    .write()
                    .focus_line(catalog.line_stations(&id), viewport_size(), sidebar);
                ensure_animating();
                if compact {
                    legend_open.set(false);
                }
            }
        }
    });

    let t = camera.read().current();
    let transform_style = format!(
        "transform: translate({}px, {}px) scale({}); transform-origin: 0 0;",
        t.offset_x, t.offset_y, t.scale
    );
    let dragging = *is_dragging.read();
    let container_class = if dragging {
        "map-container dragging"
    } else {
        "map-container"
    };

    let current_selection = selection.read().clone();
    let grid_coords: Vec<f64> = (0..=20).map(grid_coord).collect();
    let diagram_w = data::DIAGRAM_WIDTH;
    let diagram_h = data::DIAGRAM_HEIGHT;

    let (tip_x, tip_y) = *tooltip_pos.read();
    let tooltip = {
        let read = hovered.read();
        read.as_deref().and_then(|id| catalog.station(id)).map(|station| {
            let tip_style = format!(
                "transform: translate({}px, {}px);",
                tip_x + 16.0,
                tip_y + 16.0
            );
            rsx! {
                div {
                    class: "tooltip",
                    style: "{tip_style}",
                    div { class: "tooltip-name", "{station.name}" }
                    div { class: "tooltip-desc", "{station.description}" }
                }
            }
        })
    };

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "{container_class}",

            onwheel: move |evt: Event<WheelData>| {
                evt.prevent_default();
                let factor = 1.0 - wheel_delta_y(evt.data().delta()) * WHEEL_ZOOM_RATE;
                let viewport = viewport_size();
                camera
                    .write()
                    .zoom_at(viewport.width / 2.0, viewport.height / 2.0, factor);
            },

            onpointerdown: move |evt: Event<PointerData>| {
                camera.write().cancel_animation();
                is_dragging.set(true);
                let client = evt.data().client_coordinates();
                last_point.set((client.x, client.y));
                capture_pointer(evt.data().pointer_id());
            },

            onpointermove: move |evt: Event<PointerData>| {
                let client = evt.data().client_coordinates();
                if hovered.read().is_some() {
                    tooltip_pos.set((client.x, client.y));
                }
                if !*is_dragging.read() {
                    return;
                }
                let (last_x, last_y) = *last_point.read();
                camera.write().pan_by(client.x - last_x, client.y - last_y);
                last_point.set((client.x, client.y));
            },

            onpointerup: move |evt: Event<PointerData>| {
                is_dragging.set(false);
                release_pointer(evt.data().pointer_id());
            },

            onpointerleave: move |evt: Event<PointerData>| {
                is_dragging.set(false);
                release_pointer(evt.data().pointer_id());
            },

            onpointercancel: move |evt: Event<PointerData>| {
                is_dragging.set(false);
                release_pointer(evt.data().pointer_id());
            },

            ontouchstart: move |evt: Event<TouchData>| {
                let touches = evt.data().touches();
                if touches.len() >= 2 {
                    let t0 = &touches[0];
                    let t1 = &touches[1];
                    let p0 = (t0.client_coordinates().x, t0.client_coordinates().y);
                    let p1 = (t1.client_coordinates().x, t1.client_coordinates().y);
                    camera.write().begin_pinch(p0, p1);
                    // two fingers end any one-finger drag in progress
                    is_dragging.set(false);
                }
            },

            ontouchmove: move |evt: Event<TouchData>| {
                let touches = evt.data().touches();
                if touches.len() >= 2 {
                    evt.prevent_default();
                    let t0 = &touches[0];
                    let t1 = &touches[1];
                    let p0 = (t0.client_coordinates().x, t0.client_coordinates().y);
                    let p1 = (t1.client_coordinates().x, t1.client_coordinates().y);
                    let viewport = viewport_size();
                    camera
                        .write()
                        .update_pinch(p0, p1, viewport.width / 2.0, viewport.height / 2.0);
                }
            },

            ontouchend: move |_evt: Event<TouchData>| {
                camera.write().end_pinch();
            },

            ontouchcancel: move |_evt: Event<TouchData>| {
                camera.write().end_pinch();
                is_dragging.set(false);
            },

            // Everything inside this wrapper moves with the camera
            div {
                class: "map-inner",
                style: "{transform_style}",

                svg {
                    class: "diagram",
                    width: "{diagram_w}",
                    height: "{diagram_h}",

                    g { class: "grid",
                        for c in grid_coords {
                            line { x1: "{c}", y1: "-500", x2: "{c}", y2: "1500" }
                            line { x1: "-500", y1: "{c}", x2: "1500", y2: "{c}" }
                        }
                    }

                    for line_data in catalog.lines.iter() {
                        g {
                            class: if line_is_relevant(&current_selection, &line_data.id, catalog) {
                                "metro-line"
                            } else {
                                "metro-line dimmed"
                            },
                            path {
                                d: "{line_data.path}",
                                stroke: "{line_data.color}",
                                stroke_width: "12",
                                fill: "none",
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                            }
                            // dotted white overlay suggesting sleepers
                            path {
                                d: "{line_data.path}",
                                stroke: "white",
                                stroke_width: "2",
                                fill: "none",
                                stroke_dasharray: "0,20",
                                stroke_linecap: "round",
                                opacity: "0.3",
                            }
                        }
                    }

                    for station in catalog.stations.iter() {
                        {station_marker(station, catalog, &current_selection, on_station_select, hovered)}
                    }
                }
            }

            {tooltip}

            Legend {
                open: legend_open,
                on_line_select: on_line_select,
            }

            button {
                class: "reset-button",
                title: "Fit to Screen",
                onpointerdown: move |evt: Event<PointerData>| {
                    evt.stop_propagation();
                },
                onclick: move |_| {
                    camera.write().reset_view(
                        viewport_size(),
                        data::OVERVIEW_WIDTH,
                        data::OVERVIEW_HEIGHT,
                    );
                    ensure_animating();
                },
                svg {
                    view_box: "0 0 24 24",
                    width: "20",
                    height: "20",
                    path {
                        d: "M8 3H5a2 2 0 0 0-2 2v3m18 0V5a2 2 0 0 0-2-2h-3m0 18h3a2 2 0 0 0 2-2v-3M3 16v3a2 2 0 0 0 2 2h3",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metroline_shared::models::{Document, Line};

    fn test_station(id: &str, line_id: &str, placement: LabelPlacement) -> Station {
        Station {
            id: id.into(),
            name: id.to_uppercase(),
            x: 100.0,
            y: 200.0,
            kind: StationKind::Stop,
            line_id: line_id.into(),
            description: "".into(),
            content: Document::new(),
            label_placement: placement,
        }
    }

    fn test_catalog() -> Catalog {
        let line = |id: &str| Line {
            id: id.into(),
            name: id.to_uppercase(),
            color: "#123456".into(),
            description: "".into(),
            path: "M 0 0 L 10 10".into(),
            full_content: None,
        };
        Catalog {
            lines: vec![line("red"), line("blue")],
            stations: vec![
                test_station("r1", "red", LabelPlacement::Right),
                test_station("b1", "blue", LabelPlacement::Left),
            ],
        }
    }

    #[test]
    fn test_station_metrics_by_kind() {
        assert_eq!(station_metrics(StationKind::Stop), (14.0, 5.0));
        assert_eq!(station_metrics(StationKind::Hub), (24.0, 6.0));
        assert_eq!(station_metrics(StationKind::Terminus), (18.0, 6.0));
    }

    #[test]
    fn test_label_sits_clear_of_the_marker() {
        let station = test_station("s", "red", LabelPlacement::Right);
        let props = label_props(&station);
        assert!((props.x - (100.0 + 14.0 + 12.0)).abs() < 1e-9);
        assert!((props.y - 200.0).abs() < 1e-9);
        assert_eq!(props.anchor, "start");
        assert_eq!(props.baseline, "middle");
    }

    #[test]
    fn test_left_and_top_label_placements() {
        let left = label_props(&test_station("s", "red", LabelPlacement::Left));
        assert!((left.x - (100.0 - 26.0)).abs() < 1e-9);
        assert_eq!(left.anchor, "end");

        let top = label_props(&test_station("s", "red", LabelPlacement::Top));
        assert!((top.y - (200.0 - 26.0)).abs() < 1e-9);
        assert_eq!(top.anchor, "middle");
        assert_eq!(top.baseline, "auto");
    }

    #[test]
    fn test_diagonal_label_placements_use_half_gap() {
        let props = label_props(&test_station("s", "red", LabelPlacement::TopRight));
        assert!((props.x - (100.0 + 14.0 + 6.0)).abs() < 1e-9);
        assert!((props.y - (200.0 - 14.0 - 6.0)).abs() < 1e-9);
        assert_eq!(props.anchor, "start");
    }

    #[test]
    fn test_all_lines_relevant_without_selection() {
        let catalog = test_catalog();
        let selection = Selection::None;
        assert!(line_is_relevant(&selection, "red", &catalog));
        assert!(line_is_relevant(&selection, "blue", &catalog));
    }

    #[test]
    fn test_station_selection_dims_other_lines() {
        let catalog = test_catalog();
        let selection = Selection::Station("r1".into());
        assert!(line_is_relevant(&selection, "red", &catalog));
        assert!(!line_is_relevant(&selection, "blue", &catalog));
    }

    #[test]
    fn test_line_selection_dims_other_lines() {
        let catalog = test_catalog();
        let selection = Selection::Line("blue".into());
        assert!(!line_is_relevant(&selection, "red", &catalog));
        assert!(line_is_relevant(&selection, "blue", &catalog));
    }

    #[test]
    fn test_station_dimming_follows_selection() {
        let catalog = test_catalog();
        let r1 = catalog.station("r1").unwrap();
        let b1 = catalog.station("b1").unwrap();

        let none = Selection::None;
        assert!(!station_is_dimmed(&none, r1, &catalog));

        // selecting r1 dims its sibling on the other line and everything else
        let selection = Selection::Station("r1".into());
        assert!(!station_is_dimmed(&selection, r1, &catalog));
        assert!(station_is_dimmed(&selection, b1, &catalog));

        // selecting a line keeps that line's stations bright
        let line_selection = Selection::Line("blue".into());
        assert!(station_is_dimmed(&line_selection, r1, &catalog));
        assert!(!station_is_dimmed(&line_selection, b1, &catalog));
    }

    #[test]
    fn test_grid_rulings_span_the_diagram() {
        assert!((grid_coord(0) - -500.0).abs() < 1e-9);
        assert!((grid_coord(10) - 500.0).abs() < 1e-9);
        assert!((grid_coord(20) - 1500.0).abs() < 1e-9);
    }
}
