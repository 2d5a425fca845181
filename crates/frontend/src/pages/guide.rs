use dioxus::prelude::*;

use metroline_shared::selection::Selection;

use crate::components::drawer::ContentDrawer;
use crate::components::map_view::MapView;
use crate::data;

/// Repository of the guide content this map presents.
const CONTRIBUTE_URL: &str = "https://github.com/voku/LLMCodingTrainMap";

/// The whole single-page app: map underneath, drawer on top, one selection
/// signal feeding both.
#[component]
pub fn Guide(station_id: Option<String>) -> Element {
    let catalog = data::catalog();

    // Deep link: resolve the station from the URL once on mount; unknown ids
    // silently fall back to the overview
    let mut selection = use_signal(move || {
        let mut initial = Selection::default();
        if let Some(id) = station_id.as_deref() {
            initial.select_station(catalog, id);
        }
        initial
    });

    // Every mutation goes through the state machine, and only real changes
    // are written back, so the camera re-frames exactly once per change
    let select_station = move |id: String| {
        let mut next = selection.peek().clone();
        if next.select_station(catalog, &id) {
            selection.set(next);
        }
    };
    let select_line = move |id: String| {
        let mut next = selection.peek().clone();
        if next.select_line(catalog, &id) {
            selection.set(next);
        }
    };
    let clear = move |_| {
        let mut next = selection.peek().clone();
        if next.clear() {
            selection.set(next);
        }
    };
    let view_full_line = move |_| {
        let mut next = selection.peek().clone();
        if next.view_parent_line(catalog) {
            selection.set(next);
        }
    };
    let go_next = move |_| {
        let mut next = selection.peek().clone();
        if next.next(catalog) {
            selection.set(next);
        }
    };
    let go_back = move |_| {
        let mut next = selection.peek().clone();
        if next.back(catalog) {
            selection.set(next);
        }
    };
    let start_tour = move |_| {
        let Some(first) = catalog.stations.first() else {
            return;
        };
        let mut next = selection.peek().clone();
        if next.select_station(catalog, &first.id) {
            selection.set(next);
        }
    };

    let show_start = selection.read().is_none();

    rsx! {
        main { class: "guide-page",
            MapView {
                selection: selection,
                on_station_select: select_station,
                on_line_select: select_line,
            }

            a {
                class: "contribute-link",
                href: CONTRIBUTE_URL,
                target: "_blank",
                rel: "noopener noreferrer",
                "Contribute"
            }

            if show_start {
                button { class: "start-tour", onclick: start_tour, "Start Tour" }
            }

            ContentDrawer {
                selection: selection,
                on_close: clear,
                on_back: go_back,
                on_next: go_next,
                on_view_full_line: view_full_line,
                on_station_select: select_station,
            }
        }
    }
}
