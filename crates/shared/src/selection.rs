use crate::models::Catalog;

/// What the user currently has open: nothing, one station, or one line.
/// The two selection kinds are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Station(String),
    Line(String),
}

impl Selection {
    pub fn station_id(&self) -> Option<&str> {
        match self {
            Selection::Station(id) => Some(id),
            _ => None,
        }
    }

    pub fn line_id(&self) -> Option<&str> {
        match self {
            Selection::Line(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    /// Select a station, displacing any line selection. Returns whether the
    /// selection changed; unknown ids leave it untouched.
    pub fn select_station(&mut self, catalog: &Catalog, id: &str) -> bool {
        if catalog.station(id).is_none() {
            return false;
        }
        let next = Selection::Station(id.to_string());
        if *self == next {
            return false;
        }
        *self = next;
        true
    }

    /// Select a line, displacing any station selection. Returns whether the
    /// selection changed; unknown ids leave it untouched.
    pub fn select_line(&mut self, catalog: &Catalog, id: &str) -> bool {
        if catalog.line(id).is_none() {
            return false;
        }
        let next = Selection::Line(id.to_string());
        if *self == next {
            return false;
        }
        *self = next;
        true
    }

    /// Drop any selection. Returns whether there was one.
    pub fn clear(&mut self) -> bool {
        if self.is_none() {
            return false;
        }
        *self = Selection::None;
        true
    }

    /// Jump from the selected station to its parent line. No-op without a
    /// station selection or when the parent line cannot be resolved.
    pub fn view_parent_line(&mut self, catalog: &Catalog) -> bool {
        let Some(station_id) = self.station_id() else {
            return false;
        };
        let Some(station) = catalog.station(station_id) else {
            return false;
        };
        let line_id = station.line_id.clone();
        self.select_line(catalog, &line_id)
    }

    /// Step to the next station in global declaration order, crossing line
    /// boundaries. No-op at the end of the list or without a station selection.
    pub fn next(&mut self, catalog: &Catalog) -> bool {
        self.step(catalog, 1)
    }

    /// Step to the previous station in global declaration order.
    pub fn back(&mut self, catalog: &Catalog) -> bool {
        self.step(catalog, -1)
    }

    fn step(&mut self, catalog: &Catalog, delta: isize) -> bool {
        let Some(current_id) = self.station_id() else {
            return false;
        };
        let Some(index) = catalog.station_index(current_id) else {
            return false;
        };
        let Some(neighbor) = index
            .checked_add_signed(delta)
            .and_then(|i| catalog.stations.get(i))
        else {
            return false;
        };
        *self = Selection::Station(neighbor.id.clone());
        true
    }
}

/// Next/back availability for a selection, derived fresh from the station
/// order on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationStatus {
    pub index: Option<usize>,
    pub has_next: bool,
    pub has_back: bool,
}

pub fn navigation_status<'a, I>(selection: &Selection, ordered_station_ids: I) -> NavigationStatus
where
    I: IntoIterator<Item = &'a str>,
{
    let selected = selection.station_id();
    let mut index = None;
    let mut count = 0;
    for (i, station_id) in ordered_station_ids.into_iter().enumerate() {
        if Some(station_id) == selected {
            index = Some(i);
        }
        count = i + 1;
    }
    NavigationStatus {
        index,
        has_next: index.is_some_and(|i| i + 1 < count),
        has_back: index.is_some_and(|i| i > 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LabelPlacement, Line, Station, StationKind};

    fn test_station(id: &str, line_id: &str) -> Station {
        Station {
            id: id.into(),
            name: id.to_uppercase(),
            x: 0.0,
            y: 0.0,
            kind: StationKind::Stop,
            line_id: line_id.into(),
            description: "".into(),
            content: Vec::new(),
            label_placement: LabelPlacement::default(),
        }
    }

    fn test_line(id: &str) -> Line {
        Line {
            id: id.into(),
            name: id.to_uppercase(),
            color: "#112233".into(),
            description: "".into(),
            path: "M 0 0 L 10 10".into(),
            full_content: None,
        }
    }

    // r1 -> b1 -> r2: declaration order deliberately interleaves the lines
    fn test_catalog() -> Catalog {
        Catalog {
            lines: vec![test_line("red"), test_line("blue")],
            stations: vec![
                test_station("r1", "red"),
                test_station("b1", "blue"),
                test_station("r2", "red"),
            ],
        }
    }

    #[test]
    fn test_selection_kinds_are_mutually_exclusive() {
        let catalog = test_catalog();
        let mut selection = Selection::default();
        assert!(selection.select_line(&catalog, "red"));
        assert!(selection.select_station(&catalog, "b1"));
        assert_eq!(selection, Selection::Station("b1".into()));
        assert!(selection.line_id().is_none());
        assert!(selection.select_line(&catalog, "blue"));
        assert_eq!(selection, Selection::Line("blue".into()));
        assert!(selection.station_id().is_none());
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let catalog = test_catalog();
        let mut selection = Selection::default();
        assert!(!selection.select_station(&catalog, "nope"));
        assert!(!selection.select_line(&catalog, "nope"));
        assert!(selection.is_none());
    }

    #[test]
    fn test_reselecting_reports_no_change() {
        let catalog = test_catalog();
        let mut selection = Selection::default();
        assert!(selection.select_station(&catalog, "r1"));
        assert!(!selection.select_station(&catalog, "r1"));
        assert!(selection.select_line(&catalog, "red"));
        assert!(!selection.select_line(&catalog, "red"));
    }

    #[test]
    fn test_clear_reports_whether_anything_was_selected() {
        let catalog = test_catalog();
        let mut selection = Selection::default();
        assert!(!selection.clear());
        selection.select_station(&catalog, "r1");
        assert!(selection.clear());
        assert!(selection.is_none());
        assert!(!selection.clear());
    }

    #[test]
    fn test_view_parent_line_resolves_the_owning_line() {
        let catalog = test_catalog();
        let mut selection = Selection::default();
        selection.select_station(&catalog, "b1");
        assert!(selection.view_parent_line(&catalog));
        assert_eq!(selection, Selection::Line("blue".into()));
    }

    #[test]
    fn test_view_parent_line_requires_a_station() {
        let catalog = test_catalog();
        let mut selection = Selection::default();
        assert!(!selection.view_parent_line(&catalog));
        selection.select_line(&catalog, "red");
        assert!(!selection.view_parent_line(&catalog));
        assert_eq!(selection, Selection::Line("red".into()));
    }

    #[test]
    fn test_next_crosses_line_boundaries() {
        let catalog = test_catalog();
        let mut selection = Selection::default();
        selection.select_station(&catalog, "r1");
        assert!(selection.next(&catalog));
        assert_eq!(selection, Selection::Station("b1".into()));
        assert!(selection.next(&catalog));
        assert_eq!(selection, Selection::Station("r2".into()));
    }

    #[test]
    fn test_next_stops_at_the_end() {
        let catalog = test_catalog();
        let mut selection = Selection::default();
        selection.select_station(&catalog, "r2");
        assert!(!selection.next(&catalog));
        assert_eq!(selection, Selection::Station("r2".into()));
    }

    #[test]
    fn test_back_stops_at_the_start() {
        let catalog = test_catalog();
        let mut selection = Selection::default();
        selection.select_station(&catalog, "r1");
        assert!(!selection.back(&catalog));
        assert_eq!(selection, Selection::Station("r1".into()));
    }

    #[test]
    fn test_next_then_back_returns_to_the_start() {
        let catalog = test_catalog();
        let mut selection = Selection::default();
        selection.select_station(&catalog, "b1");
        assert!(selection.next(&catalog));
        assert!(selection.back(&catalog));
        assert_eq!(selection, Selection::Station("b1".into()));
    }

    #[test]
    fn test_navigation_needs_a_station_selection() {
        let catalog = test_catalog();
        let mut selection = Selection::default();
        assert!(!selection.next(&catalog));
        selection.select_line(&catalog, "red");
        assert!(!selection.next(&catalog));
        assert!(!selection.back(&catalog));
    }

    #[test]
    fn test_navigation_status_at_each_position() {
        let ids = ["r1", "b1", "r2"];
        let first = navigation_status(&Selection::Station("r1".into()), ids);
        assert_eq!(first.index, Some(0));
        assert!(first.has_next);
        assert!(!first.has_back);
        let middle = navigation_status(&Selection::Station("b1".into()), ids);
        assert_eq!(middle.index, Some(1));
        assert!(middle.has_next);
        assert!(middle.has_back);
        let last = navigation_status(&Selection::Station("r2".into()), ids);
        assert_eq!(last.index, Some(2));
        assert!(!last.has_next);
        assert!(last.has_back);
    }

    #[test]
    fn test_navigation_status_without_station() {
        let ids = ["r1", "b1", "r2"];
        for selection in [Selection::None, Selection::Line("red".into())] {
            let status = navigation_status(&selection, ids);
            assert_eq!(status.index, None);
            assert!(!status.has_next);
            assert!(!status.has_back);
        }
    }
}
