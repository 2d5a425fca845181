use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationKind {
    Hub,
    Stop,
    Terminus,
}

/// Where a station label sits relative to its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelPlacement {
    Top,
    Bottom,
    Left,
    #[default]
    Right,
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

/// Inline fragment of a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Span {
    Text(String),
    Strong(String),
    Code(String),
    Em(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub title: String,
    pub body: String,
    pub accent: String,
}

/// One block of drawer content. The map core never inspects these; they are
/// carried through to the drawer, which knows how to render each variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Block {
    Callout { title: String, body: String },
    Heading(String),
    Paragraph(Vec<Span>),
    NumberedList(Vec<String>),
    Code(String),
    Quote(String),
    Table { headers: Vec<String>, rows: Vec<Vec<String>> },
    CardGrid(Vec<Card>),
    Link { url: String, title: String, description: Option<String> },
}

pub type Document = Vec<Block>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: String,
    pub name: String,
    pub color: String,
    pub description: String,
    /// SVG path data tracing the line through diagram space.
    pub path: String,
    pub full_content: Option<Document>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub kind: StationKind,
    pub line_id: String,
    pub description: String,
    pub content: Document,
    #[serde(default)]
    pub label_placement: LabelPlacement,
}

/// The whole diagram: lines plus stations. Station declaration order is the
/// global next/back traversal order, crossing line boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub lines: Vec<Line>,
    pub stations: Vec<Station>,
}

impl Catalog {
    /// Check referential integrity: unique ids, every station on a known line.
    pub fn validate(&self) -> Result<(), String> {
        for (i, line) in self.lines.iter().enumerate() {
            if self.lines[..i].iter().any(|l| l.id == line.id) {
                return Err(format!("Duplicate line id '{}'", line.id));
            }
        }
        for (i, station) in self.stations.iter().enumerate() {
            if self.stations[..i].iter().any(|s| s.id == station.id) {
                return Err(format!("Duplicate station id '{}'", station.id));
            }
        }
        for station in &self.stations {
            if self.line(&station.line_id).is_none() {
                return Err(format!(
                    "Station '{}' references unknown line '{}'",
                    station.id, station.line_id
                ));
            }
        }
        Ok(())
    }

    pub fn line(&self, id: &str) -> Option<&Line> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    /// Stations belonging to one line, in declaration order.
    pub fn line_stations<'a>(&'a self, line_id: &'a str) -> impl Iterator<Item = &'a Station> {
        self.stations.iter().filter(move |s| s.line_id == line_id)
    }

    /// Position of a station in the global traversal order.
    pub fn station_index(&self, id: &str) -> Option<usize> {
        self.stations.iter().position(|s| s.id == id)
    }

    pub fn station_ids(&self) -> impl Iterator<Item = &str> {
        self.stations.iter().map(|s| s.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_station(id: &str, line_id: &str) -> Station {
        Station {
            id: id.into(),
            name: id.to_uppercase(),
            x: 100.0,
            y: 200.0,
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
            path: "M 0 0 L 100 100".into(),
            full_content: None,
        }
    }

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
    fn test_validate_accepts_consistent_catalog() {
        assert!(test_catalog().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_line() {
        let mut catalog = test_catalog();
        catalog.stations.push(test_station("ghost", "missing"));
        let err = catalog.validate().unwrap_err();
        assert!(err.contains("ghost"));
        assert!(err.contains("missing"));
    }

    #[test]
    fn test_validate_rejects_duplicate_station_id() {
        let mut catalog = test_catalog();
        catalog.stations.push(test_station("r1", "red"));
        assert!(catalog.validate().unwrap_err().contains("r1"));
    }

    #[test]
    fn test_line_stations_keeps_declaration_order() {
        let catalog = test_catalog();
        let ids: Vec<&str> = catalog.line_stations("red").map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
    }

    #[test]
    fn test_station_index_follows_global_order() {
        let catalog = test_catalog();
        assert_eq!(catalog.station_index("b1"), Some(1));
        assert_eq!(catalog.station_index("nope"), None);
    }

    #[test]
    fn test_station_deserializes_with_default_label_placement() {
        let json = r#"{
            "id": "s1",
            "name": "S1",
            "x": 10.0,
            "y": 20.0,
            "type": "hub",
            "lineId": "red",
            "description": "",
            "content": []
        }"#;
        let station: Station = serde_json::from_str(json).unwrap();
        assert_eq!(station.kind, StationKind::Hub);
        assert_eq!(station.label_placement, LabelPlacement::Right);
    }

    #[test]
    fn test_label_placement_uses_kebab_case() {
        let placement: LabelPlacement = serde_json::from_str("\"top-right\"").unwrap();
        assert_eq!(placement, LabelPlacement::TopRight);
    }
}
