use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default position offered by the location form.
pub const DEFAULT_POSITION: &str = "(27.4975,153.013276)";

/// Default number of points awarded for a new location.
pub const DEFAULT_SCORE_POINTS: u32 = 5;

/// Condition that reveals a location's content to a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LocationTrigger {
    #[default]
    #[serde(rename = "Location Entry")]
    LocationEntry,
    #[serde(rename = "QR Code Scan")]
    QrCodeScan,
    #[serde(rename = "Both Location Entry and QR Code Scan")]
    Both,
}

impl LocationTrigger {
    pub const ALL: [LocationTrigger; 3] = [
        LocationTrigger::LocationEntry,
        LocationTrigger::QrCodeScan,
        LocationTrigger::Both,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LocationTrigger::LocationEntry => "Location Entry",
            LocationTrigger::QrCodeScan => "QR Code Scan",
            LocationTrigger::Both => "Both Location Entry and QR Code Scan",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Whether participants can unlock this location by scanning its QR code.
    pub fn uses_qr(self) -> bool {
        matches!(self, LocationTrigger::QrCodeScan | LocationTrigger::Both)
    }
}

/// A stored location row as returned by the `/location` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub project_id: i64,
    pub location_name: String,
    #[serde(default)]
    pub location_trigger: LocationTrigger,
    #[serde(default)]
    pub location_position: String,
    #[serde(default)]
    pub score_points: u32,
    #[serde(default)]
    pub location_order: i32,
    #[serde(default)]
    pub clue: Option<String>,
    #[serde(default)]
    pub location_content: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Writable location fields.
///
/// `location_order` is filled in by the location editor, never by the form:
/// new locations are appended after the current last one and edits keep the
/// existing rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDraft {
    pub project_id: i64,
    pub location_name: String,
    pub location_trigger: LocationTrigger,
    pub location_position: String,
    pub score_points: u32,
    pub location_order: i32,
    pub clue: String,
    pub location_content: String,
}

impl Location {
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref().filter(|c| !c.trim().is_empty())
    }

    pub fn content(&self) -> Option<&str> {
        self.location_content
            .as_deref()
            .filter(|c| !c.trim().is_empty())
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::parse(&self.location_position)
    }

    pub fn to_draft(&self) -> LocationDraft {
        LocationDraft {
            project_id: self.project_id,
            location_name: self.location_name.clone(),
            location_trigger: self.location_trigger,
            location_position: self.location_position.clone(),
            score_points: self.score_points,
            location_order: self.location_order,
            clue: self.clue.clone().unwrap_or_default(),
            location_content: self.location_content.clone().unwrap_or_default(),
        }
    }
}

/// A latitude/longitude pair read from a location's free-text position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

static POSITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\(?\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*\)?\s*$")
        .expect("position pattern is valid")
});

impl Coordinates {
    /// Reads `(lat,lng)` or `lat, lng`. Out-of-range values are rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = POSITION_RE.captures(text)?;
        let latitude: f64 = caps.get(1)?.as_str().parse().ok()?;
        let longitude: f64 = caps.get(2)?.as_str().parse().ok()?;
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_position() {
        let coords = Coordinates::parse(DEFAULT_POSITION).unwrap();
        assert_eq!(coords.latitude, 27.4975);
        assert_eq!(coords.longitude, 153.013276);
        assert_eq!(coords.to_string(), DEFAULT_POSITION);
    }

    #[test]
    fn parses_loose_forms() {
        assert!(Coordinates::parse("-27.5, 153").is_some());
        assert!(Coordinates::parse(" ( -27.5 ,153.1 ) ").is_some());
    }

    #[test]
    fn rejects_garbage_and_out_of_range() {
        assert_eq!(Coordinates::parse("the big tree"), None);
        assert_eq!(Coordinates::parse("(91,0)"), None);
        assert_eq!(Coordinates::parse("(0,181)"), None);
        assert_eq!(Coordinates::parse(""), None);
    }

    #[test]
    fn blank_clue_and_content_are_absent() {
        let location = Location {
            id: 1,
            project_id: 1,
            location_name: "A".into(),
            location_trigger: LocationTrigger::QrCodeScan,
            location_position: String::new(),
            score_points: 1,
            location_order: 0,
            clue: Some("   ".into()),
            location_content: Some(String::new()),
            username: None,
        };
        assert_eq!(location.clue(), None);
        assert_eq!(location.content(), None);
        assert!(location.location_trigger.uses_qr());
    }
}
