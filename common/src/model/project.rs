use serde::{Deserialize, Serialize};

/// What a participant sees on the homescreen before opening any location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HomescreenDisplay {
    #[default]
    #[serde(rename = "Display initial clue")]
    InitialClue,
    #[serde(rename = "Display all locations")]
    AllLocations,
}

impl HomescreenDisplay {
    pub const ALL: [HomescreenDisplay; 2] =
        [HomescreenDisplay::InitialClue, HomescreenDisplay::AllLocations];

    /// Wire value stored in the `homescreen_display` column.
    pub fn as_str(self) -> &'static str {
        match self {
            HomescreenDisplay::InitialClue => "Display initial clue",
            HomescreenDisplay::AllLocations => "Display all locations",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

/// How participants are scored while playing a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParticipantScoring {
    #[default]
    #[serde(rename = "Not Scored")]
    NotScored,
    #[serde(rename = "Number of Scanned QR Codes")]
    QrScans,
    #[serde(rename = "Number of Locations Entered")]
    LocationsEntered,
}

impl ParticipantScoring {
    pub const ALL: [ParticipantScoring; 3] = [
        ParticipantScoring::NotScored,
        ParticipantScoring::QrScans,
        ParticipantScoring::LocationsEntered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ParticipantScoring::NotScored => "Not Scored",
            ParticipantScoring::QrScans => "Number of Scanned QR Codes",
            ParticipantScoring::LocationsEntered => "Number of Locations Entered",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// A stored project row as returned by the `/project` endpoint.
///
/// `username` is the owning account; the data API enforces row ownership with
/// it, so it is always present on rows we read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub initial_clue: Option<String>,
    #[serde(default)]
    pub homescreen_display: HomescreenDisplay,
    #[serde(default)]
    pub participant_scoring: ParticipantScoring,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub username: Option<String>,
}

/// Writable project fields, sent as the body of create and update requests.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub initial_clue: String,
    pub homescreen_display: HomescreenDisplay,
    pub participant_scoring: ParticipantScoring,
    pub is_published: bool,
}

impl Project {
    pub fn initial_clue(&self) -> &str {
        self.initial_clue.as_deref().unwrap_or_default()
    }

    pub fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            instructions: self.instructions.clone(),
            initial_clue: self.initial_clue().to_string(),
            homescreen_display: self.homescreen_display,
            participant_scoring: self.participant_scoring,
            is_published: self.is_published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_postgrest_row() {
        let row = json!({
            "id": 7,
            "title": "City Tour",
            "description": "d",
            "instructions": "walk",
            "initial_clue": null,
            "homescreen_display": "Display all locations",
            "participant_scoring": "Number of Locations Entered",
            "is_published": true,
            "username": "s1234567"
        });

        let project: Project = serde_json::from_value(row).unwrap();
        assert_eq!(project.homescreen_display, HomescreenDisplay::AllLocations);
        assert_eq!(project.participant_scoring, ParticipantScoring::LocationsEntered);
        assert_eq!(project.initial_clue(), "");
    }

    #[test]
    fn wire_names_match_serde() {
        for scoring in ParticipantScoring::ALL {
            let encoded = serde_json::to_value(scoring).unwrap();
            assert_eq!(encoded, json!(scoring.as_str()));
            assert_eq!(ParticipantScoring::from_wire(scoring.as_str()), Some(scoring));
        }
        for display in HomescreenDisplay::ALL {
            assert_eq!(HomescreenDisplay::from_wire(display.as_str()), Some(display));
        }
    }
}
