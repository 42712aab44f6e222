//! Form state for the project and location editors.
//!
//! Each form is opened with an explicit [`FormMode`]. Submitting validates the
//! fields, produces a [`Submission`] for the caller to send, and resets the
//! form to its blank creation state. Invalid input never produces a
//! submission, so it never reaches the data API.

use crate::model::location::{DEFAULT_POSITION, DEFAULT_SCORE_POINTS};
use crate::model::{
    Coordinates, HomescreenDisplay, Location, LocationDraft, LocationTrigger, ParticipantScoring,
    Project, ProjectDraft,
};

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode<T> {
    Create,
    Edit(T),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission<D> {
    Create(D),
    Update { id: i64, draft: D },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    BlankTitle,
    #[error("Description cannot be empty")]
    BlankDescription,
    #[error("Instructions cannot be empty")]
    BlankInstructions,
    #[error("Location name cannot be empty")]
    BlankLocationName,
    #[error("Score points must be a whole number of zero or more, got {0:?}")]
    InvalidScorePoints(String),
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Editable project fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub initial_clue: String,
    pub homescreen_display: HomescreenDisplay,
    pub participant_scoring: ParticipantScoring,
    pub is_published: bool,
    editing: Option<i64>,
}

impl ProjectForm {
    pub fn new(mode: &FormMode<Project>) -> Self {
        match mode {
            FormMode::Create => Self::default(),
            FormMode::Edit(project) => {
                let draft = project.to_draft();
                Self {
                    title: draft.title,
                    description: draft.description,
                    instructions: draft.instructions,
                    initial_clue: draft.initial_clue,
                    homescreen_display: draft.homescreen_display,
                    participant_scoring: draft.participant_scoring,
                    is_published: draft.is_published,
                    editing: Some(project.id),
                }
            }
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn validate(&self) -> Result<ProjectDraft, ValidationError> {
        if is_blank(&self.title) {
            return Err(ValidationError::BlankTitle);
        }
        if is_blank(&self.description) {
            return Err(ValidationError::BlankDescription);
        }
        if is_blank(&self.instructions) {
            return Err(ValidationError::BlankInstructions);
        }
        Ok(ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            instructions: self.instructions.clone(),
            initial_clue: self.initial_clue.clone(),
            homescreen_display: self.homescreen_display,
            participant_scoring: self.participant_scoring,
            is_published: self.is_published,
        })
    }

    /// Validates, then resets to a blank creation form.
    pub fn submit(&mut self) -> Result<Submission<ProjectDraft>, ValidationError> {
        let draft = self.validate()?;
        let submission = match self.editing {
            Some(id) => Submission::Update { id, draft },
            None => Submission::Create(draft),
        };
        *self = Self::default();
        Ok(submission)
    }
}

/// Editable location fields.
///
/// `score_points` holds the raw input text so a half-typed value survives
/// re-renders; it is parsed on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationForm {
    pub location_name: String,
    pub location_trigger: LocationTrigger,
    pub location_position: String,
    pub score_points: String,
    pub clue: String,
    pub location_content: String,
    project_id: i64,
    // (id, rank) of the location being edited
    editing: Option<(i64, i32)>,
}

impl LocationForm {
    pub fn blank(project_id: i64) -> Self {
        Self {
            location_name: String::new(),
            location_trigger: LocationTrigger::default(),
            location_position: DEFAULT_POSITION.to_string(),
            score_points: DEFAULT_SCORE_POINTS.to_string(),
            clue: String::new(),
            location_content: String::new(),
            project_id,
            editing: None,
        }
    }

    pub fn new(project_id: i64, mode: &FormMode<Location>) -> Self {
        match mode {
            FormMode::Create => Self::blank(project_id),
            FormMode::Edit(location) => Self {
                location_name: location.location_name.clone(),
                location_trigger: location.location_trigger,
                location_position: location.location_position.clone(),
                score_points: location.score_points.to_string(),
                clue: location.clue.clone().unwrap_or_default(),
                location_content: location.location_content.clone().unwrap_or_default(),
                project_id,
                editing: Some((location.id, location.location_order)),
            },
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Non-blocking hint shown under the position field.
    pub fn position_hint(&self) -> Option<&'static str> {
        match Coordinates::parse(&self.location_position) {
            Some(_) => None,
            None => Some("Could not read a latitude and longitude from this position."),
        }
    }

    /// Builds the draft. New locations get rank 0 here; the location editor
    /// assigns the real rank when it appends them.
    pub fn validate(&self) -> Result<LocationDraft, ValidationError> {
        if is_blank(&self.location_name) {
            return Err(ValidationError::BlankLocationName);
        }
        let score_points = self
            .score_points
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidScorePoints(self.score_points.clone()))?;

        Ok(LocationDraft {
            project_id: self.project_id,
            location_name: self.location_name.clone(),
            location_trigger: self.location_trigger,
            location_position: self.location_position.clone(),
            score_points,
            location_order: self.editing.map_or(0, |(_, order)| order),
            clue: self.clue.clone(),
            location_content: self.location_content.clone(),
        })
    }

    pub fn submit(&mut self) -> Result<Submission<LocationDraft>, ValidationError> {
        let draft = self.validate()?;
        let submission = match self.editing {
            Some((id, _)) => Submission::Update { id, draft },
            None => Submission::Create(draft),
        };
        *self = Self::blank(self.project_id);
        Ok(submission)
    }
}
