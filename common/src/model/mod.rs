pub mod location;
pub mod project;

pub use location::{Coordinates, Location, LocationDraft, LocationTrigger};
pub use project::{HomescreenDisplay, ParticipantScoring, Project, ProjectDraft};
