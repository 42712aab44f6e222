use common::api::ApiError;
use common::forms::Submission;
use common::model::{Location, Project, ProjectDraft};
use common::mutation::{MutationId, StepError};
use common::sequence::Ticket;

pub enum Msg {
    Load,
    ProjectsLoaded(Ticket, Result<Vec<Project>, ApiError>),
    LocationsLoaded(Ticket, Result<Vec<Location>, ApiError>),

    OpenCreate,
    OpenEdit(Project),
    CloseSheet,

    Submit(Submission<ProjectDraft>),
    Saved(Ticket, MutationId, Result<Project, ApiError>),

    Delete(i64),
    /// Carries the list as it was before the optimistic removal.
    DeleteSettled {
        ticket: Ticket,
        mutation: MutationId,
        id: i64,
        snapshot: Vec<Project>,
        result: Result<(), StepError<ApiError>>,
    },
}
