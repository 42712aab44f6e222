use common::api::ApiError;
use common::forms::Submission;
use common::model::{Location, LocationDraft, Project};
use common::mutation::{MutationId, StepError};
use common::sequence::Ticket;

pub enum Msg {
    Load,
    Loaded(Ticket, Result<(Project, Vec<Location>), ApiError>),

    OpenCreate,
    /// Re-fetches the location before opening it for editing.
    OpenEdit(i64),
    EditReady(Ticket, Result<Location, ApiError>),
    CloseSheet,

    Submit(Submission<LocationDraft>),
    Saved(Ticket, MutationId, Result<Location, ApiError>),

    Delete(i64),
    Move(i64, i32),
    /// A delete or move finished persisting; `snapshot` is the list before
    /// it was applied locally.
    Settled {
        ticket: Ticket,
        mutation: MutationId,
        action: &'static str,
        done: Option<&'static str>,
        snapshot: Vec<Location>,
        result: Result<(), StepError<ApiError>>,
    },

    ShowQr(Location),
    CloseQr,
}
