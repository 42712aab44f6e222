use common::api::ApiError;
use common::model::{Location, Project};
use common::sequence::Ticket;

pub enum Msg {
    Load,
    Loaded(Ticket, Result<(Project, Vec<Location>), ApiError>),
    /// Picker value: the homescreen sentinel or a location id.
    Select(String),
    Restart,
}
