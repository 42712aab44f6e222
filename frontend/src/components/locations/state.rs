use common::forms::FormMode;
use common::model::{Location, Project};
use common::mutation::MutationGate;
use common::sequence::RequestSeq;

#[derive(Default)]
pub struct LocationsPage {
    pub project: Option<Project>,

    /// Always sorted by `location_order`.
    pub locations: Vec<Location>,

    pub loading: bool,
    pub load_error: Option<String>,

    pub sheet: Option<FormMode<Location>>,
    pub qr_location: Option<Location>,

    pub seq: RequestSeq,

    /// Held while a create, update, delete or move is being persisted;
    /// ranks are only computed against a settled list.
    pub gate: MutationGate,
}

impl LocationsPage {
    pub fn is_first(&self, location: &Location) -> bool {
        self.locations.first().map(|l| l.id) == Some(location.id)
    }

    pub fn is_last(&self, location: &Location) -> bool {
        self.locations.last().map(|l| l.id) == Some(location.id)
    }
}
