use std::collections::HashMap;

use common::forms::FormMode;
use common::model::Project;
use common::mutation::MutationGate;
use common::sequence::RequestSeq;

#[derive(Default)]
pub struct ProjectsPage {
    pub projects: Vec<Project>,

    /// Number of locations per project id, filled by a second request.
    pub location_counts: HashMap<i64, usize>,

    pub loading: bool,
    pub load_error: Option<String>,

    /// Open add/edit sheet, if any.
    pub sheet: Option<FormMode<Project>>,

    pub seq: RequestSeq,

    /// Held while a create, update or delete is being persisted.
    pub gate: MutationGate,
}

impl ProjectsPage {
    pub fn location_count(&self, project_id: i64) -> usize {
        self.location_counts.get(&project_id).copied().unwrap_or(0)
    }
}
