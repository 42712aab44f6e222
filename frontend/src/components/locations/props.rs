use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct LocationsProps {
    pub api: ApiClient,
    pub project_id: i64,
}
