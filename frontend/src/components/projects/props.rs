use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectsProps {
    pub api: ApiClient,
}
