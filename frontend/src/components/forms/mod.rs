pub mod location_form;
pub mod project_form;
