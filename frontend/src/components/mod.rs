pub mod forms;
pub mod home;
pub mod layout;
pub mod locations;
pub mod not_found;
pub mod preview;
pub mod projects;
pub mod rich_text;
