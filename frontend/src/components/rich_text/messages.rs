use super::state::Tab;

#[derive(Clone)]
pub enum Msg {
    SetTab(Tab),
    UpdateSource(String),
    Undo,
    Redo,
    ApplyStyle(&'static str),
}
