#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub title: Option<String>,
}
