use crate::canvas::ItemId;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub catalog_loaded: bool,
    pub last_reported: Option<ItemId>,
}
