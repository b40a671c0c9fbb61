use crate::canvas::ItemId;

#[derive(Debug, Clone)]
pub enum AppEvent {
    AddImage,
    GroupImages,
    SelectOnly(ItemId),
    ToggleSelected(ItemId),
    ClearSelection,
    MoveSelection { dx: i32, dy: i32 },
}
