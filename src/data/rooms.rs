use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RoomGroup {
    pub name: String,
    pub rooms: Vec<String>,
}

/// Ordered room layout. Group order fixes both the vertical board position
/// and the color index of each group, so it is kept exactly as loaded.
#[derive(Serialize, Deserialize, Default, Debug)]
pub struct RoomLayout {
    pub groups: Vec<RoomGroup>,
}

impl Persistable for RoomLayout {
    fn filename() -> &'static str {
        "rooms.yaml"
    }
    fn is_json() -> bool {
        false
    }
}

impl RoomLayout {
    pub fn contains_room(&self, room: &str) -> bool {
        self.groups
            .iter()
            .any(|g| g.rooms.iter().any(|r| r == room))
    }

    pub fn room_count(&self) -> usize {
        self.groups.iter().map(|g| g.rooms.len()).sum()
    }
}
