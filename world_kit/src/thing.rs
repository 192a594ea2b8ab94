
use std::fmt;

use crate::room::RoomId;

/// Identifies a thing within the level that created it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThingId(pub(crate) usize);

/// Something which can hold things. Rooms always can, things only if they were created as
/// containers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ContainerId {
    Room(RoomId),
    Thing(ThingId),
}

impl From<RoomId> for ContainerId {
    fn from(room: RoomId) -> ContainerId { ContainerId::Room(room) }
}

impl From<ThingId> for ContainerId {
    fn from(thing: ThingId) -> ContainerId { ContainerId::Thing(thing) }
}

impl fmt::Display for ThingId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Thing {
    pub(crate) id: ThingId,
    pub(crate) name: String,
    pub(crate) parent: Option<ContainerId>,
    /// `None` if this thing can not hold other things
    pub(crate) contents: Option<Vec<ThingId>>,
}

impl Thing {
    pub(crate) fn new(id: ThingId, name: &str, container: bool) -> Thing {
        Thing {
            id,
            name: name.to_owned(),
            parent: None,
            contents: if container { Some(Vec::new()) } else { None },
        }
    }

    pub fn id(&self) -> ThingId { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn parent(&self) -> Option<ContainerId> { self.parent }
    pub fn is_container(&self) -> bool { self.contents.is_some() }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }
}
