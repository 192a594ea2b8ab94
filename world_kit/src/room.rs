
use std::collections::BTreeMap;

use crate::error::{Result, WorldError};
use crate::thing::ThingId;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub(crate) usize);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExitId(pub(crate) usize);

pub const DEFAULT_ROOM_NAME: &str = "an unremarkable room";
/// `{name}` is replaced by the name of the room
pub const DEFAULT_ENTER_MESSAGE: &str = "You enter {name}.";

#[derive(Debug, Clone)]
pub struct Room {
    pub(crate) id: RoomId,
    pub(crate) name: String,
    pub(crate) enter_message: String,
    pub(crate) contents: Vec<ThingId>,
    exits: BTreeMap<String, ExitId>,
}

impl Room {
    pub(crate) fn new(id: RoomId, name: &str) -> Room {
        Room {
            id,
            name: name.to_owned(),
            enter_message: DEFAULT_ENTER_MESSAGE.to_owned(),
            contents: Vec::new(),
            exits: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> RoomId { self.id }
    pub fn name(&self) -> &str { &self.name }

    pub fn set_enter_message(&mut self, message: &str) {
        self.enter_message = message.to_owned();
    }

    /// The message shown when the player walks into this room
    pub fn enter_message(&self) -> String {
        self.enter_message.replace("{name}", &self.name)
    }

    pub fn exit(&self, name: &str) -> Option<ExitId> {
        self.exits.get(name).cloned()
    }

    /// Sorted alphabetically
    pub fn exit_names(&self) -> Vec<&str> {
        self.exits.keys().map(String::as_str).collect()
    }

    pub fn exits(&self) -> impl Iterator<Item = (&str, ExitId)> {
        self.exits.iter().map(|(name, &exit)| (name.as_str(), exit))
    }

    pub(crate) fn add_exit(&mut self, name: &str, exit: ExitId) -> Result<()> {
        if self.exits.contains_key(name) {
            return Err(WorldError::DuplicateExit { exit: name.to_owned(), room: self.name.clone() });
        }
        self.exits.insert(name.to_owned(), exit);
        Ok(())
    }

    pub(crate) fn remove_exit(&mut self, name: &str) -> Option<ExitId> {
        self.exits.remove(name)
    }
}

/// Links two rooms. Each side has its own name for the exit, e.g. `n` in the southern room and `s`
/// in the northern room.
#[derive(Debug, Clone, Default)]
pub struct Exit {
    sides: Option<[(RoomId, String); 2]>,
}

impl Exit {
    pub(crate) fn new() -> Exit {
        Exit { sides: None }
    }

    pub fn sides(&self) -> Option<&[(RoomId, String); 2]> {
        self.sides.as_ref()
    }

    pub fn is_linked(&self) -> bool {
        self.sides.is_some()
    }

    /// The name this exit has in the given room
    pub fn name_in(&self, room: RoomId) -> Option<&str> {
        self.sides.as_ref()?
            .iter()
            .find(|&&(side, _)| side == room)
            .map(|(_, name)| name.as_str())
    }

    /// Finds the room on the other side of this exit when coming from `room`.
    pub fn use_from(&self, room: RoomId) -> Option<RoomId> {
        let [(a, _), (b, _)] = self.sides.as_ref()?;
        if *a == room {
            Some(*b)
        } else if *b == room {
            Some(*a)
        } else {
            None
        }
    }

    pub(crate) fn set_sides(&mut self, sides: Option<[(RoomId, String); 2]>) -> Option<[(RoomId, String); 2]> {
        std::mem::replace(&mut self.sides, sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_names_are_sorted() {
        let mut room = Room::new(RoomId(0), "hall");
        room.add_exit("w", ExitId(0)).unwrap();
        room.add_exit("e", ExitId(1)).unwrap();
        room.add_exit("n", ExitId(2)).unwrap();

        assert_eq!(vec!["e", "n", "w"], room.exit_names());
        assert_eq!(Some(ExitId(2)), room.exit("n"));
        assert_eq!(None, room.exit("s"));

        assert!(room.add_exit("n", ExitId(3)).is_err());
        assert_eq!(Some(ExitId(2)), room.remove_exit("n"));
        assert_eq!(vec!["e", "w"], room.exit_names());
    }

    #[test]
    fn enter_message() {
        let mut room = Room::new(RoomId(0), DEFAULT_ROOM_NAME);
        assert_eq!("You enter an unremarkable room.", room.enter_message());

        room.set_enter_message("It is dark in {name}");
        assert_eq!("It is dark in an unremarkable room", room.enter_message());
    }

    #[test]
    fn exits_lead_to_the_other_side() {
        let mut exit = Exit::new();
        assert_eq!(None, exit.use_from(RoomId(0)));

        exit.set_sides(Some([(RoomId(0), "n".to_owned()), (RoomId(1), "s".to_owned())]));
        assert_eq!(Some(RoomId(1)), exit.use_from(RoomId(0)));
        assert_eq!(Some(RoomId(0)), exit.use_from(RoomId(1)));
        assert_eq!(None, exit.use_from(RoomId(2)));

        assert_eq!(Some("s"), exit.name_in(RoomId(1)));
        assert_eq!(None, exit.name_in(RoomId(2)));
    }
}
