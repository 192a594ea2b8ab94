
//! A level owns every room, exit and thing in it. All of them are referred to by id, and all
//! changes go through the level so that containers and parents always agree.

use log::{debug, info};
use serde::Deserialize;

use crate::error::{Result, WorldError};
use crate::room::{Exit, ExitId, Room, RoomId, DEFAULT_ROOM_NAME};
use crate::thing::{ContainerId, Thing, ThingId};

/// When a level is complete
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Once this many commands have been processed
    AfterActions(u32),
    /// Once the player enters a room with this name
    ReachRoom(String),
    Never,
}

#[derive(Debug, Clone)]
pub struct Level {
    name: String,
    goal: Goal,

    rooms: Vec<Room>,
    exits: Vec<Exit>,
    things: Vec<Thing>,

    start_room: Option<RoomId>,
    current_room: Option<RoomId>,
    actions: u32,
    finished: bool,
}

impl Level {
    pub fn new(name: &str, goal: Goal) -> Level {
        Level {
            name: name.to_owned(),
            goal,

            rooms: Vec::new(),
            exits: Vec::new(),
            things: Vec::new(),

            start_room: None,
            current_room: None,
            actions: 0,
            finished: false,
        }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn goal(&self) -> &Goal { &self.goal }
    pub fn actions(&self) -> u32 { self.actions }
    pub fn is_finished(&self) -> bool { self.finished }

    pub fn add_room(&mut self, name: &str) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room::new(id, name));
        debug!("Created room {:?} \"{}\"", id, name);
        id
    }

    pub fn room(&self, id: RoomId) -> &Room { &self.rooms[id.0] }
    pub fn room_mut(&mut self, id: RoomId) -> &mut Room { &mut self.rooms[id.0] }
    pub fn rooms(&self) -> &[Room] { &self.rooms }

    pub fn find_room(&self, name: &str) -> Option<RoomId> {
        self.rooms.iter().find(|room| room.name == name).map(|room| room.id)
    }

    /// Creates a new thing which is not inside anything yet.
    pub fn add_thing(&mut self, name: &str, container: bool) -> ThingId {
        let id = ThingId(self.things.len());
        self.things.push(Thing::new(id, name, container));
        debug!("Created thing {} \"{}\"", id, name);
        id
    }

    pub fn thing(&self, id: ThingId) -> &Thing { &self.things[id.0] }
    pub fn thing_mut(&mut self, id: ThingId) -> &mut Thing { &mut self.things[id.0] }

    pub fn exit(&self, id: ExitId) -> &Exit { &self.exits[id.0] }

    fn container_name(&self, container: ContainerId) -> String {
        match container {
            ContainerId::Room(room) => self.room(room).name.clone(),
            ContainerId::Thing(thing) => self.thing(thing).name.clone(),
        }
    }

    fn contents_mut(&mut self, container: ContainerId) -> Result<&mut Vec<ThingId>> {
        match container {
            ContainerId::Room(room) => Ok(&mut self.rooms[room.0].contents),
            ContainerId::Thing(thing) => {
                let thing = &mut self.things[thing.0];
                match thing.contents {
                    Some(ref mut contents) => Ok(contents),
                    None => Err(WorldError::NotAContainer(thing.name.clone())),
                }
            },
        }
    }

    pub fn contents(&self, container: impl Into<ContainerId>) -> &[ThingId] {
        match container.into() {
            ContainerId::Room(room) => &self.room(room).contents,
            ContainerId::Thing(thing) => match self.thing(thing).contents {
                Some(ref contents) => contents,
                None => &[],
            },
        }
    }

    pub fn count(&self, container: impl Into<ContainerId>) -> usize {
        self.contents(container).len()
    }

    pub fn is_empty(&self, container: impl Into<ContainerId>) -> bool {
        self.contents(container).is_empty()
    }

    /// Puts `thing` into `container`, taking it out of whatever it was in before.
    pub fn add(&mut self, container: impl Into<ContainerId>, thing: ThingId) -> Result<()> {
        let container = container.into();

        // A thing can't end up inside itself, not even through other containers
        let mut outer = Some(container);
        while let Some(ContainerId::Thing(id)) = outer {
            if id == thing {
                return Err(WorldError::InsideItself(self.thing(thing).name.clone()));
            }
            outer = self.thing(id).parent;
        }

        self.contents_mut(container)?;
        if let Some(previous) = self.thing(thing).parent {
            self.remove(previous, thing)?;
        }

        self.contents_mut(container)?.push(thing);
        self.things[thing.0].parent = Some(container);
        Ok(())
    }

    pub fn remove(&mut self, container: impl Into<ContainerId>, thing: ThingId) -> Result<()> {
        let container = container.into();
        let contents = self.contents_mut(container)?;

        match contents.iter().position(|&t| t == thing) {
            Some(index) => {
                contents.remove(index);
                self.things[thing.0].parent = None;
                Ok(())
            },
            None => Err(WorldError::NotInside {
                thing: self.thing(thing).name.clone(),
                container: self.container_name(container),
            }),
        }
    }

    /// Takes everything out of the container. The things stay in the level, but are not inside
    /// anything afterwards.
    pub fn empty(&mut self, container: impl Into<ContainerId>) {
        let container = container.into();
        let removed = match self.contents_mut(container) {
            Ok(contents) => std::mem::replace(contents, Vec::new()),
            Err(_) => return,
        };
        for thing in removed {
            self.things[thing.0].parent = None;
        }
    }

    /// Connects two rooms with a new exit, called `name1` in `room1` and `name2` in `room2`.
    pub fn link(&mut self, room1: RoomId, name1: &str, room2: RoomId, name2: &str) -> Result<ExitId> {
        let id = ExitId(self.exits.len());
        self.exits.push(Exit::new());
        if let Err(err) = self.relink(id, room1, name1, room2, name2) {
            self.exits.pop();
            return Err(err);
        }
        Ok(id)
    }

    /// Moves an existing exit so it connects the given rooms instead. If either name is already
    /// taken by another exit, nothing changes.
    pub fn relink(&mut self, exit: ExitId, room1: RoomId, name1: &str, room2: RoomId, name2: &str) -> Result<()> {
        if room1 == room2 && name1 == name2 {
            return Err(self.duplicate_exit(room1, name1));
        }
        for &(room, name) in [(room1, name1), (room2, name2)].iter() {
            match self.room(room).exit(name) {
                Some(other) if other != exit => return Err(self.duplicate_exit(room, name)),
                _ => {},
            }
        }

        self.unlink(exit);
        self.rooms[room1.0].add_exit(name1, exit)?;
        self.rooms[room2.0].add_exit(name2, exit)?;

        self.exits[exit.0].set_sides(Some([(room1, name1.to_owned()), (room2, name2.to_owned())]));
        debug!("Linked \"{}\" --{}/{}-- \"{}\"", self.room(room1).name, name1, name2, self.room(room2).name);
        Ok(())
    }

    fn duplicate_exit(&self, room: RoomId, name: &str) -> WorldError {
        WorldError::DuplicateExit { exit: name.to_owned(), room: self.room(room).name.clone() }
    }

    /// Removes the exit from both rooms it connects.
    pub fn unlink(&mut self, exit: ExitId) {
        if let Some(sides) = self.exits[exit.0].set_sides(None) {
            for (room, name) in sides.iter() {
                self.rooms[room.0].remove_exit(name);
            }
        }
    }

    /// The room on the other side of `exit` when standing in `room`.
    pub fn use_exit_from(&self, exit: ExitId, room: RoomId) -> Result<RoomId> {
        let exit = self.exit(exit);
        if !exit.is_linked() {
            return Err(WorldError::Unlinked);
        }
        exit.use_from(room).ok_or_else(|| WorldError::ExitNotHere(self.room(room).name.clone()))
    }

    pub fn start_room(&self) -> Option<RoomId> { self.start_room }

    pub fn set_start_room(&mut self, room: RoomId) {
        self.start_room = Some(room);
    }

    /// The room the player is in. `None` until the level is started.
    pub fn current_room(&self) -> Option<RoomId> { self.current_room }

    /// Puts the player in the start room.
    pub fn start(&mut self) -> Result<RoomId> {
        let start = self.start_room.ok_or_else(|| WorldError::NoStartRoom(self.name.clone()))?;
        info!("Starting \"{}\"", self.name);
        self.actions = 0;
        self.finished = false;
        self.enter(start);
        Ok(start)
    }

    pub fn enter(&mut self, room: RoomId) {
        debug!("Entering \"{}\"", self.room(room).name);
        self.current_room = Some(room);
    }

    /// Walks through the exit with the given name in the current room, returning the room the
    /// player ends up in.
    pub fn go(&mut self, exit_name: &str) -> Result<RoomId> {
        let current = self.current_room.ok_or(WorldError::NotStarted)?;
        let exit = self.room(current).exit(exit_name)
            .ok_or_else(|| WorldError::UnknownExit(exit_name.to_owned()))?;
        let next = self.use_exit_from(exit, current)?;
        self.enter(next);
        Ok(next)
    }

    /// Counts one processed command towards the goal.
    pub fn record_action(&mut self) {
        self.actions += 1;
        debug!("Actions performed: {}", self.actions);
    }

    pub fn is_complete(&self) -> bool {
        match self.goal {
            Goal::AfterActions(count) => self.actions >= count,
            Goal::ReachRoom(ref name) => match self.current_room {
                Some(room) => self.room(room).name == *name,
                None => false,
            },
            Goal::Never => false,
        }
    }

    pub fn finish(&mut self) {
        info!("Finished \"{}\" after {} actions", self.name, self.actions);
        self.finished = true;
    }

    /// How a thing is listed among the contents of a room.
    pub fn describe_thing(&self, thing: ThingId) -> String {
        let thing = self.thing(thing);
        match thing.contents {
            Some(ref contents) if contents.is_empty() => format!("empty {}", thing.name),
            Some(ref contents) => {
                let inner = contents.iter().map(|&t| self.describe_thing(t)).collect::<Vec<_>>();
                format!("{} holding {}", thing.name, inner.join(", "))
            },
            None => thing.name.clone(),
        }
    }

    /// What the player sees when walking into a room.
    pub fn describe_room(&self, room: RoomId) -> String {
        let room = self.room(room);
        let contents = room.contents.iter().map(|&t| self.describe_thing(t)).collect::<Vec<_>>();
        format!(
            "{}\nExits: {}\nContents: {}",
            room.enter_message(),
            room.exit_names().join(", "),
            contents.join(", "),
        )
    }

    /// Parses a level description. See `levels/cellar.toml` for an example.
    pub fn from_toml(source: &str) -> Result<Level> {
        let def: LevelDef = toml::from_str(source)?;
        def.build()
    }
}

/// The first level: two rooms, a chair and an empty sack. Completed after five commands.
pub fn level1() -> Result<Level> {
    let mut level = Level::new("Level 1", Goal::AfterActions(5));

    let entrance = level.add_room(DEFAULT_ROOM_NAME);
    let chair = level.add_thing("chair", false);
    level.add(entrance, chair)?;

    let room1 = level.add_room(DEFAULT_ROOM_NAME);
    let sack = level.add_thing("sack", true);
    level.add(room1, sack)?;

    level.link(entrance, "n", room1, "s")?;
    level.set_start_room(entrance);
    Ok(level)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LevelDef {
    name: String,
    #[serde(default = "never")]
    goal: Goal,
    /// Id of the start room. Defaults to the first room.
    start: Option<String>,
    #[serde(default)]
    rooms: Vec<RoomDef>,
    #[serde(default)]
    exits: Vec<ExitDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RoomDef {
    id: String,
    name: Option<String>,
    enter_message: Option<String>,
    #[serde(default)]
    contents: Vec<ThingDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThingDef {
    name: String,
    #[serde(default)]
    container: bool,
    #[serde(default)]
    contents: Vec<ThingDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExitDef {
    from: String,
    name: String,
    to: String,
    back: String,
}

fn never() -> Goal { Goal::Never }

impl LevelDef {
    fn build(self) -> Result<Level> {
        let mut level = Level::new(&self.name, self.goal);
        let mut ids = Vec::with_capacity(self.rooms.len());

        for def in self.rooms.iter() {
            let room = level.add_room(def.name.as_ref().unwrap_or(&def.id));
            if let Some(ref message) = def.enter_message {
                level.room_mut(room).set_enter_message(message);
            }
            for thing in def.contents.iter() {
                thing.build(&mut level, room.into())?;
            }
            ids.push((def.id.as_str(), room));
        }

        let lookup = |id: &str| {
            ids.iter()
                .find(|&&(name, _)| name == id)
                .map(|&(_, room)| room)
                .ok_or_else(|| WorldError::UnknownRoom(id.to_owned()))
        };

        for exit in self.exits.iter() {
            level.link(lookup(&exit.from)?, &exit.name, lookup(&exit.to)?, &exit.back)?;
        }

        let start = match self.start {
            Some(ref id) => Some(lookup(id)?),
            None => ids.first().map(|&(_, room)| room),
        };
        if let Some(start) = start {
            level.set_start_room(start);
        }

        Ok(level)
    }
}

impl ThingDef {
    fn build(&self, level: &mut Level, container: ContainerId) -> Result<ThingId> {
        let container_flag = self.container || !self.contents.is_empty();
        let thing = level.add_thing(&self.name, container_flag);
        level.add(container, thing)?;
        for inner in self.contents.iter() {
            inner.build(level, thing.into())?;
        }
        Ok(thing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut level = Level::new("test", Goal::Never);
        let a = level.add_thing("a", false);
        let b = level.add_thing("b", false);
        assert_ne!(a, b);
        assert_eq!("b", level.thing(b).name());
    }

    #[test]
    fn containers() {
        let mut level = Level::new("test", Goal::Never);
        let room = level.add_room("hall");
        let sack = level.add_thing("sack", true);
        let chair = level.add_thing("chair", false);
        let apple = level.add_thing("apple", false);

        level.add(room, sack).unwrap();
        level.add(room, chair).unwrap();
        assert_eq!(&[sack, chair], level.contents(room));
        assert_eq!(Some(ContainerId::Room(room)), level.thing(chair).parent());

        // Moving something takes it out of where it was
        level.add(room, apple).unwrap();
        level.add(sack, apple).unwrap();
        assert_eq!(2, level.count(room));
        assert_eq!(&[apple], level.contents(sack));
        assert_eq!(Some(ContainerId::Thing(sack)), level.thing(apple).parent());
        assert_eq!("sack holding apple", level.describe_thing(sack));

        assert!(level.add(chair, apple).is_err());
        assert!(level.add(sack, sack).is_err());
        assert!(level.remove(room, apple).is_err());

        level.remove(sack, apple).unwrap();
        assert!(level.is_empty(sack));
        assert_eq!(None, level.thing(apple).parent());
        assert_eq!("empty sack", level.describe_thing(sack));

        level.empty(room);
        assert!(level.is_empty(room));
        assert_eq!(None, level.thing(sack).parent());
        assert_eq!(None, level.thing(chair).parent());
    }

    #[test]
    fn nothing_ends_up_inside_itself() {
        let mut level = Level::new("test", Goal::Never);
        let box1 = level.add_thing("box", true);
        let box2 = level.add_thing("smaller box", true);
        level.add(box1, box2).unwrap();
        assert!(level.add(box2, box1).is_err());
        assert_eq!(None, level.thing(box1).parent());
    }

    #[test]
    fn linking_rooms() {
        let mut level = Level::new("test", Goal::Never);
        let a = level.add_room("a");
        let b = level.add_room("b");
        let c = level.add_room("c");

        let exit = level.link(a, "n", b, "s").unwrap();
        assert_eq!(Some(exit), level.room(a).exit("n"));
        assert_eq!(Some(exit), level.room(b).exit("s"));
        assert_eq!(b, level.use_exit_from(exit, a).unwrap());
        assert_eq!(a, level.use_exit_from(exit, b).unwrap());
        assert!(level.use_exit_from(exit, c).is_err());

        // Can't have the same exit name twice in a room
        assert!(level.link(a, "n", c, "s").is_err());
        assert!(level.room(c).exit_names().is_empty());

        level.unlink(exit);
        assert!(level.room(a).exit_names().is_empty());
        assert!(level.room(b).exit_names().is_empty());
        assert!(level.use_exit_from(exit, a).is_err());

        level.relink(exit, a, "e", c, "w").unwrap();
        assert_eq!(c, level.use_exit_from(exit, a).unwrap());
    }

    #[test]
    fn failed_relink_keeps_the_old_link() {
        let mut level = Level::new("test", Goal::Never);
        let a = level.add_room("a");
        let b = level.add_room("b");
        let c = level.add_room("c");

        let north = level.link(a, "n", b, "s").unwrap();
        let east = level.link(a, "e", c, "w").unwrap();

        // `e` is taken by the other exit in `a`
        match level.relink(north, a, "e", b, "s") {
            Err(WorldError::DuplicateExit { exit, room }) => {
                assert_eq!("e", exit);
                assert_eq!("a", room);
            },
            other => panic!("Expected a duplicate exit error, got {:?}", other),
        }
        assert_eq!(b, level.use_exit_from(north, a).unwrap());
        assert_eq!(Some(north), level.room(a).exit("n"));
        assert_eq!(Some(north), level.room(b).exit("s"));
        assert_eq!(Some(east), level.room(a).exit("e"));

        // Both ends can't share a name in the same room
        assert!(level.relink(north, c, "x", c, "x").is_err());
        assert_eq!(Some(north), level.room(b).exit("s"));

        // Reusing its own names is fine
        level.relink(north, a, "n", c, "s").unwrap();
        assert_eq!(c, level.use_exit_from(north, a).unwrap());
        assert!(level.room(b).exit_names().is_empty());
    }

    #[test]
    fn first_level_builds() {
        let level = level1().unwrap();
        assert_eq!(2, level.rooms().len());
        assert_eq!(&Goal::AfterActions(5), level.goal());
    }

    #[test]
    fn walking_around() {
        let mut level = level1().unwrap();
        assert!(level.go("n").is_err());

        let start = level.start().unwrap();
        assert_eq!(Some(start), level.current_room());
        assert!(level.go("s").is_err());

        let north = level.go("n").unwrap();
        assert_ne!(start, north);
        assert_eq!(start, level.go("s").unwrap());
    }

    #[test]
    fn goals() {
        let mut level = level1().unwrap();
        level.start().unwrap();
        for _ in 0..4 {
            level.record_action();
            assert!(!level.is_complete());
        }
        level.record_action();
        assert!(level.is_complete());

        let mut level = Level::new("test", Goal::ReachRoom("b".to_owned()));
        let a = level.add_room("a");
        let b = level.add_room("b");
        level.link(a, "n", b, "s").unwrap();
        level.set_start_room(a);
        assert!(!level.is_complete());
        level.start().unwrap();
        assert!(!level.is_complete());
        level.go("n").unwrap();
        assert!(level.is_complete());
    }

    #[test]
    fn no_start_room() {
        let mut level = Level::new("empty", Goal::Never);
        assert!(level.start().is_err());
    }

    #[test]
    fn first_level() {
        let level = level1().unwrap();
        let start = level.start_room().unwrap();
        assert_eq!(
            "You enter an unremarkable room.\nExits: n\nContents: chair",
            level.describe_room(start),
        );

        let north = level.use_exit_from(level.room(start).exit("n").unwrap(), start).unwrap();
        assert_eq!(
            "You enter an unremarkable room.\nExits: s\nContents: empty sack",
            level.describe_room(north),
        );
    }

    #[test]
    fn level_from_toml() {
        let level = Level::from_toml(r#"
            name = "Cellar"
            goal = { reach_room = "the wine cellar" }
            start = "stairs"

            [[rooms]]
            id = "stairs"
            name = "a narrow staircase"
            contents = [
                { name = "lamp" },
                { name = "crate", contents = [{ name = "bottle" }] },
            ]

            [[rooms]]
            id = "cellar"
            name = "the wine cellar"
            enter_message = "It is cold in {name}."

            [[exits]]
            from = "stairs"
            name = "down"
            to = "cellar"
            back = "up"
        "#).unwrap();

        assert_eq!("Cellar", level.name());
        assert_eq!(&Goal::ReachRoom("the wine cellar".to_owned()), level.goal());

        let stairs = level.start_room().unwrap();
        assert_eq!(
            "You enter a narrow staircase.\nExits: down\nContents: lamp, crate holding bottle",
            level.describe_room(stairs),
        );

        let cellar = level.find_room("the wine cellar").unwrap();
        assert_eq!("It is cold in the wine cellar.", level.room(cellar).enter_message());
        assert_eq!(vec!["up"], level.room(cellar).exit_names());
    }

    #[test]
    fn bad_levels() {
        assert!(Level::from_toml("name = 3").is_err());
        assert!(Level::from_toml("name = \"x\"\nfoo = 1").is_err());

        let unknown_room = r#"
            name = "broken"
            [[rooms]]
            id = "a"
            [[exits]]
            from = "a"
            name = "n"
            to = "b"
            back = "s"
        "#;
        match Level::from_toml(unknown_room) {
            Err(WorldError::UnknownRoom(id)) => assert_eq!("b", id),
            other => panic!("Expected unknown room error, got {:?}", other),
        }

        let level = Level::from_toml("name = \"empty\"").unwrap();
        assert_eq!(&Goal::Never, level.goal());
        assert_eq!(None, level.start_room());
    }
}
