
//! A small text adventure kit. A [`Level`] holds rooms linked by exits, and things which can be
//! put inside rooms or inside other things. [`Game`] plays a level on the console.

mod error;
mod thing;
mod room;
mod level;
mod game;

pub use crate::error::{Result, WorldError};
pub use crate::thing::{ContainerId, Thing, ThingId};
pub use crate::room::{Exit, ExitId, Room, RoomId, DEFAULT_ENTER_MESSAGE, DEFAULT_ROOM_NAME};
pub use crate::level::{level1, Goal, Level};
pub use crate::game::{Game, PROMPT};
