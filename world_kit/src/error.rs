
use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorldError {
    #[error("\"{0}\" can not hold other things")]
    NotAContainer(String),
    #[error("\"{0}\" can not be put inside itself")]
    InsideItself(String),
    #[error("\"{thing}\" is not inside {container}")]
    NotInside { thing: String, container: String },

    #[error("There is no exit called \"{0}\" here")]
    UnknownExit(String),
    #[error("That exit does not lead out of {0}")]
    ExitNotHere(String),
    #[error("That exit is not linked to any rooms")]
    Unlinked,
    #[error("Two exits called \"{exit}\" in {room}")]
    DuplicateExit { exit: String, room: String },

    #[error("Level \"{0}\" has no start room")]
    NoStartRoom(String),
    #[error("The level has not been started")]
    NotStarted,
    #[error("No room with the id \"{0}\"")]
    UnknownRoom(String),

    #[error("Invalid level file: {0}")]
    Level(#[from] toml::de::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, WorldError>;
