
use std::io::Cursor;

use world_kit::{level1, Game, Goal, Level};

/// Plays `level` with the given input and returns everything that was printed.
fn play(level: Level, input: &str) -> String {
    let mut output = Vec::new();
    let mut game = Game::new(level, Cursor::new(input.as_bytes()), &mut output);
    game.run().unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn quitting() {
    let output = play(level1().unwrap(), "quit\n");
    assert_eq!(
        "You enter an unremarkable room.\nExits: n\nContents: chair\n> Goodbye.\n",
        output,
    );
}

#[test]
fn walking_between_rooms() {
    let output = play(level1().unwrap(), "n\ns\nq\n");
    assert_eq!(
        "You enter an unremarkable room.\nExits: n\nContents: chair\n\
         > You enter an unremarkable room.\nExits: s\nContents: empty sack\n\
         > You enter an unremarkable room.\nExits: n\nContents: chair\n\
         > Goodbye.\n",
        output,
    );
}

#[test]
fn first_level_ends_after_five_commands() {
    let output = play(level1().unwrap(), "n\ns\n\n\nxyzzy\nn\ns\nn\ns\nn\n");

    // Empty lines are not commands, so the game ends after the second `s`
    assert!(output.ends_with("Contents: chair\nYou have completed Level 1.\nGoodbye.\n"), "{}", output);
    assert_eq!(7, output.matches("> ").count());
    assert!(output.contains("Try one of the exits (n) or \"quit\"."));
}

#[test]
fn running_out_of_input() {
    let output = play(level1().unwrap(), "n\n");
    assert!(output.ends_with("> \nGoodbye.\n"), "{}", output);
}

#[test]
fn unknown_exits_are_not_taken() {
    // `s` only exists in the northern room
    let output = play(level1().unwrap(), "s\nquit\n");
    assert_eq!(1, output.matches("You enter").count());
}

#[test]
fn reaching_a_room() {
    let level = Level::from_toml(include_str!("../levels/cellar.toml")).unwrap();
    assert_eq!(&Goal::ReachRoom("the wine cellar".to_owned()), level.goal());

    let output = play(level, "n\ndown\nn\n");
    assert_eq!(
        "You enter a dusty hall.\nExits: n\nContents: chair, empty sack\n\
         > The steps creak as you walk into a narrow staircase.\nExits: down, s\nContents: crate holding lamp\n\
         > You enter the wine cellar.\nExits: up\nContents: \n\
         You have completed The Cellar.\nGoodbye.\n",
        output,
    );
}

#[test]
fn dead_end() {
    let level = Level::from_toml(r#"
        name = "Closet"

        [[rooms]]
        id = "closet"
        name = "a closet"
    "#).unwrap();

    let output = play(level, "open door\nq\n");
    assert!(output.contains("There is no way out of here."), "{}", output);
    assert!(output.ends_with("Goodbye.\n"));
}

#[test]
fn level_without_rooms_fails() {
    let level = Level::new("nothing", Goal::Never);
    let mut output = Vec::new();
    let mut game = Game::new(level, Cursor::new(&b"n\n"[..]), &mut output);
    assert!(game.run().is_err());
}
