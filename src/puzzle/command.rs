// src/puzzle/command.rs

use crate::puzzle::answer::Answer;

/// Help text for remote players; `id` is the module instance they address.
pub fn help_message(id: u32) -> String {
    format!(
        "Use \"!{0} press r\", \"!{0} press n\", \"!{0} r\", or \"!{0} n\" to press a button.",
        id
    )
}

/// Maps a remote command to the button it presses. Case-insensitive.
pub fn parse_command(command: &str) -> Option<Answer> {
    let command = command.trim();
    if command.eq_ignore_ascii_case("press r") || command.eq_ignore_ascii_case("r") {
        Some(Answer::Residue)
    } else if command.eq_ignore_ascii_case("press n") || command.eq_ignore_ascii_case("n") {
        Some(Answer::NonResidue)
    } else {
        None
    }
}
