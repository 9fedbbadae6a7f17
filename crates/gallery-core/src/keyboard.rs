use crate::layout::LayoutKind;

/// What a key press asks the gallery to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Close,
    Next,
    Previous,
    Layout(LayoutKind),
}

/// Map a `KeyboardEvent.key`-style name to a gallery command.
#[inline]
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "Escape" => Some(Command::Close),
        "ArrowRight" => Some(Command::Next),
        "ArrowLeft" => Some(Command::Previous),
        "1" => Some(Command::Layout(LayoutKind::Fibonacci)),
        "2" => Some(Command::Layout(LayoutKind::Grid)),
        _ => None,
    }
}
