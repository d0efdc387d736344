//! Keys the host routes to the widget

use std::fmt;

/// A key release routed to the widget.
///
/// Only the keys the row reacts to are distinguished; everything else the
/// host reports collapses into [`Key::Other`]. Modifier state is not
/// tracked: Shift+Backspace deletes like Backspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character that does not act as a delimiter
    Char(char),
    Enter,
    Space,
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// The key that produced a typed character
    pub fn from_char(c: char) -> Self {
        match c {
            ' ' => Key::Space,
            '\n' | '\r' => Key::Enter,
            c => Key::Char(c),
        }
    }

    /// Map a host key value (`"Enter"`, `"ArrowLeft"`, `" "`, `"a"`).
    ///
    /// Values are matched exactly, the way the host reports them. Unknown
    /// values are [`Key::Other`].
    pub fn from_key_value(value: &str) -> Self {
        match value {
            "Enter" => Key::Enter,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::from_char(c),
                    _ => Key::Other,
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{:?}", c),
            Key::Enter => f.write_str("Enter"),
            Key::Space => f.write_str("Space"),
            Key::Backspace => f.write_str("Backspace"),
            Key::Delete => f.write_str("Delete"),
            Key::ArrowLeft => f.write_str("ArrowLeft"),
            Key::ArrowRight => f.write_str("ArrowRight"),
            Key::Other => f.write_str("(other)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_chars() {
        assert_eq!(Key::from_char('a'), Key::Char('a'));
        assert_eq!(Key::from_char(' '), Key::Space);
        assert_eq!(Key::from_char('\n'), Key::Enter);
    }

    #[test]
    fn test_host_key_values() {
        assert_eq!(Key::from_key_value("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_key_value(" "), Key::Space);
        assert_eq!(Key::from_key_value("é"), Key::Char('é'));
        assert_eq!(Key::from_key_value("Escape"), Key::Other);
        assert_eq!(Key::from_key_value("Shift"), Key::Other);
        assert_eq!(Key::from_key_value("enter"), Key::Other);
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::ArrowRight.to_string(), "ArrowRight");
        assert_eq!(Key::Char('x').to_string(), "'x'");
        assert_eq!(Key::Other.to_string(), "(other)");
    }
}
