//! Menu Commands
//!
//! The numbered main-menu choices and their parsing. Dispatch is an
//! exhaustive match over [`MenuCommand`]; anything that does not parse to a
//! known number is an [`EditorError::InvalidChoice`], never a fallthrough.

use std::str::FromStr;

use crate::error::EditorError;

/// One action selectable from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// `1` - append lines until an empty line
    AddLines,
    /// `2` - show the document with line numbers
    View,
    /// `3` - write the document to a file
    Save,
    /// `4` - replace the document with a file's contents
    Load,
    /// `5` - remove all lines
    Clear,
    /// `6` - end the session
    Exit,
}

impl FromStr for MenuCommand {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        match choice.parse::<u32>() {
            Ok(1) => Ok(Self::AddLines),
            Ok(2) => Ok(Self::View),
            Ok(3) => Ok(Self::Save),
            Ok(4) => Ok(Self::Load),
            Ok(5) => Ok(Self::Clear),
            Ok(6) => Ok(Self::Exit),
            _ => Err(EditorError::InvalidChoice(choice.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_valid_choice() {
        assert_eq!("1".parse::<MenuCommand>().unwrap(), MenuCommand::AddLines);
        assert_eq!("2".parse::<MenuCommand>().unwrap(), MenuCommand::View);
        assert_eq!("3".parse::<MenuCommand>().unwrap(), MenuCommand::Save);
        assert_eq!("4".parse::<MenuCommand>().unwrap(), MenuCommand::Load);
        assert_eq!("5".parse::<MenuCommand>().unwrap(), MenuCommand::Clear);
        assert_eq!("6".parse::<MenuCommand>().unwrap(), MenuCommand::Exit);
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert_eq!(" 2 ".parse::<MenuCommand>().unwrap(), MenuCommand::View);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            "0".parse::<MenuCommand>(),
            Err(EditorError::InvalidChoice(_))
        ));
        assert!(matches!(
            "7".parse::<MenuCommand>(),
            Err(EditorError::InvalidChoice(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(matches!(
            "exit".parse::<MenuCommand>(),
            Err(EditorError::InvalidChoice(_))
        ));
        assert!(matches!(
            "".parse::<MenuCommand>(),
            Err(EditorError::InvalidChoice(_))
        ));
    }
}
