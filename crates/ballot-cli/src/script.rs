//! Line protocol for `ballot-cli interactive`.

use ballot_core::{NavKey, UiEvent};

/// One parsed stdin line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptLine {
    Event(UiEvent),
    /// Search without going through the suggestion list.
    Search(String),
    Quit,
    /// An unknown `:command`.
    Unknown(String),
}

/// Parses a line. Anything not starting with `:` is typed text.
///
/// Suggestion numbers are 1-based as printed; `:pick 1` clicks the first row.
pub fn parse_line(line: &str) -> ScriptLine {
    let Some(command) = line.strip_prefix(':') else {
        return ScriptLine::Event(UiEvent::Input(line.to_owned()));
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command.trim(), ""),
    };

    match name {
        "down" => ScriptLine::Event(UiEvent::Key(NavKey::Down)),
        "up" => ScriptLine::Event(UiEvent::Key(NavKey::Up)),
        "enter" => ScriptLine::Event(UiEvent::Key(NavKey::Enter)),
        "outside" => ScriptLine::Event(UiEvent::Click {
            inside_search_region: false,
        }),
        "inside" => ScriptLine::Event(UiEvent::Click {
            inside_search_region: true,
        }),
        "pick" => match rest.parse::<usize>() {
            Ok(n) if n > 0 => ScriptLine::Event(UiEvent::SuggestionClick(n - 1)),
            _ => ScriptLine::Unknown(line.to_owned()),
        },
        "search" => ScriptLine::Search(rest.to_owned()),
        "quit" | "q" => ScriptLine::Quit,
        _ => ScriptLine::Unknown(line.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_input() {
        assert_eq!(
            parse_line("cook"),
            ScriptLine::Event(UiEvent::Input("cook".into()))
        );
        assert_eq!(
            parse_line(" co "),
            ScriptLine::Event(UiEvent::Input(" co ".into()))
        );
    }

    #[test]
    fn commands_map_to_events() {
        assert_eq!(parse_line(":down"), ScriptLine::Event(UiEvent::Key(NavKey::Down)));
        assert_eq!(parse_line(":up"), ScriptLine::Event(UiEvent::Key(NavKey::Up)));
        assert_eq!(parse_line(":enter"), ScriptLine::Event(UiEvent::Key(NavKey::Enter)));
        assert_eq!(
            parse_line(":outside"),
            ScriptLine::Event(UiEvent::Click {
                inside_search_region: false
            })
        );
        assert_eq!(parse_line(":pick 2"), ScriptLine::Event(UiEvent::SuggestionClick(1)));
        assert_eq!(parse_line(":search 60629"), ScriptLine::Search("60629".into()));
        assert_eq!(parse_line(":quit"), ScriptLine::Quit);
    }

    #[test]
    fn bad_commands_are_unknown() {
        assert_eq!(parse_line(":pick 0"), ScriptLine::Unknown(":pick 0".into()));
        assert_eq!(parse_line(":pick x"), ScriptLine::Unknown(":pick x".into()));
        assert_eq!(parse_line(":jump"), ScriptLine::Unknown(":jump".into()));
    }
}
