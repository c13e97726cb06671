use newsdesk_core::Msg;

/// Parsed console command.
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    Unknown(String),
    Noop,
}

/// Parses one console line. The style picker and the category strip both
/// surface here as plain commands: `style <name>` and `category <name>`.
pub fn parse_command(line: &str) -> Command {
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Command::Noop;
    };
    let argument = tokens.next();

    match (head.to_ascii_lowercase().as_str(), argument) {
        ("quit", _) | ("q", _) => Command::Quit,
        ("help", _) | ("?", _) => Command::Help,
        ("refresh", _) | ("r", _) => Command::Dispatch(Msg::RefreshPulled),
        ("category", Some(name)) | ("c", Some(name)) => Command::Dispatch(Msg::CategoryPicked {
            name: name.to_string(),
        }),
        ("style", Some(name)) | ("s", Some(name)) => Command::Dispatch(Msg::StylePicked {
            name: name.to_string(),
        }),
        ("open", Some(number)) | ("o", Some(number)) => match number.parse::<usize>() {
            Ok(n) if n > 0 => Command::Dispatch(Msg::ArticleTapped { index: n - 1 }),
            _ => Command::Unknown(line.to_string()),
        },
        _ => Command::Unknown(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_commands_parse() {
        assert!(matches!(
            parse_command("category business"),
            Command::Dispatch(Msg::CategoryPicked { .. })
        ));
        assert!(matches!(
            parse_command("s bbc"),
            Command::Dispatch(Msg::StylePicked { .. })
        ));
        assert!(matches!(
            parse_command("refresh"),
            Command::Dispatch(Msg::RefreshPulled)
        ));
    }

    #[test]
    fn open_is_one_based() {
        assert!(matches!(
            parse_command("open 3"),
            Command::Dispatch(Msg::ArticleTapped { index: 2 })
        ));
        assert!(matches!(parse_command("open 0"), Command::Unknown(_)));
        assert!(matches!(parse_command("open x"), Command::Unknown(_)));
    }

    #[test]
    fn blank_and_noise_lines() {
        assert!(matches!(parse_command("   "), Command::Noop));
        assert!(matches!(parse_command("frobnicate"), Command::Unknown(_)));
        assert!(matches!(parse_command("QUIT"), Command::Quit));
    }
}
