/// A line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    Search(String),
    View(String),
    Help,
    Quit,
}

/// Blank lines yield `None`. Unknown words are searched for.
pub fn parse_command(line: &str) -> Option<UserCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => UserCommand::Quit,
        "help" | "?" => UserCommand::Help,
        "search" | "s" => UserCommand::Search(rest.to_string()),
        "view" | "v" if !rest.is_empty() => UserCommand::View(rest.to_string()),
        "view" | "v" => UserCommand::Help,
        _ => UserCommand::Search(line.to_string()),
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse_command("QUIT"), Some(UserCommand::Quit));
        assert_eq!(parse_command(" Help "), Some(UserCommand::Help));
        assert_eq!(
            parse_command("View 52772"),
            Some(UserCommand::View("52772".into()))
        );
    }

    #[test]
    fn bare_search_keyword_searches_for_nothing() {
        assert_eq!(
            parse_command("search"),
            Some(UserCommand::Search(String::new()))
        );
        assert_eq!(
            parse_command("search   beef wellington "),
            Some(UserCommand::Search("beef wellington".into()))
        );
    }

    #[test]
    fn free_text_is_a_search() {
        assert_eq!(
            parse_command("Spicy Arrabiata"),
            Some(UserCommand::Search("Spicy Arrabiata".into()))
        );
    }

    #[test]
    fn blank_lines_and_missing_ids_do_nothing_useful() {
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("view"), Some(UserCommand::Help));
    }
}
