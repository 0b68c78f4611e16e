//! Operator command parsing.

use crate::errors::AppError;
use crate::models::{FilterField, FilterUpdate};
use crate::session::Action;

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Mutates the session; the view is rendered afterwards
    Act(Action),
    Show,
    Team,
    Options,
    Help,
    Quit,
}

pub const HELP: &str = "\
search <text>              filter by name; text after the first space is
                           kept verbatim (no text clears)
domain <value>|all         filter by domain
gender <value>|all         filter by gender
available true|false|all   filter by availability
clear                      reset all filters
page <n> | next | prev     change page
add <id> | remove <id>     change the team selection
show | list                show the current page
team                       show the team
options                    list known domains and genders
help | ?                   this text
quit | exit                leave";

fn parse_number<T: std::str::FromStr>(verb: &str, arg: &str, what: &str) -> Result<T, AppError> {
    if arg.is_empty() {
        return Err(AppError::BadRequest(format!("'{}' needs {}", verb, what)));
    }
    arg.parse()
        .map_err(|_| AppError::BadRequest(format!("'{}' is not a valid {}", arg, what)))
}

/// Parse one input line (without its terminator). Blank lines yield `None`.
///
/// The `search` text is everything after the single separator following the
/// verb, so leading and trailing spaces in a name query survive. Other
/// arguments are trimmed.
pub fn parse(line: &str) -> Result<Option<Command>, AppError> {
    let line = line.trim_start();
    if line.trim_end().is_empty() {
        return Ok(None);
    }

    let (verb, raw) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (line, ""),
    };
    let arg = raw.trim();
    let verb = verb.to_ascii_lowercase();

    let command = match verb.as_str() {
        "search" => Command::Act(Action::SetNameQuery(raw.to_string())),
        "domain" | "gender" | "available" => {
            let field = FilterField::parse(&verb)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown filter '{}'", verb)))?;
            Command::Act(Action::SetFilter(FilterUpdate::parse(field, arg)?))
        }
        "clear" => Command::Act(Action::ClearFilters),
        "page" => Command::Act(Action::GoToPage(parse_number(&verb, arg, "page number")?)),
        "next" => Command::Act(Action::NextPage),
        "prev" => Command::Act(Action::PrevPage),
        "add" => Command::Act(Action::Add(parse_number(&verb, arg, "person id")?)),
        "remove" => Command::Act(Action::Remove(parse_number(&verb, arg, "person id")?)),
        "show" | "list" => Command::Show,
        "team" => Command::Team,
        "options" => Command::Options,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => {
            return Err(AppError::BadRequest(format!(
                "Unknown command '{}', try 'help'",
                other
            )));
        }
    };

    Ok(Some(command))
}
