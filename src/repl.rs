//! Line commands of the interactive session.

use directory_core::{ConsultationMode, ListingSession, Location, SortOption};
use directory_feed::DoctorSource;

pub const HELP: &str = "commands: type <text> | submit | pick <n> | focus | outside | \
consult video|clinic|clear | specialty <name> | specialties clear | \
sort fees|experience|clear | retry | url | help | quit";

/// One parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Type(String),
    Submit,
    /// Zero-based index into the visible suggestions.
    Pick(usize),
    Focus,
    Outside,
    Consult(Option<ConsultationMode>),
    Specialty(String),
    ClearSpecialties,
    Sort(Option<SortOption>),
    Retry,
    Url,
    Help,
    Quit,
}

impl Command {
    /// Parse a line such as `pick 2` or `consult video`. The error is a message for the user.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match (word, rest) {
            // Typing may clear the box, so an empty rest is allowed here.
            ("type", text) => Ok(Command::Type(text.to_string())),
            ("submit", "") => Ok(Command::Submit),
            ("pick", n) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Ok(Command::Pick(n - 1)),
                _ => Err(format!("pick expects a suggestion number from 1, got '{n}'")),
            },
            ("focus", "") => Ok(Command::Focus),
            ("outside", "") => Ok(Command::Outside),
            ("consult", "video") => Ok(Command::Consult(Some(ConsultationMode::VideoConsult))),
            ("consult", "clinic") => Ok(Command::Consult(Some(ConsultationMode::InClinic))),
            ("consult", "clear") => Ok(Command::Consult(None)),
            ("specialty", "") => Err("specialty expects a name".to_string()),
            ("specialty", name) => Ok(Command::Specialty(name.to_string())),
            ("specialties", "clear") => Ok(Command::ClearSpecialties),
            ("sort", "fees") => Ok(Command::Sort(Some(SortOption::Fees))),
            ("sort", "experience") => Ok(Command::Sort(Some(SortOption::Experience))),
            ("sort", "clear") => Ok(Command::Sort(None)),
            ("retry", "") => Ok(Command::Retry),
            ("url", "") => Ok(Command::Url),
            ("help", "") => Ok(Command::Help),
            ("quit", "") | ("exit", "") => Ok(Command::Quit),
            _ => Err(format!("unknown command '{line}'. {HELP}")),
        }
    }
}

/// Drive the session with one command. `Url`, `Help` and `Quit` are handled by the caller.
pub async fn apply<L: Location>(
    session: &mut ListingSession<L>,
    source: &dyn DoctorSource,
    command: Command,
) {
    let handled = match command {
        Command::Type(text) => {
            session.type_search(&text);
            true
        }
        Command::Submit => session.submit_search(),
        Command::Pick(index) => session.select_suggestion(index),
        Command::Focus => {
            session.focus_search();
            true
        }
        Command::Outside => {
            session.outside_interaction();
            true
        }
        Command::Consult(mode) => session.select_consultation(mode),
        Command::Specialty(name) => session.toggle_specialty(&name),
        Command::ClearSpecialties => session.clear_specialties(),
        Command::Sort(sort) => session.select_sort(sort),
        Command::Retry => session.retry(source).await,
        Command::Url | Command::Help | Command::Quit => true,
    };

    if !handled {
        tracing::debug!("command had no effect in the current state");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory_core::MemoryLocation;
    use directory_feed::{fallback_doctors, StaticDoctorSource};

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            Command::parse("type  dr john "),
            Ok(Command::Type("dr john".into()))
        );
        assert_eq!(Command::parse("type"), Ok(Command::Type(String::new())));
        assert_eq!(Command::parse("pick 2"), Ok(Command::Pick(1)));
        assert_eq!(
            Command::parse("specialty General Physician"),
            Ok(Command::Specialty("General Physician".into()))
        );
        assert_eq!(
            Command::parse("consult clinic"),
            Ok(Command::Consult(Some(ConsultationMode::InClinic)))
        );
        assert_eq!(Command::parse("sort clear"), Ok(Command::Sort(None)));
        assert_eq!(Command::parse("specialties clear"), Ok(Command::ClearSpecialties));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert!(Command::parse("pick 0").is_err());
        assert!(Command::parse("pick two").is_err());
        assert!(Command::parse("sort rating").is_err());
        assert!(Command::parse("specialty").is_err());
        assert!(Command::parse("submit now").is_err());
        assert!(Command::parse("dance").is_err());
    }

    #[tokio::test]
    async fn commands_drive_the_session() {
        let source = StaticDoctorSource::new(fallback_doctors());
        let mut session = ListingSession::new(MemoryLocation::new("/"));
        session.mount(&source).await;

        for line in ["type sarah", "pick 1", "sort fees"] {
            let command = Command::parse(line).expect("valid command");
            apply(&mut session, &source, command).await;
        }

        let view = session.view();
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].name, "Dr. Sarah Johnson");
        assert_eq!(
            session.location().href(),
            "/?search=Dr.+Sarah+Johnson&sort=fees"
        );
    }
}
