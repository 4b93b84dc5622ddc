//! Parsing of REPL input lines.

/// Canned questions offered by `/examples` and `/ask <n>`.
pub const EXAMPLE_QUESTIONS: [&str; 5] = [
    "What is the PTO policy?",
    "What caused incident 5023?",
    "What are our pricing tiers?",
    "How do I onboard as a new employee?",
    "What is the tech stack?",
];

pub const HELP: &str = "\
Type a question and press Enter to ask it. An empty line re-submits the pending question.
  /login <email>   sign in
  /logout          sign out and clear the conversation
  /filter [dept]   restrict answers to a department (no argument clears it)
  /history         print the conversation so far
  /examples        list example questions
  /ask <n>         ask example question n
  /help            show this message
  /quit            exit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Free text to ask.
    Ask(String),
    /// Empty line: submit whatever is pending.
    Resubmit,
    Login(String),
    Logout,
    Filter(Option<String>),
    History,
    Examples,
    /// 1-based index into [`EXAMPLE_QUESTIONS`].
    AskExample(usize),
    Help,
    Quit,
    /// Slash command that could not be parsed; carries the reason.
    Invalid(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Resubmit;
        }
        let Some(rest) = line.strip_prefix('/') else {
            return Command::Ask(line.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        match name.to_ascii_lowercase().as_str() {
            "login" if arg.is_empty() => Command::Invalid("usage: /login <email>".into()),
            "login" => Command::Login(arg.to_string()),
            "logout" => Command::Logout,
            "filter" if arg.is_empty() => Command::Filter(None),
            "filter" => Command::Filter(Some(arg.to_string())),
            "history" => Command::History,
            "examples" => Command::Examples,
            "ask" => parse_example_index(arg),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => Command::Invalid(format!("unknown command: /{other} (try /help)")),
        }
    }
}

fn parse_example_index(arg: &str) -> Command {
    match arg.parse::<usize>() {
        Ok(n) if (1..=EXAMPLE_QUESTIONS.len()).contains(&n) => Command::AskExample(n),
        _ => Command::Invalid(format!(
            "usage: /ask <n> where n is 1-{}",
            EXAMPLE_QUESTIONS.len()
        )),
    }
}

/// The example question for a 1-based index.
pub fn example_question(n: usize) -> Option<&'static str> {
    n.checked_sub(1).and_then(|i| EXAMPLE_QUESTIONS.get(i)).copied()
}
