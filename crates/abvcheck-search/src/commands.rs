//! Chat command routing: text in, reply text out.
//!
//! The transport that delivers messages and sends replies lives outside this
//! crate; it hands each inbound message to [`handle_message`].

use abvcheck_scraper::ProductSource;

use crate::aggregate::Aggregator;

pub const HELP_TEXT: &str = "abvcheck - checks whether a beer is approved (5.0% or stronger).

/search <beer name>

For example:
/search Tuborg Grøn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/search <text>`; the argument may be empty.
    Search(String),
    Help,
    /// Any other command, lowercased and without the `@bot` suffix.
    Unknown(String),
}

impl Command {
    /// Parses a chat message. Returns `None` when the text is not a command.
    ///
    /// Command names are case-insensitive and may carry an `@botname` suffix
    /// (`/search@abvcheck_bot Tuborg`).
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.trim().strip_prefix('/')?;
        let (head, args) = rest
            .split_once(char::is_whitespace)
            .map_or((rest, ""), |(head, args)| (head, args.trim()));
        let name = head
            .split_once('@')
            .map_or(head, |(name, _)| name)
            .to_lowercase();

        match name.as_str() {
            "" => None,
            "search" => Some(Command::Search(args.to_owned())),
            "help" => Some(Command::Help),
            _ => Some(Command::Unknown(name)),
        }
    }
}

/// Who sent a message, as far as the transport knows.
#[derive(Debug, Clone, Default)]
pub struct Requester {
    pub username: Option<String>,
    pub first_name: Option<String>,
}

impl Requester {
    /// Username when set, otherwise first name.
    #[must_use]
    pub fn display_identifier(&self) -> &str {
        [&self.username, &self.first_name]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.trim().is_empty())
            .unwrap_or_default()
    }
}

/// Search term for a `/search` command: the argument, or the requester's
/// identifier when the argument is empty.
#[must_use]
pub fn effective_term<'a>(args: &'a str, requester: &'a Requester) -> &'a str {
    if args.trim().is_empty() {
        requester.display_identifier()
    } else {
        args.trim()
    }
}

/// Routes one inbound message. Returns the reply text, or `None` when the
/// message is not a command. Unknown commands yield an empty reply.
pub async fn handle_message<A, B>(
    aggregator: &Aggregator<A, B>,
    text: &str,
    requester: &Requester,
) -> Option<String>
where
    A: ProductSource,
    B: ProductSource,
{
    let command = Command::parse(text)?;

    let reply = match command {
        Command::Search(args) => {
            let term = effective_term(&args, requester);
            tracing::debug!(term, "handling search command");
            aggregator.search_reply(term).await
        }
        Command::Help => HELP_TEXT.to_owned(),
        Command::Unknown(name) => {
            tracing::debug!(command = %name, "ignoring unknown command");
            String::new()
        }
    };

    Some(reply)
}
