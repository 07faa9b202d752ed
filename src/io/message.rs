//! Message routing
//!
//! A message body arrives as lightly marked-up text. After the markup is
//! stripped, the first word selects the action and the rest is its payload.

/// What a message asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Record a transaction; the payload uses the tag grammar
    Transaction(String),
    /// Task for a to-do service; acknowledged but not acted on
    Todo(String),
    /// Anything else is kept as a free-text note
    Note(String),
}

/// Remove the markup mail clients wrap short messages in
pub fn strip_markup(body: &str) -> String {
    body.replace("<P>", "")
        .replace("</P>", "")
        .replace("=0A", " ")
        .replace("&amp;", "&")
}

impl Action {
    /// Route a message body
    ///
    /// ```
    /// use qif_ledger::io::message::Action;
    ///
    /// let action = Action::from_message("<P>transaction d gas -c visa -a 5</P>");
    /// assert_eq!(action, Action::Transaction("d gas -c visa -a 5".to_string()));
    /// ```
    pub fn from_message(body: &str) -> Action {
        let message = strip_markup(body);
        let message = message.trim();
        let (keyword, payload) = message.split_once(' ').unwrap_or((message, ""));
        let payload = payload.trim().to_string();

        match keyword {
            "transaction" => Action::Transaction(payload),
            "todo" => Action::Todo(payload),
            _ => Action::Note(payload),
        }
    }
}
