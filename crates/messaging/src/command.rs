//! The recognized command grammar.

/// A structured command extracted from an inbound message.
///
/// The set is closed: the grammar is fixed, not a plugin registry. Arguments
/// are carried verbatim (case preserved); only the command name itself is
/// normalized by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/menu`: list the available commands.
    Menu,
    /// `/stock <producto>`: stock lookup by name fragment. The query may be
    /// empty; answering that with a usage reply is the dispatcher's job.
    Stock { query: String },
    /// `/reporte <tipo>`: a report by subtype (`ventas` is the only one).
    Reporte { subtype: String },
    /// `/productos`: list the catalog.
    Productos,
}

impl Command {
    /// Canonical name as recorded in the conversation log.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Menu => "menu",
            Command::Stock { .. } => "stock",
            Command::Reporte { .. } => "reporte",
            Command::Productos => "productos",
        }
    }
}

/// Parse result: either a recognized command or free text.
///
/// Unknown `/names`, a bare `/`, and plain conversation all land in
/// `FreeText`; parsing never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedMessage {
    Command(Command),
    FreeText { text: String },
}

impl ParsedMessage {
    /// Canonical command name, `None` for free text.
    pub fn command_name(&self) -> Option<&'static str> {
        match self {
            ParsedMessage::Command(command) => Some(command.name()),
            ParsedMessage::FreeText { .. } => None,
        }
    }
}
