use serde_json::Value;

/// A reference to a command that a client can execute.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Command {
    /// Title of the command (e.g. `Run test`).
    pub title: String,
    /// Identifier of the command handler.
    pub command: String,
    pub arguments: Vec<Value>,
}

impl Command {
    /// Creates a command without arguments.
    pub fn new(title: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            command: command.into(),
            arguments: Vec::new(),
        }
    }
}
