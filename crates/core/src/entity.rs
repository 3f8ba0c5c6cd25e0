//! Resource kinds and their user-facing messages.
//!
//! The public API speaks Portuguese; every message a client can see is
//! produced here so the wording stays consistent across handlers and error
//! responses.

use std::fmt;

/// Generic message returned for any failure the client cannot act on.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// A resource exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Project,
    Comment,
}

impl Entity {
    /// Table backing this resource.
    pub fn table(self) -> &'static str {
        match self {
            Entity::Project => "projects",
            Entity::Comment => "comments",
        }
    }

    /// Message sent with a 404 for this resource.
    pub fn not_found_message(self) -> &'static str {
        match self {
            Entity::Project => "Projeto não encontrado",
            Entity::Comment => "Comentário não encontrado",
        }
    }

    /// Confirmation sent after a successful delete.
    pub fn deleted_message(self) -> &'static str {
        match self {
            Entity::Project => "Projeto deletado",
            Entity::Comment => "Comentário deletado",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Project => f.write_str("Project"),
            Entity::Comment => f.write_str("Comment"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_localized_per_entity() {
        assert_eq!(Entity::Project.not_found_message(), "Projeto não encontrado");
        assert_eq!(Entity::Comment.not_found_message(), "Comentário não encontrado");
        assert_eq!(Entity::Project.deleted_message(), "Projeto deletado");
        assert_eq!(Entity::Comment.deleted_message(), "Comentário deletado");
    }

    #[test]
    fn display_uses_english_type_name() {
        assert_eq!(Entity::Project.to_string(), "Project");
        assert_eq!(Entity::Comment.table(), "comments");
    }
}
