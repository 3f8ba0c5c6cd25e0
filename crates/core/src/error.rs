use crate::entity::Entity;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: Entity, id: DbId },
}

impl CoreError {
    /// Shorthand for a missing project.
    pub fn project_not_found(id: DbId) -> Self {
        CoreError::NotFound {
            entity: Entity::Project,
            id,
        }
    }

    /// Shorthand for a missing comment.
    pub fn comment_not_found(id: DbId) -> Self {
        CoreError::NotFound {
            entity: Entity::Comment,
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_entity_and_id() {
        let err = CoreError::project_not_found(7);
        assert_eq!(err.to_string(), "Entity not found: Project with id 7");
    }
}
