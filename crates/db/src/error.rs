//! Errors surfaced by any [`PortfolioStore`](crate::store::PortfolioStore)
//! implementation.

/// A failure raised by the relational store.
///
/// Callers never inspect the cause beyond logging it: every variant maps to
/// the same generic server error at the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An error returned by sqlx (connectivity, constraint, malformed query).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A constraint the store refused to violate.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// The store could not serve the request.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
