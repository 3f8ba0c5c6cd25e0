pub mod health;

use axum::routing::{on, MethodFilter, MethodRouter};
use axum::Router;

use crate::handlers::{comment, project};
use crate::state::AppState;

/// Every operation the API serves.
///
/// Routing is driven by this closed set: adding or removing an endpoint
/// means adding or removing a variant, and the exhaustive matches below
/// will not compile until its method, path and handler are given.
///
/// ```text
/// GET    /projects               -> ListProjects
/// GET    /projects/class/{tag}   -> ListProjectsByClass
/// GET    /projects/id/{id}       -> GetProject
/// GET    /comments/{id}          -> ListComments      (id is the project id)
/// POST   /projects               -> CreateProject
/// POST   /comments               -> CreateComment
/// DELETE /projects/{id}          -> DeleteProject
/// DELETE /comments/{id}          -> DeleteComment
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ListProjects,
    ListProjectsByClass,
    GetProject,
    ListComments,
    CreateProject,
    CreateComment,
    DeleteProject,
    DeleteComment,
}

impl Endpoint {
    pub const ALL: [Endpoint; 8] = [
        Endpoint::ListProjects,
        Endpoint::ListProjectsByClass,
        Endpoint::GetProject,
        Endpoint::ListComments,
        Endpoint::CreateProject,
        Endpoint::CreateComment,
        Endpoint::DeleteProject,
        Endpoint::DeleteComment,
    ];

    pub fn method(self) -> MethodFilter {
        match self {
            Endpoint::ListProjects
            | Endpoint::ListProjectsByClass
            | Endpoint::GetProject
            | Endpoint::ListComments => MethodFilter::GET,
            Endpoint::CreateProject | Endpoint::CreateComment => MethodFilter::POST,
            Endpoint::DeleteProject | Endpoint::DeleteComment => MethodFilter::DELETE,
        }
    }

    /// Route pattern. Patterns sharing a shape must share parameter names,
    /// which is why the comment list uses `{id}` for a project id.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::ListProjects | Endpoint::CreateProject => "/projects",
            Endpoint::ListProjectsByClass => "/projects/class/{tag}",
            Endpoint::GetProject => "/projects/id/{id}",
            Endpoint::DeleteProject => "/projects/{id}",
            Endpoint::CreateComment => "/comments",
            Endpoint::ListComments | Endpoint::DeleteComment => "/comments/{id}",
        }
    }

    fn method_router(self) -> MethodRouter<AppState> {
        let filter = self.method();
        match self {
            Endpoint::ListProjects => on(filter, project::list),
            Endpoint::ListProjectsByClass => on(filter, project::list_by_class),
            Endpoint::GetProject => on(filter, project::get_by_id),
            Endpoint::ListComments => on(filter, comment::list_by_project),
            Endpoint::CreateProject => on(filter, project::create),
            Endpoint::CreateComment => on(filter, comment::create),
            Endpoint::DeleteProject => on(filter, project::delete),
            Endpoint::DeleteComment => on(filter, comment::delete),
        }
    }
}

/// Build the resource route tree from [`Endpoint::ALL`].
///
/// Endpoints sharing a path are merged into one method router by axum.
pub fn api_routes() -> Router<AppState> {
    Endpoint::ALL
        .into_iter()
        .fold(Router::new(), |router, endpoint| {
            router.route(endpoint.path(), endpoint.method_router())
        })
}
