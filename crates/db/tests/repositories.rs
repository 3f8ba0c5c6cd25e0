//! Repository tests against a real PostgreSQL database.
//!
//! Exercises the SQL layer end to end:
//! - insert/read round trip of every project column
//! - tag membership filter
//! - transactional project delete with its comments, and its rollback
//! - foreign key rejection of comments on unknown projects
//!
//! `DATABASE_URL` must point at a server where the test user may create
//! databases.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use portfolio_db::models::comment::CreateComment;
use portfolio_db::models::project::{CascadeDelete, CreateProject};
use portfolio_db::repositories::{CommentRepo, ProjectRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(title: &str, tags: &[&str]) -> CreateProject {
    CreateProject {
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        title: title.to_string(),
        links: None,
        subjects: None,
        images: None,
        documents: None,
        description: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn new_comment(project_id: i64, text: &str) -> CreateComment {
    CreateComment {
        project_id,
        text: text.to_string(),
        name: Some("bob".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_find_returns_every_field(pool: PgPool) {
    let input = CreateProject {
        description: Some("A portfolio piece".to_string()),
        links: Some(serde_json::json!(["https://example.com"])),
        subjects: Some(serde_json::json!({"course": "Networks"})),
        images: Some(serde_json::json!([{"src": "a.png"}])),
        documents: Some(serde_json::json!([])),
        ..new_project("Full", &["web", "rust"])
    };

    let created = ProjectRepo::create(&pool, &input).await.unwrap();
    let found = ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("project should exist");

    assert_eq!(found, created);
    assert_eq!(found.title, "Full");
    assert_eq!(found.tags, vec!["web", "rust"]);
    assert_eq!(found.subjects, input.subjects);
    assert_eq!(found.documents, Some(serde_json::json!([])));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_missing_project_returns_none(pool: PgPool) {
    assert!(ProjectRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_by_tag_matches_array_members_only(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("A", &["web", "rust"])).await.unwrap();
    ProjectRepo::create(&pool, &new_project("B", &["webgl"])).await.unwrap();
    ProjectRepo::create(&pool, &new_project("C", &[])).await.unwrap();

    let web = ProjectRepo::list_by_tag(&pool, "web").await.unwrap();
    assert_eq!(web.len(), 1);
    assert_eq!(web[0].title, "A");

    assert!(ProjectRepo::list_by_tag(&pool, "nothing").await.unwrap().is_empty());
    assert_eq!(ProjectRepo::list(&pool).await.unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Cascading delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_with_comments_leaves_no_orphans(pool: PgPool) {
    let keep = ProjectRepo::create(&pool, &new_project("Keep", &[])).await.unwrap();
    let gone = ProjectRepo::create(&pool, &new_project("Gone", &[])).await.unwrap();
    CommentRepo::create(&pool, &new_comment(keep.id, "stay")).await.unwrap();
    CommentRepo::create(&pool, &new_comment(gone.id, "one")).await.unwrap();
    CommentRepo::create(&pool, &new_comment(gone.id, "two")).await.unwrap();

    let outcome = ProjectRepo::delete_with_comments(&pool, gone.id).await.unwrap();
    assert_eq!(
        outcome,
        CascadeDelete {
            comments_deleted: 2,
            project_deleted: true
        }
    );

    assert!(CommentRepo::list_by_project(&pool, gone.id).await.unwrap().is_empty());
    assert_eq!(CommentRepo::list_by_project(&pool, keep.id).await.unwrap().len(), 1);

    let again = ProjectRepo::delete_with_comments(&pool, gone.id).await.unwrap();
    assert!(!again.project_deleted);
    assert_eq!(again.comments_deleted, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failed_project_delete_rolls_back_comment_delete(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Locked", &[])).await.unwrap();
    CommentRepo::create(&pool, &new_comment(project.id, "survives")).await.unwrap();

    // Fails the second statement of the cascade, after the comments are gone.
    sqlx::raw_sql(
        "CREATE FUNCTION refuse_project_delete() RETURNS trigger AS $$
         BEGIN
             RAISE EXCEPTION 'project delete refused';
         END;
         $$ LANGUAGE plpgsql;
         CREATE TRIGGER refuse_project_delete BEFORE DELETE ON projects
             FOR EACH ROW EXECUTE FUNCTION refuse_project_delete();",
    )
    .execute(&pool)
    .await
    .unwrap();

    let result = ProjectRepo::delete_with_comments(&pool, project.id).await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));

    let comments = CommentRepo::list_by_project(&pool, project.id).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].text, "survives");
    assert!(ProjectRepo::find_by_id(&pool, project.id).await.unwrap().is_some());
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn comment_on_unknown_project_violates_foreign_key(pool: PgPool) {
    let result = CommentRepo::create(&pool, &new_comment(424_242, "dangling")).await;

    assert_matches!(result, Err(sqlx::Error::Database(ref db_err))
        if db_err.code().as_deref() == Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_comment_reports_whether_a_row_matched(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("P", &[])).await.unwrap();
    let comment = CommentRepo::create(&pool, &new_comment(project.id, "hi")).await.unwrap();
    let other = CommentRepo::create(&pool, &new_comment(project.id, "stays")).await.unwrap();

    assert!(!CommentRepo::delete(&pool, 999_999).await.unwrap());
    assert!(CommentRepo::delete(&pool, comment.id).await.unwrap());

    let remaining = CommentRepo::list_by_project(&pool, project.id).await.unwrap();
    assert_eq!(remaining, vec![other]);
}
