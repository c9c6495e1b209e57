//! Database integration tests
//!
//! Tests database operations using real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use postboard::core::models::{
        CommentDraft, Post, PostDraft, Todo, TodoDraft, TodoStatus,
    };
    use postboard::storage::database::DatabaseBackendType;
    use postboard::utils::error::BoardError;

    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::new().await;
        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);
        assert!(db.db().health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_migration_is_repeatable() {
        let db = TestDatabase::new().await;
        let result = db.db().migrate().await;
        assert!(result.is_ok(), "Second migration failed: {:?}", result.err());
    }

    #[tokio::test]
    async fn test_user_operations() {
        let db = TestDatabase::new().await;
        let user = db.create_user("ops@example.com").await;

        let by_id = db.db().find_user_by_id(user.id).await.unwrap();
        assert_eq!(by_id.as_ref().map(|u| u.email.as_str()), Some("ops@example.com"));

        let by_email = db.db().find_user_by_email("ops@example.com").await.unwrap();
        assert_eq!(by_email.map(|u| u.id), Some(user.id));

        assert!(
            db.db()
                .find_user_by_email("nobody@example.com")
                .await
                .unwrap()
                .is_none()
        );

        assert!(db.db().delete_user(user.id).await.unwrap());
        assert!(!db.db().delete_user(user.id).await.unwrap());
        assert!(db.db().find_user_by_id(user.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_a_conflict() {
        let db = TestDatabase::new().await;
        let first = db.create_user("dup@example.com").await;

        let mut second = first.clone();
        second.id = uuid::Uuid::new_v4();
        let result = db.db().create_user(&second).await;
        assert!(matches!(result, Err(BoardError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_list_users_in_creation_order() {
        let db = TestDatabase::new().await;
        let a = db.create_user("a@example.com").await;
        let b = db.create_user("b@example.com").await;

        let ids: Vec<_> = db.db().list_users().await.unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn test_todo_round_trip_through_storage() {
        let db = TestDatabase::new().await;
        let owner = db.create_user("todo@example.com").await;

        let todo = Todo::new(
            owner.id,
            TodoDraft {
                title: "Write tests".to_string(),
                description: Some("integration".to_string()),
                status: Some(TodoStatus::Working),
            },
        );
        let created = db.db().create_todo(&todo).await.unwrap();
        assert_eq!(created.status, TodoStatus::Working);

        let mut found = db.db().find_todo_by_id(todo.id).await.unwrap().unwrap();
        assert_eq!(found.owner, owner.id);
        assert_eq!(found.description.as_deref(), Some("integration"));

        found.complete();
        let updated = db.db().update_todo(&found).await.unwrap();
        assert_eq!(updated.status, TodoStatus::Complete);

        assert!(db.db().delete_todo(todo.id).await.unwrap());
        assert!(db.db().find_todo_by_id(todo.id).await.unwrap().is_none());
        assert!(!db.db().delete_todo(todo.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_updating_a_missing_todo_is_not_found() {
        let db = TestDatabase::new().await;
        let owner = db.create_user("ghost@example.com").await;
        let todo = Todo::new(
            owner.id,
            TodoDraft {
                title: "never stored".to_string(),
                description: None,
                status: None,
            },
        );

        let result = db.db().update_todo(&todo).await;
        assert!(matches!(result, Err(BoardError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_post_comments_persist_with_the_post() {
        let db = TestDatabase::new().await;
        let author = db.create_user("post@example.com").await;

        let mut post = Post::new(
            author.id,
            PostDraft {
                title: "Hello".to_string(),
                description: "First post".to_string(),
            },
        );
        db.db().create_post(&post).await.unwrap();

        let first = post.add_comment(author.id, CommentDraft { text: "one".to_string() });
        post.add_comment(author.id, CommentDraft { text: "two".to_string() });
        db.db().save_post(&post).await.unwrap();

        let stored = db.db().find_post_by_id(post.id).await.unwrap().unwrap();
        let texts: Vec<_> = stored.comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two"]);
        assert_eq!(stored.comments[0].id, first);

        assert_eq!(db.db().list_posts().await.unwrap().len(), 1);
        assert!(db.db().delete_post(post.id).await.unwrap());
        assert!(db.db().list_posts().await.unwrap().is_empty());
        assert!(!db.db().delete_post(post.id).await.unwrap());
    }
}
