//! Post API tests

#[cfg(test)]
mod tests {
    use crate::common::{self, call, delete, get, post, put};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use postboard::server::create_app;
    use serde_json::json;

    #[actix_web::test]
    async fn test_create_post_stamps_the_author() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;
        let bob = common::signup(&app, "bob@example.com").await;

        let (status, body) = call(
            &app,
            post(
                "/posts",
                Some(&alice.token),
                json!({
                    "title": "Hello",
                    "description": "First post",
                    "author": bob.id,
                    "comments": [{"text": "smuggled"}],
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["author"], alice.id);
        assert_eq!(body["comments"], json!([]));
    }

    #[actix_web::test]
    async fn test_create_post_validation() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;

        let (status, body) = call(&app, post("/posts", Some(&alice.token), json!({"title": "t"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "\"description\" is required");

        let (status, body) = call(
            &app,
            post(
                "/posts",
                Some(&alice.token),
                json!({"title": "t", "description": "d", "comments": "nope"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "\"comments\" must be an array");
    }

    #[actix_web::test]
    async fn test_list_and_get_posts() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;

        let (_, created) = call(
            &app,
            post("/posts", Some(&alice.token), json!({"title": "A", "description": "a"})),
        )
        .await;

        let (status, body) = call(&app, get("/posts", Some(&alice.token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(1));

        let uri = format!("/post/{}", created["_id"].as_str().unwrap());
        let (status, body) = call(&app, get(&uri, Some(&alice.token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "A");

        let missing = format!("/post/{}", uuid::Uuid::new_v4());
        let (status, body) = call(&app, get(&missing, Some(&alice.token))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Post not found");
    }

    #[actix_web::test]
    async fn test_only_the_author_may_edit_or_delete() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;
        let bob = common::signup(&app, "bob@example.com").await;

        let (_, created) = call(
            &app,
            post("/posts", Some(&alice.token), json!({"title": "A", "description": "a"})),
        )
        .await;
        let uri = format!("/post/{}", created["_id"].as_str().unwrap());
        let edit = json!({"title": "B", "description": "b"});

        let (status, body) = call(&app, put(&uri, Some(&bob.token), edit.clone())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Unauthorized");

        let (status, _) = call(&app, delete(&uri, Some(&bob.token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = call(&app, put(&uri, Some(&alice.token), edit)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "B");
        assert_eq!(body["description"], "b");

        let (status, body) = call(&app, delete(&uri, Some(&alice.token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Post deleted"}));

        let (status, _) = call(&app, get(&uri, Some(&alice.token))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
