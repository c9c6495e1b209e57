//! Comment API tests
//!
//! Comments live inside their post; mutations answer with the whole post.

#[cfg(test)]
mod tests {
    use crate::common::{self, Account, call, delete, get, patch, post};
    use actix_web::body::MessageBody;
    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use postboard::server::create_app;
    use serde_json::{Value, json};

    async fn create_post<S, B>(app: &S, author: &Account) -> String
    where
        S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        let (status, body) = call(
            app,
            post(
                "/posts",
                Some(&author.token),
                json!({"title": "Thread", "description": "Discuss"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["_id"].as_str().unwrap().to_string()
    }

    async fn add_comment<S, B>(app: &S, post_id: &str, author: &Account, text: &str) -> Value
    where
        S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        let (status, body) = call(
            app,
            post(
                &format!("/comments/{}", post_id),
                Some(&author.token),
                json!({"text": text}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "comment failed: {}", body);
        body
    }

    #[actix_web::test]
    async fn test_add_comment_returns_the_post() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;
        let bob = common::signup(&app, "bob@example.com").await;
        let post_id = create_post(&app, &alice).await;

        add_comment(&app, &post_id, &alice, "first").await;
        let body = add_comment(&app, &post_id, &bob, "second").await;

        assert_eq!(body["_id"], post_id);
        let comments = body["comments"].as_array().unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0]["text"], "first");
        assert_eq!(comments[1]["text"], "second");
        assert_eq!(comments[1]["author"], bob.id);
    }

    #[actix_web::test]
    async fn test_comment_on_missing_post() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;

        // The post lookup comes first, so even an invalid body is a 404
        let uri = format!("/comments/{}", uuid::Uuid::new_v4());
        let (status, body) = call(&app, post(&uri, Some(&alice.token), json!({}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Post not found");
    }

    #[actix_web::test]
    async fn test_comment_validation() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;
        let post_id = create_post(&app, &alice).await;

        let uri = format!("/comments/{}", post_id);
        let (status, body) = call(&app, post(&uri, Some(&alice.token), json!({"text": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "\"text\" is not allowed to be empty");
    }

    #[actix_web::test]
    async fn test_list_and_get_comments() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;
        let post_id = create_post(&app, &alice).await;
        let body = add_comment(&app, &post_id, &alice, "hello").await;
        let comment_id = body["comments"][0]["_id"].as_str().unwrap().to_string();

        let (status, list) = call(&app, get(&format!("/comments/{}", post_id), Some(&alice.token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().map(Vec::len), Some(1));

        let uri = format!("/comments/{}/{}", post_id, comment_id);
        let (status, comment) = call(&app, get(&uri, Some(&alice.token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(comment["text"], "hello");

        let missing = format!("/comments/{}/{}", post_id, uuid::Uuid::new_v4());
        let (status, body) = call(&app, get(&missing, Some(&alice.token))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Comment not found");
    }

    #[actix_web::test]
    async fn test_only_the_comment_author_may_edit() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;
        let bob = common::signup(&app, "bob@example.com").await;
        let post_id = create_post(&app, &alice).await;
        let body = add_comment(&app, &post_id, &alice, "original").await;
        let comment_id = body["comments"][0]["_id"].as_str().unwrap().to_string();
        let uri = format!("/comments/{}/{}", post_id, comment_id);

        let (status, body) = call(&app, patch(&uri, Some(&bob.token), json!({"text": "hijacked"}))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Unauthorized");

        let (_, comment) = call(&app, get(&uri, Some(&alice.token))).await;
        assert_eq!(comment["text"], "original");

        let (status, body) = call(&app, patch(&uri, Some(&alice.token), json!({"text": "edited"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["comments"][0]["text"], "edited");
        assert_eq!(body["comments"][0]["_id"], comment_id);
    }

    #[actix_web::test]
    async fn test_post_author_cannot_delete_someone_elses_comment() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;
        let bob = common::signup(&app, "bob@example.com").await;
        let post_id = create_post(&app, &alice).await;
        add_comment(&app, &post_id, &bob, "keep").await;
        let body = add_comment(&app, &post_id, &bob, "remove").await;
        let comment_id = body["comments"][1]["_id"].as_str().unwrap().to_string();
        let uri = format!("/comments/{}/{}", post_id, comment_id);

        let (status, _) = call(&app, delete(&uri, Some(&alice.token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = call(&app, delete(&uri, Some(&bob.token))).await;
        assert_eq!(status, StatusCode::CREATED);
        let texts: Vec<_> = body["comments"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["text"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(texts, vec!["keep"]);

        let (status, _) = call(&app, delete(&uri, Some(&bob.token))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_mutating_a_comment_on_a_missing_post() {
        let app = test::init_service(create_app(common::state().await)).await;
        let bob = common::signup(&app, "bob@example.com").await;
        let uri = format!("/comments/{}/{}", uuid::Uuid::new_v4(), uuid::Uuid::new_v4());

        let (status, body) = call(&app, patch(&uri, Some(&bob.token), json!({"text": "x"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Post not found");

        let (status, body) = call(&app, delete(&uri, Some(&bob.token))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Post not found");

        let (status, body) = call(&app, delete(&uri, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "No token, authorization denied");
    }

    #[actix_web::test]
    async fn test_missing_comment_is_not_found_before_ownership() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;
        let bob = common::signup(&app, "bob@example.com").await;
        let post_id = create_post(&app, &alice).await;
        add_comment(&app, &post_id, &alice, "real").await;

        // Bob owns nothing here, but the comment lookup answers first
        let uri = format!("/comments/{}/{}", post_id, uuid::Uuid::new_v4());
        let (status, body) = call(&app, patch(&uri, Some(&bob.token), json!({"text": "x"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Comment not found");

        let (status, body) = call(&app, delete(&uri, Some(&bob.token))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Comment not found");

        let (_, comments) = call(&app, get(&format!("/comments/{}", post_id), Some(&alice.token))).await;
        assert_eq!(comments.as_array().map(Vec::len), Some(1));
    }
}
