//! Todo API tests

#[cfg(test)]
mod tests {
    use crate::common::{self, Account, call, delete, get, patch, post, put};
    use actix_web::body::MessageBody;
    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use postboard::server::create_app;
    use serde_json::{Value, json};

    async fn create_todo<S, B>(app: &S, account: &Account, body: Value) -> Value
    where
        S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        let (status, todo) = call(app, post("/todo", Some(&account.token), body)).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", todo);
        todo
    }

    #[actix_web::test]
    async fn test_create_todo_defaults() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;

        let todo = create_todo(&app, &alice, json!({"title": "Buy milk"})).await;
        assert_eq!(todo["title"], "Buy milk");
        assert_eq!(todo["status"], "Incomplete");
        assert_eq!(todo["owner"], alice.id);
        assert!(todo["_id"].is_string());
    }

    #[actix_web::test]
    async fn test_client_supplied_owner_is_ignored() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;
        let bob = common::signup(&app, "bob@example.com").await;

        let todo = create_todo(
            &app,
            &alice,
            json!({"title": "Mine", "owner": bob.id, "status": "Working"}),
        )
        .await;
        assert_eq!(todo["owner"], alice.id);
        assert_eq!(todo["status"], "Working");
    }

    #[actix_web::test]
    async fn test_create_todo_validation() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;

        let (status, body) = call(&app, post("/todo", Some(&alice.token), json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "\"title\" is required");

        let (status, body) = call(
            &app,
            post("/todo", Some(&alice.token), json!({"title": "x", "status": "Done"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "\"status\" must be one of [Incomplete, Working, Complete]"
        );
    }

    #[actix_web::test]
    async fn test_list_and_get_todos() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;
        let bob = common::signup(&app, "bob@example.com").await;

        create_todo(&app, &alice, json!({"title": "first"})).await;
        let second = create_todo(&app, &bob, json!({"title": "second"})).await;

        let (status, body) = call(&app, get("/todos", Some(&alice.token))).await;
        assert_eq!(status, StatusCode::OK);
        let titles: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, vec!["first", "second"]);

        let uri = format!("/todo/{}", second["_id"].as_str().unwrap());
        let (status, body) = call(&app, get(&uri, Some(&alice.token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["_id"], second["_id"]);
        assert_eq!(body["owner"], bob.id);
    }

    #[actix_web::test]
    async fn test_missing_todo_is_not_found() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;

        let uri = format!("/todo/{}", uuid::Uuid::new_v4());
        let (status, body) = call(&app, get(&uri, Some(&alice.token))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Todo not found"}));

        let (status, _) = call(&app, patch(&format!("{}/complete", uri), Some(&alice.token), json!({}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_owner_can_update_todo() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;
        let todo = create_todo(
            &app,
            &alice,
            json!({"title": "draft", "description": "old", "status": "Working"}),
        )
        .await;
        let uri = format!("/todo/{}", todo["_id"].as_str().unwrap());

        let (status, body) = call(
            &app,
            put(&uri, Some(&alice.token), json!({"title": "final"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "final");
        assert_eq!(body["status"], "Working");
        assert_eq!(body["_id"], todo["_id"]);
        assert_eq!(body["owner"], alice.id);
    }

    #[actix_web::test]
    async fn test_non_owner_cannot_touch_todo() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;
        let bob = common::signup(&app, "bob@example.com").await;
        let todo = create_todo(&app, &alice, json!({"title": "private"})).await;
        let uri = format!("/todo/{}", todo["_id"].as_str().unwrap());

        let (status, body) = call(
            &app,
            patch(&format!("{}/complete", uri), Some(&bob.token), json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"message": "Unauthorized"}));

        let (status, _) = call(&app, put(&uri, Some(&bob.token), json!({"title": "mine now"}))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = call(&app, delete(&uri, Some(&bob.token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (_, body) = call(&app, get(&uri, Some(&alice.token))).await;
        assert_eq!(body["title"], "private");
        assert_eq!(body["status"], "Incomplete");
    }

    #[actix_web::test]
    async fn test_complete_is_idempotent() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;
        let todo = create_todo(&app, &alice, json!({"title": "finish"})).await;
        let uri = format!("/todo/{}/complete", todo["_id"].as_str().unwrap());

        for _ in 0..2 {
            let (status, body) = call(&app, patch(&uri, Some(&alice.token), json!({}))).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["status"], "Complete");
        }
    }

    #[actix_web::test]
    async fn test_owner_can_delete_todo() {
        let app = test::init_service(create_app(common::state().await)).await;
        let alice = common::signup(&app, "alice@example.com").await;
        let todo = create_todo(&app, &alice, json!({"title": "temporary"})).await;
        let uri = format!("/todo/{}", todo["_id"].as_str().unwrap());

        let (status, body) = call(&app, delete(&uri, Some(&alice.token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Todo deleted"}));

        let (status, _) = call(&app, get(&uri, Some(&alice.token))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = call(&app, delete(&uri, Some(&alice.token))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Todo not found");
    }
}
