use catalog_api::{serve, AppState};
use catalog_db::{Database, DbConfig};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base: String,
    client: Client,
}

impl TestApp {
    async fn spawn() -> Self {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(serve(listener, AppState::new(db), std::future::pending()));

        TestApp {
            base: format!("http://{addr}"),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let resp = self.client.post(self.url(path)).json(&body).send().await.unwrap();
        let status = resp.status();
        (status, resp.json().await.unwrap())
    }

    async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let resp = self.client.put(self.url(path)).json(&body).send().await.unwrap();
        let status = resp.status();
        (status, resp.json().await.unwrap())
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        let status = resp.status();
        (status, resp.json().await.unwrap())
    }

    async fn delete(&self, path: &str) -> (StatusCode, Value) {
        let resp = self.client.delete(self.url(path)).send().await.unwrap();
        let status = resp.status();
        (status, resp.json().await.unwrap())
    }
}

#[tokio::test]
async fn widget_scenario_over_http() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post("/items", json!({"name": "Widget", "price": 9.99}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);

    let (status, body) = app
        .post("/items", json!({"name": "Widget", "price": 5.00}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DUPLICATE_NAME");

    let (status, body) = app.get("/items/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Widget", "description": null, "price": 9.99})
    );

    let (status, body) = app
        .put("/items/1", json!({"id": 1, "name": "Widget2", "price": 12.0}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Widget2");
    assert_eq!(body["price"], 12.0);

    let (status, body) = app.delete("/items/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Item deleted successfully!"}));

    let (status, body) = app.get("/items/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn put_on_missing_item_is_bad_request() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .put("/items/42", json!({"name": "Ghost", "price": 1.0}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn put_with_mismatched_body_id_is_rejected() {
    let app = TestApp::spawn().await;
    app.post("/items", json!({"name": "Widget", "price": 1.0})).await;

    let (status, body) = app
        .put("/items/1", json!({"id": 2, "name": "Widget", "price": 1.0}))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn put_without_description_clears_it() {
    let app = TestApp::spawn().await;
    app.post(
        "/items",
        json!({"name": "Widget", "description": "blue", "price": 1.0}),
    )
    .await;

    let (status, body) = app
        .put("/items/1", json!({"name": "Widget", "price": 2.5}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], Value::Null);
    assert_eq!(body["price"], 2.5);
}

#[tokio::test]
async fn put_onto_existing_name_is_duplicate() {
    let app = TestApp::spawn().await;
    app.post("/items", json!({"name": "A", "price": 1.0})).await;
    app.post("/items", json!({"name": "B", "price": 1.0})).await;

    let (status, body) = app.put("/items/2", json!({"name": "A", "price": 1.0})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DUPLICATE_NAME");
}

#[tokio::test]
async fn list_by_name_returns_match_or_empty() {
    let app = TestApp::spawn().await;
    app.post("/items", json!({"name": "Widget", "price": 9.99})).await;

    let (status, body) = app.get("/items?name=Widget").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Widget");

    let (status, body) = app.get("/items?name=Nope").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn name_filter_is_trimmed_and_blank_means_unfiltered() {
    let app = TestApp::spawn().await;
    app.post("/items", json!({"name": "Widget", "price": 9.99})).await;
    app.post("/items", json!({"name": "Gadget", "price": 1.0})).await;

    let (status, body) = app.get("/items?name=%20Widget%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Widget");

    for query in ["/items?name=", "/items?name=%20%20"] {
        let (status, body) = app.get(query).await;
        assert_eq!(status, StatusCode::OK, "query: {query}");
        assert_eq!(body.as_array().unwrap().len(), 2, "query: {query}");
    }
}

#[tokio::test]
async fn list_pages_in_id_order() {
    let app = TestApp::spawn().await;
    for i in 0..5 {
        app.post("/items", json!({"name": format!("item-{i}"), "price": 1.0}))
            .await;
    }

    let (status, body) = app.get("/items").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);

    let (_, body) = app.get("/items?skip=1&limit=2").await;
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["item-1", "item-2"]);

    let (_, body) = app.get("/items?limit=0").await;
    assert_eq!(body, json!([]));

    let (status, _) = app.get("/items?limit=5000").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app.get("/items?skip=-1").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn invalid_input_is_unprocessable() {
    let app = TestApp::spawn().await;

    for body in [
        json!({"name": "", "price": 1.0}),
        json!({"name": "   ", "price": 1.0}),
        json!({"name": "x".repeat(81), "price": 1.0}),
        json!({"name": "Widget", "description": "d".repeat(201), "price": 1.0}),
        json!({"name": "Widget", "price": -1.0}),
        json!({"name": "Widget", "price": "cheap"}),
        json!({"name": "Widget"}),
        json!({"price": 1.0}),
    ] {
        let (status, resp) = app.post("/items", body.clone()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {body}");
        assert_eq!(resp["code"], "VALIDATION_ERROR");
    }

    let (status, body) = app.get("/items/abc").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    // Nothing was stored
    let (_, body) = app.get("/items").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn names_are_trimmed_and_prices_rounded() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post("/items", json!({"name": "  Gadget  ", "price": 0.005}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Gadget");
    assert_eq!(body["price"], 0.01);

    let (status, _) = app
        .post("/items", json!({"name": "Gadget", "price": 0.0}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_twice_is_not_found() {
    let app = TestApp::spawn().await;
    app.post("/items", json!({"name": "Widget", "price": 1.0})).await;

    let (status, _) = app.delete("/items/1").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.delete("/items/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
