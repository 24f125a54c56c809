//! HTTP integration tests.
//!
//! Starts the real server on a temp data file and exercises it with reqwest.

use products_api::config::{FailurePolicy, ServerConfig};
use products_api::http;
use products_api::lifecycle::ProductSystem;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Bind to port 0 and return the actual address.
async fn start_server(config: &ServerConfig) -> String {
    let system = ProductSystem::new(config);
    let app = http::router(system.product_client.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
        drop(system);
    });
    format!("http://{addr}")
}

fn test_config(dir: &TempDir) -> ServerConfig {
    ServerConfig {
        bind_address: "127.0.0.1:0".into(),
        data_path: dir.path().join("data").join("products.json"),
        ..ServerConfig::default()
    }
}

async fn body(resp: reqwest::Response) -> Value {
    resp.json().await.unwrap()
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let dir = TempDir::new().unwrap();
    let base = start_server(&test_config(&dir)).await;

    let resp = reqwest::get(format!("{base}/products")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body(resp).await, json!([]));
}

#[tokio::test]
async fn create_assigns_next_id_and_persists() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    std::fs::create_dir_all(config.data_path.parent().unwrap()).unwrap();
    std::fs::write(
        &config.data_path,
        r#"[{"id": 1, "name": "Olma", "price": 5000}]"#,
    )
    .unwrap();
    let base = start_server(&config).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/products"))
        .json(&json!({"name": "Non", "price": 3000}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        body(resp).await,
        json!({"id": 2, "name": "Non", "price": 3000})
    );

    let stored: Value =
        serde_json::from_str(&std::fs::read_to_string(&config.data_path).unwrap()).unwrap();
    assert_eq!(
        stored,
        json!([
            {"id": 1, "name": "Olma", "price": 5000},
            {"id": 2, "name": "Non", "price": 3000}
        ])
    );
}

#[tokio::test]
async fn create_and_update_answer_with_exact_json_text() {
    let dir = TempDir::new().unwrap();
    let base = start_server(&test_config(&dir)).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/products"))
        .header("content-type", "application/json")
        .body(r#"{"name":"Pen","price":1.5}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.text().await.unwrap(), r#"{"id":1,"name":"Pen","price":1.5}"#);

    let resp = client
        .put(format!("{base}/products/1"))
        .header("content-type", "application/json")
        .body(r#"{"price":2.0}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), r#"{"id":1,"name":"Pen","price":2.0}"#);
}

#[tokio::test]
async fn create_after_i64_max_id_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    std::fs::create_dir_all(config.data_path.parent().unwrap()).unwrap();
    std::fs::write(
        &config.data_path,
        r#"[{"id": 9223372036854775807, "name": "Olma", "price": 5000}]"#,
    )
    .unwrap();
    let base = start_server(&config).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/products"))
        .json(&json!({"name": "Non", "price": 3000}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body(resp).await, json!({"message": "Yangi ID ajratib bo‘lmadi"}));

    // The actor survived and the file is unchanged.
    let resp = reqwest::get(format!("{base}/products")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body(resp).await,
        json!([{"id": 9223372036854775807_i64, "name": "Olma", "price": 5000}])
    );
}

#[tokio::test]
async fn create_without_price_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    let base = start_server(&config).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/products"))
        .json(&json!({"name": "Olma"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body(resp).await, json!({"message": "name va price majburiy!"}));
    assert!(!config.data_path.exists(), "Rejected create must not write");
}

#[tokio::test]
async fn create_with_malformed_json_is_rejected() {
    let dir = TempDir::new().unwrap();
    let base = start_server(&test_config(&dir)).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/products"))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body(resp).await, json!({"message": "JSON formati noto‘g‘ri"}));
}

#[tokio::test]
async fn update_merges_fields_and_keeps_id() {
    let dir = TempDir::new().unwrap();
    let base = start_server(&test_config(&dir)).await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base}/products"))
        .json(&json!({"name": "Olma", "price": 5000, "color": "qizil"}))
        .send()
        .await
        .unwrap();

    let resp = client
        .put(format!("{base}/products/1"))
        .json(&json!({"id": 40, "price": 5500, "stock": 12}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let expected = json!({"id": 1, "name": "Olma", "price": 5500, "color": "qizil", "stock": 12});
    assert_eq!(body(resp).await, expected);

    let resp = reqwest::get(format!("{base}/products/1")).await.unwrap();
    assert_eq!(body(resp).await, expected);
}

#[tokio::test]
async fn missing_ids_are_404() {
    let dir = TempDir::new().unwrap();
    let base = start_server(&test_config(&dir)).await;
    let client = reqwest::Client::new();

    let resp = reqwest::get(format!("{base}/products/99")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body(resp).await,
        json!({"message": "Mahsulot topilmadi (ID: 99)"})
    );

    let resp = client
        .put(format!("{base}/products/99"))
        .json(&json!({"price": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .delete(format!("{base}/products/abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body(resp).await,
        json!({"message": "Mahsulot topilmadi (ID: NaN)"})
    );
}

#[tokio::test]
async fn delete_returns_record_and_removes_it() {
    let dir = TempDir::new().unwrap();
    let base = start_server(&test_config(&dir)).await;
    let client = reqwest::Client::new();

    for name in ["Olma", "Non", "Choy"] {
        client
            .post(format!("{base}/products"))
            .json(&json!({"name": name, "price": 1000}))
            .send()
            .await
            .unwrap();
    }

    let resp = client
        .delete(format!("{base}/products/2"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body(resp).await,
        json!({"id": 2, "name": "Non", "price": 1000})
    );

    let resp = reqwest::get(format!("{base}/products/2")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = reqwest::get(format!("{base}/products")).await.unwrap();
    let ids: Vec<i64> = body(resp)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let dir = TempDir::new().unwrap();
    let base = start_server(&test_config(&dir)).await;
    let client = reqwest::Client::new();

    let resp = reqwest::get(format!("{base}/users")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers()["content-type"],
        "application/json"
    );
    assert_eq!(body(resp).await, json!({"message": "Sahifa topilmadi"}));

    let resp = client
        .patch(format!("{base}/products/1"))
        .json(&json!({"price": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body(resp).await, json!({"message": "Sahifa topilmadi"}));
}

#[tokio::test]
async fn concurrent_creates_lose_nothing() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    let base = start_server(&config).await;
    let client = reqwest::Client::new();

    let mut handles = vec![];
    for i in 0..25 {
        let client = client.clone();
        let url = format!("{base}/products");
        handles.push(tokio::spawn(async move {
            let resp = client
                .post(url)
                .json(&json!({"name": format!("Mahsulot {i}"), "price": i + 1}))
                .send()
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::CREATED);
            resp.json::<Value>().await.unwrap()["id"].as_i64().unwrap()
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=25).collect::<Vec<i64>>());

    let stored: Vec<Value> =
        serde_json::from_str(&std::fs::read_to_string(&config.data_path).unwrap()).unwrap();
    assert_eq!(stored.len(), 25);
}

#[tokio::test]
async fn graceful_shutdown_drains_the_actor() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    let system = ProductSystem::new(&config);
    let app = http::router(system.product_client.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let (stop, stopped) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(http::serve_with_shutdown(listener, app, async move {
        let _ = stopped.await;
    }));

    let resp = reqwest::Client::new()
        .post(format!("{base}/products"))
        .json(&json!({"name": "Olma", "price": 5000}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body(resp).await["id"], 1);

    stop.send(()).unwrap();
    server.await.unwrap().unwrap();
    system.shutdown().await.unwrap();

    let stored: Vec<Value> =
        serde_json::from_str(&std::fs::read_to_string(&config.data_path).unwrap()).unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn strict_policy_reports_unreadable_file() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    std::fs::create_dir_all(config.data_path.parent().unwrap()).unwrap();
    std::fs::write(&config.data_path, "{ this is not json").unwrap();
    let base = start_server(&config).await;

    let resp = reqwest::get(format!("{base}/products")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body(resp).await,
        json!({"message": "Mahsulotlarni o‘qishda xato"})
    );
}

#[tokio::test]
async fn lenient_policy_treats_unreadable_file_as_empty() {
    let dir = TempDir::new().unwrap();
    let config = ServerConfig {
        failure_policy: FailurePolicy::Lenient,
        ..test_config(&dir)
    };
    std::fs::create_dir_all(config.data_path.parent().unwrap()).unwrap();
    std::fs::write(&config.data_path, "{ this is not json").unwrap();
    let base = start_server(&config).await;

    let resp = reqwest::get(format!("{base}/products")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body(resp).await, json!([]));

    // The next create starts over from an empty collection and replaces the file.
    let resp = reqwest::Client::new()
        .post(format!("{base}/products"))
        .json(&json!({"name": "Olma", "price": 5000}))
        .send()
        .await
        .unwrap();
    assert_eq!(body(resp).await["id"], 1);
}
