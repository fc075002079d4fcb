use std::net::SocketAddr;
use std::sync::Arc;

use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use server::{build_app, AppState};
use service::MemStorage;
use tokio::net::TcpListener;
use uuid::Uuid;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let mut cfg = AppConfig::default();
    cfg.assets.client_dir = std::env::temp_dir()
        .join(format!("scoreboard_e2e_{}", Uuid::new_v4()))
        .display()
        .to_string();
    let app = build_app(&cfg, AppState::with_storage(Arc::new(MemStorage::new())))?;

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_submit_and_rank_scores() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    for (wallet, score) in [("0xaaa", 150), ("0xbbb", 900), ("0xccc", 420)] {
        let res = c
            .post(format!("{}/api/scores", app.base_url))
            .json(&json!({"walletAddress": wallet, "score": score}))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
    }

    let res = c.get(format!("{}/api/scores?limit=2", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let top = res.json::<Vec<Value>>().await?;
    assert_eq!(top.len(), 2);
    assert_eq!(top[0]["walletAddress"], "0xbbb");
    assert_eq!(top[1]["walletAddress"], "0xccc");
    Ok(())
}

#[tokio::test]
async fn e2e_invalid_submission() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .post(format!("{}/api/scores", app.base_url))
        .json(&json!({"walletAddress": "0xaaa", "score": 1.5}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Invalid data");
    assert_eq!(body["errors"][0]["received"], "float");
    Ok(())
}

#[tokio::test]
async fn e2e_notes() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/api/notes", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let notes = res.json::<Vec<Value>>().await?;
    assert_eq!(notes.len(), 4);
    let highlighted: Vec<_> = notes.iter().map(|n| n["isHighlighted"].clone()).collect();
    assert_eq!(highlighted, vec![json!(0), json!(0), json!(0), json!(1)]);
    Ok(())
}
