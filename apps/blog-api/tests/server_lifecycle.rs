mod common;

use reqwest::StatusCode;
use serde_json::json;

use blog_api::{AppConfig, AppState, RunningServer};
use blog_core::ports::BaseRepository;
use blog_shared::PostResponse;

use common::{SEED_COUNT, run_seeded};

fn local_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: None,
    }
}

#[actix_web::test]
async fn serves_posts_over_a_real_socket() {
    let server = RunningServer::start(&local_config()).await.unwrap();
    let state = server.state().clone();
    let base = server.url();

    run_seeded(state, |ctx| async move {
        let client = reqwest::Client::new();

        let resp = client.get(format!("{base}/posts")).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let posts: Vec<PostResponse> = resp.json().await.unwrap();
        assert_eq!(posts.len(), SEED_COUNT);

        let resp = client
            .post(format!("{base}/posts"))
            .json(&json!({
                "title": "T",
                "content": "C",
                "author": { "firstName": "A", "lastName": "B" }
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: PostResponse = resp.json().await.unwrap();
        assert_eq!(created.author, "A B");

        let resp = client
            .delete(format!("{base}/posts/{}", created.id))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(ctx.repo().find_by_id(created.id).await.unwrap().is_none());
    })
    .await;

    server.stop().await.unwrap();
}

#[actix_web::test]
async fn stop_releases_the_socket() {
    let server = RunningServer::start_with_state(&local_config(), AppState::in_memory()).unwrap();
    let base = server.url();

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    server.stop().await.unwrap();

    assert!(reqwest::get(format!("{base}/health")).await.is_err());
}
