mod common;

use anyhow::Result;
use common::spawn_app;
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

#[tokio::test]
async fn test_walk_difficulty_lifecycle() -> Result<()> {
    let app = spawn_app().await?;

    let easy = app.create_walk_difficulty("Easy").await?;
    let medium = app.create_walk_difficulty("Medium").await?;
    assert_ne!(easy["id"], medium["id"]);

    let all: Vec<Value> = app.get("/walkdifficulties").await?.json().await?;
    assert_eq!(all.len(), 2);

    let path = format!("/walkdifficulties/{}", medium["id"].as_str().unwrap());
    let updated: Value = app
        .put_json(&path, &json!({ "name": "Moderate" }))
        .await?
        .json()
        .await?;
    assert_eq!(updated, json!({ "id": medium["id"], "name": "Moderate" }));
    assert_eq!(app.get(&path).await?.json::<Value>().await?, updated);

    let response = app.delete(&path).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await?, updated);
    assert_eq!(app.get(&path).await?.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_referenced_difficulty_cannot_be_deleted() -> Result<()> {
    let app = spawn_app().await?;
    let region = app.create_region("CAN", "Canterbury").await?;
    let hard = app.create_walk_difficulty("Hard").await?;

    let response = app
        .post_json(
            "/walks",
            &json!({
                "name": "Avalanche Peak",
                "length": 7.0,
                "regionId": region["id"],
                "walkDifficultyId": hard["id"]
            }),
        )
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let path = format!("/walkdifficulties/{}", hard["id"].as_str().unwrap());
    let response = app.delete(&path).await?;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(app.get(&path).await?.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_unknown_difficulty_is_not_found() -> Result<()> {
    let app = spawn_app().await?;
    let path = format!("/walkdifficulties/{}", Uuid::new_v4());

    assert_eq!(app.get(&path).await?.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        app.put_json(&path, &json!({ "name": "Expert" }))
            .await?
            .status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(app.delete(&path).await?.status(), StatusCode::NOT_FOUND);

    Ok(())
}
