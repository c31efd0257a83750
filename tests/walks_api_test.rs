mod common;

use anyhow::Result;
use common::{spawn_app, TestApp};
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

struct References {
    region_id: String,
    walk_difficulty_id: String,
}

async fn references(app: &TestApp) -> Result<References> {
    let region = app.create_region("WKO", "Waikato").await?;
    let difficulty = app.create_walk_difficulty("Easy").await?;
    Ok(References {
        region_id: region["id"].as_str().unwrap().to_string(),
        walk_difficulty_id: difficulty["id"].as_str().unwrap().to_string(),
    })
}

fn walk_body(name: &str, length: f64, refs: &References) -> Value {
    json!({
        "name": name,
        "length": length,
        "regionId": refs.region_id,
        "walkDifficultyId": refs.walk_difficulty_id
    })
}

#[tokio::test]
async fn test_create_and_fetch_walk() -> Result<()> {
    let app = spawn_app().await?;
    let refs = references(&app).await?;

    let response = app
        .post_json("/walks", &walk_body("Hakarimata Summit Track", 3.2, &refs))
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("Location header");
    let created: Value = response.json().await?;
    let id = created["id"].as_str().unwrap();
    assert_eq!(location, format!("/walks/{}", id));
    assert_ne!(id, Uuid::nil().to_string());

    let fetched: Value = app.get(&location).await?.json().await?;
    assert_eq!(
        fetched,
        json!({
            "id": id,
            "name": "Hakarimata Summit Track",
            "length": 3.2,
            "regionId": refs.region_id,
            "walkDifficultyId": refs.walk_difficulty_id
        })
    );

    let all: Vec<Value> = app.get("/walks").await?.json().await?;
    assert_eq!(all, vec![fetched]);

    Ok(())
}

#[tokio::test]
async fn test_create_ignores_client_id() -> Result<()> {
    let app = spawn_app().await?;
    let refs = references(&app).await?;

    let chosen = Uuid::new_v4().to_string();
    let mut body = walk_body("Bridal Veil Falls", 0.8, &refs);
    body["id"] = json!(chosen);

    let first: Value = app.post_json("/walks", &body).await?.json().await?;
    let second: Value = app.post_json("/walks", &body).await?.json().await?;

    assert_ne!(first["id"], json!(chosen));
    assert_ne!(first["id"], second["id"]);

    Ok(())
}

#[tokio::test]
async fn test_create_rejects_unknown_references() -> Result<()> {
    let app = spawn_app().await?;
    let refs = references(&app).await?;

    let unknown_region = References {
        region_id: Uuid::new_v4().to_string(),
        walk_difficulty_id: refs.walk_difficulty_id.clone(),
    };
    let response = app
        .post_json("/walks", &walk_body("Lost Track", 1.0, &unknown_region))
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert!(body["error"].as_str().unwrap().contains("does not exist"));

    let unknown_difficulty = References {
        region_id: refs.region_id.clone(),
        walk_difficulty_id: Uuid::new_v4().to_string(),
    };
    let response = app
        .post_json("/walks", &walk_body("Lost Track", 1.0, &unknown_difficulty))
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let all: Vec<Value> = app.get("/walks").await?.json().await?;
    assert!(all.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_update_walk_twice_gives_same_state() -> Result<()> {
    let app = spawn_app().await?;
    let refs = references(&app).await?;
    let created: Value = app
        .post_json("/walks", &walk_body("Te Araroa (Waikato)", 120.0, &refs))
        .await?
        .json()
        .await?;
    let path = format!("/walks/{}", created["id"].as_str().unwrap());

    let other_region = app.create_region("BOP", "Bay of Plenty").await?;
    let moved = References {
        region_id: other_region["id"].as_str().unwrap().to_string(),
        walk_difficulty_id: refs.walk_difficulty_id.clone(),
    };
    let update = walk_body("Mount Maunganui Summit", 3.4, &moved);

    let first = app.put_json(&path, &update).await?;
    assert_eq!(first.status(), StatusCode::OK);
    let first: Value = first.json().await?;
    let second: Value = app.put_json(&path, &update).await?.json().await?;

    assert_eq!(first, second);
    assert_eq!(first["id"], created["id"]);
    assert_eq!(first["regionId"], other_region["id"]);
    assert_eq!(app.get(&path).await?.json::<Value>().await?, first);

    Ok(())
}

#[tokio::test]
async fn test_update_with_unknown_reference_is_rejected() -> Result<()> {
    let app = spawn_app().await?;
    let refs = references(&app).await?;
    let created: Value = app
        .post_json("/walks", &walk_body("Pirongia Summit", 9.0, &refs))
        .await?
        .json()
        .await?;
    let path = format!("/walks/{}", created["id"].as_str().unwrap());

    let bad = References {
        region_id: Uuid::new_v4().to_string(),
        walk_difficulty_id: refs.walk_difficulty_id.clone(),
    };
    let response = app.put_json(&path, &walk_body("Pirongia Summit", 9.0, &bad)).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // 原本的資料不受影響
    assert_eq!(app.get(&path).await?.json::<Value>().await?, created);

    Ok(())
}

#[tokio::test]
async fn test_unknown_walk_is_not_found() -> Result<()> {
    let app = spawn_app().await?;
    let refs = references(&app).await?;
    let path = format!("/walks/{}", Uuid::new_v4());

    let response = app.get(&path).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.text().await?.is_empty());

    assert_eq!(
        app.put_json(&path, &walk_body("Nowhere", 1.0, &refs))
            .await?
            .status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(app.delete(&path).await?.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_malformed_walk_id_is_not_found() -> Result<()> {
    let app = spawn_app().await?;
    let refs = references(&app).await?;

    let response = app.get("/walks/not-a-uuid").await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.text().await?.is_empty());

    let response = app
        .put_json("/walks/not-a-uuid", &walk_body("Nowhere", 1.0, &refs))
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.delete("/walks/not-a-uuid").await?.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_delete_walk_and_referenced_region() -> Result<()> {
    let app = spawn_app().await?;
    let refs = references(&app).await?;
    let created: Value = app
        .post_json("/walks", &walk_body("Waitomo Walkway", 5.0, &refs))
        .await?
        .json()
        .await?;
    let walk_path = format!("/walks/{}", created["id"].as_str().unwrap());
    let region_path = format!("/regions/{}", refs.region_id);

    // region 仍被參照時不可刪除
    let response = app.delete(&region_path).await?;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app.delete(&walk_path).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await?, created);

    assert_eq!(app.get(&walk_path).await?.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.delete(&walk_path).await?.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.delete(&region_path).await?.status(), StatusCode::OK);

    Ok(())
}
