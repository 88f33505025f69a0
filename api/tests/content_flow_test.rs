//! Integration tests for the media/feed/progress lifecycle exposed under
//! `/api/v1/content`.

use actix_web::{http::StatusCode, test, web};
use serde_json::{json, Value};

use ns_api::app::create_app;
use ns_api::state::AppState;
use ns_shared::config::AppConfig;

fn auth_header(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

#[actix_web::test]
async fn feed_unlocks_posts_only_after_the_required_unit_is_read() {
    let state = web::Data::new(AppState::bootstrap(AppConfig::load()).expect("bootstrap"));
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/phone/start")
        .set_json(json!({ "phone": "+61491570199" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let challenge: Value = test::read_body_json(resp).await;
    let challenge_id = challenge["challengeId"].as_str().unwrap().to_string();
    let dev_code = challenge["devCode"].as_str().unwrap().to_string();
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/phone/verify")
        .set_json(json!({ "challengeId": challenge_id, "code": dev_code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let login: Value = test::read_body_json(resp).await;
    let token = login["session"]["accessToken"].as_str().unwrap().to_string();
    let user_id = login["user"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/v1/content/media-items")
        .insert_header(auth_header(&token))
        .set_json(json!({ "kind": "book", "title": "The Starless Sea" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let media_item: Value = test::read_body_json(resp).await;
    let media_item_id = media_item["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/v1/content/media-units")
        .insert_header(auth_header(&token))
        .set_json(json!({
            "mediaItemId": media_item_id,
            "releaseOrder": 1,
            "chapter": 1
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let unit: Value = test::read_body_json(resp).await;
    let unit_id = unit["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/v1/content/group-selections")
        .insert_header(auth_header(&token))
        .set_json(json!({ "groupId": "group-1", "mediaItemId": media_item_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/v1/content/posts")
        .insert_header(auth_header(&token))
        .set_json(json!({
            "groupId": "group-1",
            "mediaItemId": media_item_id,
            "authorId": user_id,
            "previewText": "no spoilers here",
            "body": "the full spoilery take",
            "requiredUnitId": unit_id
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let feed_uri = format!("/api/v1/content/feed?groupId=group-1&mediaItemId={media_item_id}");
    let req = test::TestRequest::get()
        .uri(&feed_uri)
        .insert_header(auth_header(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let feed: Value = test::read_body_json(resp).await;
    assert_eq!(feed["posts"].as_array().unwrap().len(), 1);
    assert!(!feed["posts"][0]["unlocked"].as_bool().unwrap());
    assert!(feed["posts"][0]["body"].is_null());

    let req = test::TestRequest::post()
        .uri("/api/v1/content/progress/mark")
        .insert_header(auth_header(&token))
        .set_json(json!({
            "groupId": "group-1",
            "mediaItemId": media_item_id,
            "unitId": unit_id
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&feed_uri)
        .insert_header(auth_header(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let feed: Value = test::read_body_json(resp).await;
    assert!(feed["posts"][0]["unlocked"].as_bool().unwrap());
    assert_eq!(feed["posts"][0]["body"], "the full spoilery take");
}

#[actix_web::test]
async fn creating_a_post_against_an_unselected_media_item_is_rejected() {
    let state = web::Data::new(AppState::bootstrap(AppConfig::load()).expect("bootstrap"));
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/phone/start")
        .set_json(json!({ "phone": "+61491570200" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let challenge: Value = test::read_body_json(resp).await;
    let challenge_id = challenge["challengeId"].as_str().unwrap().to_string();
    let dev_code = challenge["devCode"].as_str().unwrap().to_string();
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/phone/verify")
        .set_json(json!({ "challengeId": challenge_id, "code": dev_code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let login: Value = test::read_body_json(resp).await;
    let token = login["session"]["accessToken"].as_str().unwrap().to_string();
    let user_id = login["user"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/v1/content/media-items")
        .insert_header(auth_header(&token))
        .set_json(json!({ "kind": "show", "title": "Severance" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let media_item: Value = test::read_body_json(resp).await;
    let media_item_id = media_item["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/v1/content/media-units")
        .insert_header(auth_header(&token))
        .set_json(json!({ "mediaItemId": media_item_id, "releaseOrder": 1, "season": 1, "episode": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let unit: Value = test::read_body_json(resp).await;
    let unit_id = unit["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/v1/content/posts")
        .insert_header(auth_header(&token))
        .set_json(json!({
            "groupId": "group-2",
            "mediaItemId": media_item_id,
            "authorId": user_id,
            "previewText": "preview",
            "body": "body",
            "requiredUnitId": unit_id
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn rollback_restores_progress_to_its_prior_version() {
    let state = web::Data::new(AppState::bootstrap(AppConfig::load()).expect("bootstrap"));
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/phone/start")
        .set_json(json!({ "phone": "+61491570201" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let challenge: Value = test::read_body_json(resp).await;
    let challenge_id = challenge["challengeId"].as_str().unwrap().to_string();
    let dev_code = challenge["devCode"].as_str().unwrap().to_string();
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/phone/verify")
        .set_json(json!({ "challengeId": challenge_id, "code": dev_code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let login: Value = test::read_body_json(resp).await;
    let token = login["session"]["accessToken"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/v1/content/media-items")
        .insert_header(auth_header(&token))
        .set_json(json!({ "kind": "book", "title": "Piranesi" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let media_item: Value = test::read_body_json(resp).await;
    let media_item_id = media_item["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/v1/content/media-units")
        .insert_header(auth_header(&token))
        .set_json(json!({ "mediaItemId": media_item_id, "releaseOrder": 1, "chapter": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let unit: Value = test::read_body_json(resp).await;
    let unit_id = unit["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/v1/content/group-selections")
        .insert_header(auth_header(&token))
        .set_json(json!({ "groupId": "group-3", "mediaItemId": media_item_id }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/content/progress/mark")
        .insert_header(auth_header(&token))
        .set_json(json!({ "groupId": "group-3", "mediaItemId": media_item_id, "unitId": unit_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let mark_result: Value = test::read_body_json(resp).await;
    let rollback_token = mark_result["rollbackToken"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/v1/content/progress/rollback")
        .insert_header(auth_header(&token))
        .set_json(json!({ "rollbackToken": rollback_token }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/v1/content/progress/rollback")
        .insert_header(auth_header(&token))
        .set_json(json!({ "rollbackToken": rollback_token }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}
