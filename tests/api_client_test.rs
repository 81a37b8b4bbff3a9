// ABOUTME: Integration tests for the REST client against an in-process axum backend
// ABOUTME: Covers auth headers, envelopes, error mapping, ok:false bodies, HTTP verbs and multipart uploads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, patch, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use vitalflow::challenges::MarkOutcome;
use vitalflow::client::ApiClient;
use vitalflow::config::ClientConfig;
use vitalflow::errors::ErrorCode;
use vitalflow::models::{Challenge, Goal, RequestStatus, UserProfile};
use vitalflow::profile::{Attachment, NutritionistApplication};
use vitalflow::recipes::{CatalogFilters, RecipeDraft};

const TOKEN: &str = "token-de-prueba";

// ============================================================================
// Fake backend
// ============================================================================

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

async fn my_plans(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"msg": "Token inválido"})));
    }
    (
        StatusCode::OK,
        Json(json!({"plans": [{"_id": "p1", "status": "pending_review"}, 42]})),
    )
}

async fn generate_plan() -> (StatusCode, Json<Value>) {
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(json!({"msg": "Ya generaste un plan esta semana"})),
    )
}

async fn bulk(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    let ids = query.get("ids").cloned().unwrap_or_default();
    let recipes: Vec<Value> = ids
        .split(',')
        .map(|id| json!({"_id": id, "title": format!("Receta {id}"), "ingredientes": "sal, agua"}))
        .collect();
    Json(json!({"recipes": recipes}))
}

async fn catalog(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!({
        "data": [{"_id": "c1", "title": query.get("q").cloned().unwrap_or_default()}],
        "total": 31,
        "page": query.get("page").and_then(|p| p.parse::<u32>().ok()),
        "limit": query.get("limit").cloned(),
    }))
}

async fn create_recipe() -> Json<Value> {
    Json(json!({"ok": false, "msg": "Ya existe una receta con ese título"}))
}

async fn edit_recipe(Path(id): Path<String>, Json(mut body): Json<Value>) -> Json<Value> {
    body["_id"] = json!(id);
    Json(json!({"ok": true, "recipe": body}))
}

async fn get_recipe(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    if id == "ghost" {
        return (StatusCode::OK, Json(json!({"ok": true})));
    }
    (StatusCode::OK, Json(json!({"data": {"_id": id, "title": "Pozole"}})))
}

async fn favorites() -> Json<Value> {
    Json(json!({"ok": true, "data": [{"_id": "r1", "title": "Uno"}, "r2", null]}))
}

async fn toggle_favorite() -> Json<Value> {
    Json(json!({"ok": true}))
}

async fn update_challenge(Path(id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
    let mut challenge = body;
    challenge["_id"] = json!(id);
    Json(json!({"data": challenge}))
}

async fn mark_day() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"message": "Solo puedes marcar una vez cada 24 horas"})),
    )
}

async fn active_challenges() -> Json<Value> {
    Json(json!({"active": [
        {"challengeId": {"_id": "c1", "title": "Agua", "durationDays": 10}, "completedDays": 5, "streak": 2}
    ]}))
}

async fn review_plans() -> Json<Value> {
    Json(json!([{"_id": "p1"}, {"_id": "p2"}]))
}

async fn approve(Path(id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
    Json(json!({"ok": true, "id": id, "received": body}))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::BAD_GATEWAY, "")
}

/// Documents the fake backend keeps between calls
#[derive(Default)]
struct Stored {
    user: Option<Value>,
    request: Option<Value>,
}

type Shared = Arc<Mutex<Stored>>;

async fn read_multipart(mut multipart: Multipart) -> HashMap<String, (Option<String>, String)> {
    let mut fields = HashMap::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_owned();
        let file_name = field.file_name().map(str::to_owned);
        let data = field.bytes().await.unwrap();
        fields.insert(name, (file_name, String::from_utf8_lossy(&data).into_owned()));
    }
    fields
}

async fn get_profile(State(stored): State<Shared>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"msg": "Token inválido"})));
    }
    let user = stored
        .lock()
        .unwrap()
        .user
        .clone()
        .unwrap_or_else(|| json!({"_id": "u1", "name": "Ana López", "goal": "mantener"}));
    (StatusCode::OK, Json(json!({"user": user})))
}

async fn patch_profile(State(stored): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    let mut user = body;
    user["_id"] = json!("u1");
    stored.lock().unwrap().user = Some(user.clone());
    Json(json!({"ok": true, "user": user}))
}

async fn patch_profile_with_avatar(
    State(stored): State<Shared>,
    multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    let fields = read_multipart(multipart).await;
    let avatar = fields.get("avatar");
    if avatar.and_then(|(name, _)| name.as_deref()) != Some("avatar.png") {
        return (StatusCode::BAD_REQUEST, Json(json!({"msg": "Falta el avatar"})));
    }
    let diets: Value = serde_json::from_str(&fields["diets"].1).unwrap();
    let mut user = json!({
        "_id": "u1",
        "name": fields["name"].1,
        "diets": diets,
        "avatarUrl": "/uploads/avatar.png"
    });
    if fields.contains_key("weightKg") {
        user["weightKg"] = json!(fields["weightKg"].1);
    }
    stored.lock().unwrap().user = Some(user);
    (StatusCode::OK, Json(json!({"ok": true})))
}

async fn my_request(State(stored): State<Shared>) -> Json<Value> {
    let request = stored.lock().unwrap().request.clone();
    Json(json!({"ok": true, "request": request}))
}

async fn submit_request(State(stored): State<Shared>, multipart: Multipart) -> (StatusCode, Json<Value>) {
    let fields = read_multipart(multipart).await;
    let Some((Some(certificate), _)) = fields.get("certificate") else {
        return (StatusCode::BAD_REQUEST, Json(json!({"msg": "Falta el certificado"})));
    };
    let request = json!({
        "_id": "n1",
        "status": "pending",
        "fullName": fields["fullName"].1,
        "specialties": fields["specialties"].1,
        "certificate": certificate,
        "hasCv": fields.contains_key("cv"),
    });
    stored.lock().unwrap().request = Some(request.clone());
    (StatusCode::CREATED, Json(json!({"ok": true, "request": request})))
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/plans/me", get(my_plans))
        .route("/api/plans/generate", post(generate_plan))
        .route("/api/recipes/bulk", get(bulk))
        .route("/api/recipes/me", get(broken))
        .route("/api/recipes/favorites/me", get(favorites))
        .route("/api/recipes", get(catalog).post(create_recipe))
        .route("/api/recipes/:id", patch(edit_recipe).get(get_recipe))
        .route(
            "/api/recipes/:id/favorite",
            post(toggle_favorite).delete(toggle_favorite),
        )
        .route("/api/challenges/me/active", get(active_challenges))
        .route("/api/challenges/:id", put(update_challenge))
        .route("/api/challenges/:id/mark", post(mark_day))
        .route("/plans", get(review_plans))
        .route("/plans/:id/approve", patch(approve))
        .route("/api/user/me", get(get_profile).patch(patch_profile))
        .route("/api/user/profile", patch(patch_profile_with_avatar))
        .route("/api/nutriologo/request", post(submit_request))
        .route("/api/nutriologo/request/me", get(my_request))
        .with_state(Shared::default());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn client(authenticated: bool) -> ApiClient {
    common::init_test_logging();
    let base = spawn_backend().await;
    let mut config = ClientConfig::default().with_api_url(&base).unwrap();
    if authenticated {
        config = config.with_token(TOKEN);
    }
    ApiClient::new(&config).unwrap()
}

// ============================================================================
// Plans
// ============================================================================

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let client = client(true).await;
    assert!(client.is_authenticated());
    let plans = client.my_plans().await.unwrap();
    assert_eq!(plans.len(), 1);
    assert!(plans[0].is_pending_review());
}

#[tokio::test]
async fn test_backend_message_is_surfaced() {
    let client = client(false).await;
    let error = client.my_plans().await.unwrap_err();
    assert_eq!(error.context.http_status, Some(401));
    assert_eq!(error.message, "Token inválido");

    let error = client.generate_plan().await.unwrap_err();
    assert_eq!(error.context.http_status, Some(429));
    assert_eq!(error.message, "Ya generaste un plan esta semana");
}

#[tokio::test]
async fn test_empty_error_body_uses_status_reason() {
    let client = client(true).await;
    let error = client.my_recipes().await.unwrap_err();
    assert_eq!(error.context.http_status, Some(502));
    assert_eq!(error.message, "Bad Gateway");
}

#[tokio::test]
async fn test_review_and_approve() {
    let client = client(true).await;
    assert_eq!(client.review_plans().await.unwrap().len(), 2);

    let body = client.approve_plan("p1", Some("  Bien balanceado ")).await.unwrap();
    assert_eq!(body["id"], "p1");
    assert_eq!(body["received"], json!({"notes": "Bien balanceado"}));
}

// ============================================================================
// Recipes
// ============================================================================

#[tokio::test]
async fn test_bulk_ids_round_trip_through_query() {
    let client = client(true).await;
    assert!(client.bulk_recipes(&[]).await.unwrap().is_empty());

    let ids = vec!["a 1".to_owned(), "b&2".to_owned()];
    let docs = client.bulk_recipes(&ids).await.unwrap();
    let returned: Vec<_> = docs.iter().map(|d| d["_id"].clone()).collect();
    assert_eq!(returned, vec![json!("a 1"), json!("b&2")]);
}

#[tokio::test]
async fn test_catalog_query_parameters() {
    let client = client(true).await;
    let filters = CatalogFilters {
        q: "pozole".to_owned(),
        ..CatalogFilters::default()
    };
    let response = client.catalog(&filters, 2).await.unwrap();
    assert_eq!(response.total, Some(31));
    assert_eq!(response.page, Some(2));
    assert_eq!(response.data[0]["title"], "pozole");
}

#[tokio::test]
async fn test_recipe_lookup() {
    let client = client(true).await;
    let recipe = client.recipe("r9").await.unwrap();
    assert_eq!(recipe.title().as_deref(), Some("Pozole"));

    let error = client.recipe("ghost").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_save_recipe_create_and_edit() {
    let client = client(true).await;
    let mut draft = RecipeDraft::new();
    draft.title = "Pozole verde".to_owned();
    draft.add_ingredient("Maíz", "500", "g").unwrap();

    let error = client.save_recipe(&draft).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.message, "Ya existe una receta con ese título");

    draft.id = Some("r5".to_owned());
    let saved = client.save_recipe(&draft).await.unwrap();
    assert_eq!(saved.id().as_deref(), Some("r5"));
    assert_eq!(saved.ingredients()[0].name, "Maíz");
    assert_eq!(saved.ingredients()[0].amount, "500");
}

// ============================================================================
// Favorites and challenges
// ============================================================================

#[tokio::test]
async fn test_server_favorites() {
    let client = client(true).await;
    let favorites = client.server_favorites().await.unwrap();
    assert_eq!(favorites.iter().collect::<Vec<_>>(), vec!["r1", "r2"]);
    assert!(client.add_favorite("r3").await.is_ok());
    assert!(client.remove_favorite("r3").await.is_ok());
}

#[tokio::test]
async fn test_update_challenge_uses_put() {
    let client = client(true).await;
    let mut challenge = Challenge::new("Agua", "Dos litros al día");
    assert_eq!(
        client.update_challenge(&challenge).await.unwrap_err().code,
        ErrorCode::InvalidInput
    );

    challenge.id = Some("c1".to_owned());
    let updated = client.update_challenge(&challenge).await.unwrap();
    assert_eq!(updated.id.as_deref(), Some("c1"));
    assert_eq!(updated.title, "Agua");
}

#[tokio::test]
async fn test_mark_day_cooldown() {
    let client = client(true).await;
    let outcome = MarkOutcome::from_result(client.mark_challenge_day("c1").await);
    assert!(matches!(outcome, MarkOutcome::Cooldown(ref msg) if msg.contains("24 horas")));
}

#[tokio::test]
async fn test_active_challenges_envelope() {
    let client = client(true).await;
    let active = client.my_active_challenges().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].progress_percent(), 50);
}

// ============================================================================
// Token-only endpoints
// ============================================================================

#[tokio::test]
async fn test_token_only_endpoints_fail_before_sending() {
    let client = client(false).await;

    let error = client.review_plans().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);
    assert_eq!(error.http_status(), 401);
    assert!(error.context.http_status.is_none());

    assert_eq!(
        client.approve_plan("p1", None).await.unwrap_err().code,
        ErrorCode::AuthRequired
    );
    assert_eq!(
        client.server_favorites().await.unwrap_err().code,
        ErrorCode::AuthRequired
    );
    assert_eq!(client.profile().await.unwrap_err().code, ErrorCode::AuthRequired);
    assert_eq!(
        client.my_nutritionist_request().await.unwrap_err().code,
        ErrorCode::AuthRequired
    );
}

// ============================================================================
// Profile and onboarding
// ============================================================================

#[tokio::test]
async fn test_profile_round_trip() {
    let client = client(true).await;
    let mut profile = client.profile().await.unwrap();
    assert_eq!(profile.id.as_deref(), Some("u1"));
    assert_eq!(profile.first_name(), Some("Ana"));

    profile.weight_kg = Some(62.5);
    profile.goal = Goal::GanarMasa;
    profile.allergies = vec!["nuez".to_owned()];
    let saved = client.update_profile(&profile).await.unwrap();
    assert_eq!(saved.weight_kg, Some(62.5));
    assert_eq!(saved.goal, Goal::GanarMasa);
    assert_eq!(saved.allergies, vec!["nuez"]);
    assert_eq!(saved.locale.as_deref(), Some("es-MX"));
}

#[tokio::test]
async fn test_avatar_update_is_multipart_and_rereads_profile() {
    let client = client(true).await;
    let profile = UserProfile {
        name: Some("Ana López".to_owned()),
        diets: vec!["vegana".to_owned(), "sin gluten".to_owned()],
        ..UserProfile::default()
    };
    let avatar = Attachment::new("avatar.png", vec![0x89, b'P', b'N', b'G']);

    let saved = client.update_profile_with_avatar(&profile, &avatar).await.unwrap();
    assert_eq!(saved.diets, vec!["vegana", "sin gluten"]);
    assert!(saved.weight_kg.is_none());
    assert_eq!(saved.extra.get("avatarUrl"), Some(&json!("/uploads/avatar.png")));
}

#[tokio::test]
async fn test_onboarding_marks_profile_complete() {
    let client = client(true).await;
    let profile = UserProfile {
        name: Some("Ana López".to_owned()),
        height_cm: Some(165.0),
        goal: Goal::PerderPeso,
        ..UserProfile::default()
    };
    let onboarded = client.complete_onboarding(&profile).await.unwrap();
    assert!(onboarded.onboarding_completed);
    assert_eq!(onboarded.height_cm, Some(165.0));
    assert_eq!(onboarded.name.as_deref(), Some("Ana López"));

    let stored = client.profile().await.unwrap();
    assert!(stored.onboarding_completed);
    assert_eq!(stored.goal, Goal::PerderPeso);
}

// ============================================================================
// Nutritionist application
// ============================================================================

fn application() -> NutritionistApplication {
    let mut application = NutritionistApplication {
        full_name: "Dra. Laura Ruiz".to_owned(),
        phone: "2221234567".to_owned(),
        city: "Puebla".to_owned(),
        professional_id: "12345678".to_owned(),
        degree: "Lic. en Nutrición".to_owned(),
        university: "BUAP".to_owned(),
        ..NutritionistApplication::default()
    };
    application.add_specialty("Deportiva");
    application.add_specialty("Clínica");
    application
}

#[tokio::test]
async fn test_nutritionist_request_submit_and_lookup() {
    let client = client(true).await;
    assert!(client.my_nutritionist_request().await.unwrap().is_none());

    let certificate = Attachment::new("cedula.pdf", b"%PDF-1.4".to_vec());
    let request = client
        .submit_nutritionist_request(&application(), &certificate, None)
        .await
        .unwrap();
    assert!(request.is_pending());
    assert_eq!(request.id.as_deref(), Some("n1"));
    assert_eq!(request.extra["specialties"], "Deportiva,Clínica");
    assert_eq!(request.extra["certificate"], "cedula.pdf");
    assert_eq!(request.extra["hasCv"], false);

    let existing = client.my_nutritionist_request().await.unwrap().unwrap();
    assert_eq!(existing.status, RequestStatus::Pending);

    let error = client
        .submit_nutritionist_request(&application(), &certificate, None)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_nutritionist_request_validation_happens_locally() {
    let client = client(false).await;
    let certificate = Attachment::new("cedula.pdf", b"%PDF-1.4".to_vec());

    let mut incomplete = application();
    incomplete.city = "  ".to_owned();
    let error = client
        .submit_nutritionist_request(&incomplete, &certificate, None)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    let empty = Attachment::new("cedula.pdf", Vec::new());
    let error = client
        .submit_nutritionist_request(&application(), &empty, None)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    let error = client
        .submit_nutritionist_request(&application(), &certificate, None)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);
}
