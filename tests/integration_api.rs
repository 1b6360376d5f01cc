//! API Integration Tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::util::ServiceExt;

mod common;

use common::{delete, get, post_json, put_json, send, seeded_app, API_KEY};

// =========================================================================
// Auth and plumbing
// =========================================================================

#[tokio::test]
async fn test_health_needs_no_key() {
    let app = seeded_app();
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_missing_or_wrong_key_is_unauthorized() {
    let app = seeded_app();

    let req = Request::builder()
        .uri("/api/v1/members")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error_code"], "missing_api_key");

    let req = Request::builder()
        .uri("/api/v1/members")
        .header("X-API-Key", format!("{API_KEY}x"))
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error_code"], "invalid_api_key");
}

#[tokio::test]
async fn test_correlation_id_is_echoed() {
    let app = seeded_app();
    let correlation_id = "5f0c6a8e-7d1b-4b43-9a53-2f7f1d2b9c10";
    let req = Request::builder()
        .uri("/api/v1/classes")
        .header("X-API-Key", API_KEY)
        .header("X-Correlation-Id", correlation_id)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-correlation-id"], correlation_id);
}

// =========================================================================
// Roster
// =========================================================================

#[tokio::test]
async fn test_member_lifecycle() {
    let app = seeded_app();

    let (status, member) = send(
        &app,
        post_json(
            "/api/v1/members",
            json!({
                "name": "Rafael Lima",
                "unit": "Lobos",
                "birth_date": "2013-03-09",
                "role": "Desbravador"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(member["id"], 11);
    assert_eq!(member["unit"], "Lobos");

    let (status, member) = send(
        &app,
        put_json(
            "/api/v1/members/11",
            json!({
                "name": "Rafael Lima",
                "unit": "Tigres",
                "birth_date": "2013-03-09",
                "role": "Desbravador"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(member["unit"], "Tigres");

    let (status, _) = send(&app, delete("/api/v1/members/11")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = send(&app, get("/api/v1/members/11")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error_code"], "not_found");
}

#[tokio::test]
async fn test_blank_member_name_rejected() {
    let app = seeded_app();
    let (status, json) = send(
        &app,
        post_json(
            "/api/v1/members",
            json!({
                "name": "   ",
                "unit": "Lobos",
                "birth_date": "2013-03-09",
                "role": "Desbravador"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_code"], "missing_field");

    let (_, members) = send(&app, get("/api/v1/members")).await;
    assert_eq!(members.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_units_by_class() {
    let app = seeded_app();

    let (status, unit) = send(
        &app,
        post_json(
            "/api/v1/classes/Guia/units",
            json!({ "name": "Unidade Farol", "counselor_id": 3 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let unit_id = unit["id"].as_u64().unwrap();

    let (_, classes) = send(&app, get("/api/v1/classes")).await;
    let classes = classes.as_array().unwrap();
    assert_eq!(classes.len(), 6);
    let guia = classes.iter().find(|c| c["name"] == "Guia").unwrap();
    assert_eq!(guia["units"][0]["name"], "Unidade Farol");

    let (status, _) = send(&app, delete(&format!("/api/v1/classes/Amigo/units/{unit_id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, delete(&format!("/api/v1/classes/Guia/units/{unit_id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

// =========================================================================
// Specialties, minutes and events
// =========================================================================

#[tokio::test]
async fn test_completions_skip_duplicates_and_check_instructor() {
    let app = seeded_app();

    let (status, result) = send(
        &app,
        post_json(
            "/api/v1/specialties/3/completions",
            json!({ "member_ids": [1, 5], "completed_on": "2024-07-20", "instructor_id": 10 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(result["recorded"].as_array().unwrap().len(), 1);
    assert_eq!(result["skipped"], json!([1]));

    // Member 8 is the treasurer
    let (status, json) = send(
        &app,
        post_json(
            "/api/v1/specialties/3/completions",
            json!({ "member_ids": [7], "completed_on": "2024-07-20", "instructor_id": 8 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error_code"], "not_an_instructor");

    let (_, completions) = send(&app, get("/api/v1/specialties/3/completions")).await;
    assert_eq!(completions.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_minutes_attachments_deduplicated() {
    let app = seeded_app();

    let (status, minutes) = send(
        &app,
        post_json(
            "/api/v1/minutes",
            json!({
                "title": "Comissão de disciplina",
                "date": "2024-09-02",
                "kind": "Comissão Disciplinar",
                "description": "Análise de ocorrência no acampamento.",
                "participant_ids": [2, 3],
                "attachments": ["relato.pdf", "relato.pdf"]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(minutes["participant_ids"], json!([2, 3]));
    assert_eq!(minutes["attachments"], json!(["relato.pdf"]));

    let (status, _) = send(&app, get("/api/v1/minutes/3")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_event_enrollment_charges_fee() {
    let app = seeded_app();

    let (status, result) = send(
        &app,
        post_json("/api/v1/events/1/enrollments", json!({ "member_ids": [1, 7] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(result["enrollments"].as_array().unwrap().len(), 1);
    assert_eq!(result["debits"][0]["member_id"], 7);
    assert_eq!(result["debits"][0]["amount"], "50.00");
    assert_eq!(result["debits"][0]["description"], "Inscrição: Acampamento de Unidades");

    let (_, enrollments) = send(&app, get("/api/v1/events/1/enrollments")).await;
    assert_eq!(enrollments.as_array().unwrap().len(), 3);

    let (status, json) = send(
        &app,
        post_json("/api/v1/events/1/enrollments", json!({ "member_ids": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_code"], "empty_selection");
}

// =========================================================================
// Reports
// =========================================================================

#[tokio::test]
async fn test_member_report_empty_filters_match_everything() {
    let app = seeded_app();

    let (status, report) = send(
        &app,
        get("/api/v1/reports/members?search=&only_active=&unit=&role="),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["rows"].as_array().unwrap().len(), 10);
    assert_eq!(report["rows"][0]["name"], "Ana Costa");
}

#[tokio::test]
async fn test_member_report_filters_by_unit_label() {
    let app = seeded_app();

    let (status, report) = send(&app, get("/api/v1/reports/members?unit=Falc%C3%B5es")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["rows"].as_array().unwrap().len(), 3);

    let (status, _) = send(&app, get("/api/v1/reports/members?unit=Corujas")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_inverted_date_range_rejected() {
    let app = seeded_app();

    let (status, json) = send(
        &app,
        get("/api/v1/reports/cash?from=2024-03-01&to=2024-02-01"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_code"], "invalid_date_range");
}

#[tokio::test]
async fn test_export_document() {
    let app = seeded_app();

    let (status, doc) = send(&app, get("/api/v1/reports/events/export?event_id=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["heading"], "Clube de Desbravadores");
    assert_eq!(doc["title"], "Relatório de Inscrições - Acampamento de Unidades");
    assert_eq!(doc["rows"].as_array().unwrap().len(), 2);
    assert_eq!(doc["rows"][0][0], json!({ "type": "text", "value": "Ana Costa" }));
    assert!(doc["file_name"]
        .as_str()
        .unwrap()
        .starts_with("relatorio_evento_Acampamento_de_Unidades_"));
}

#[tokio::test]
async fn test_specialty_report_lists_years() {
    let app = seeded_app();

    let (status, report) = send(&app, get("/api/v1/reports/specialties?year=2023&month=")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["rows"].as_array().unwrap().len(), 2);
    assert_eq!(report["available_years"], json!([2024, 2023]));
}

#[tokio::test]
async fn test_dashboard_counters() {
    let app = seeded_app();

    let (status, board) = send(&app, get("/api/v1/dashboard")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(board["active_members"], 0);
    assert_eq!(board["total_units"], 2);
    assert_eq!(board["total_completions"], 4);
}
