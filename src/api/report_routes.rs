//! Report Routes
//!
//! Read-only report endpoints. Filters arrive as query parameters; each
//! report also has an `/export` variant returning its [`ReportDocument`].

use axum::{
    extract::{Extension, Query, State},
    routing::get,
    Json, Router,
};

use super::AppState;
use crate::domain::OperationContext;
use crate::error::AppResult;
use crate::reports::*;

/// Create the report router
pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/reports/members", get(members))
        .route("/reports/members/export", get(members_export))
        .route("/reports/events", get(events))
        .route("/reports/events/export", get(events_export))
        .route("/reports/minutes", get(minutes))
        .route("/reports/minutes/export", get(minutes_export))
        .route("/reports/specialties", get(specialties))
        .route("/reports/specialties/export", get(specialties_export))
        .route("/reports/dues", get(dues))
        .route("/reports/dues/export", get(dues_export))
        .route("/reports/cash", get(cash))
        .route("/reports/cash/export", get(cash_export))
        .route("/reports/costs", get(costs))
        .route("/reports/costs/export", get(costs_export))
        .route("/reports/assets", get(assets))
        .route("/reports/assets/export", get(assets_export))
}

fn export(state: &AppState, report: &impl Exportable, context: &OperationContext) -> Json<ReportDocument> {
    Json(report.to_document(&state.config.club_name, context.today))
}

// =========================================================================
// Dashboard
// =========================================================================

async fn get_dashboard(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> Json<Dashboard> {
    Json(dashboard(&*state.club.read().await, context.today))
}

// =========================================================================
// Members
// =========================================================================

async fn members(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Query(filter): Query<MemberReportFilter>,
) -> Json<MemberReport> {
    Json(member_report(&*state.club.read().await, &filter, context.today))
}

async fn members_export(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Query(filter): Query<MemberReportFilter>,
) -> Json<ReportDocument> {
    let report = member_report(&*state.club.read().await, &filter, context.today);
    export(&state, &report, &context)
}

// =========================================================================
// Events
// =========================================================================

async fn events(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Query(filter): Query<EventReportFilter>,
) -> Json<EventReport> {
    Json(event_report(&*state.club.read().await, &filter, context.today))
}

async fn events_export(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Query(filter): Query<EventReportFilter>,
) -> Json<ReportDocument> {
    let report = event_report(&*state.club.read().await, &filter, context.today);
    export(&state, &report, &context)
}

// =========================================================================
// Minutes
// =========================================================================

async fn minutes(
    State(state): State<AppState>,
    Query(filter): Query<MinutesReportFilter>,
) -> AppResult<Json<MinutesReport>> {
    filter.range().validate()?;
    Ok(Json(minutes_report(&*state.club.read().await, &filter)))
}

async fn minutes_export(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Query(filter): Query<MinutesReportFilter>,
) -> AppResult<Json<ReportDocument>> {
    filter.range().validate()?;
    let report = minutes_report(&*state.club.read().await, &filter);
    Ok(export(&state, &report, &context))
}

// =========================================================================
// Specialties
// =========================================================================

async fn specialties(
    State(state): State<AppState>,
    Query(filter): Query<SpecialtyReportFilter>,
) -> Json<SpecialtyReport> {
    Json(specialty_report(&*state.club.read().await, &filter))
}

async fn specialties_export(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Query(filter): Query<SpecialtyReportFilter>,
) -> Json<ReportDocument> {
    let report = specialty_report(&*state.club.read().await, &filter);
    export(&state, &report, &context)
}

// =========================================================================
// Dues
// =========================================================================

async fn dues(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Query(filter): Query<DuesReportFilter>,
) -> Json<DuesReport> {
    Json(dues_report(&*state.club.read().await, &filter, context.today))
}

async fn dues_export(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Query(filter): Query<DuesReportFilter>,
) -> Json<ReportDocument> {
    let report = dues_report(&*state.club.read().await, &filter, context.today);
    export(&state, &report, &context)
}

// =========================================================================
// Ledgers
// =========================================================================

async fn cash(
    State(state): State<AppState>,
    Query(filter): Query<CashReportFilter>,
) -> AppResult<Json<CashReport>> {
    filter.range().validate()?;
    Ok(Json(cash_report(&*state.club.read().await, &filter)))
}

async fn cash_export(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Query(filter): Query<CashReportFilter>,
) -> AppResult<Json<ReportDocument>> {
    filter.range().validate()?;
    let report = cash_report(&*state.club.read().await, &filter);
    Ok(export(&state, &report, &context))
}

async fn costs(
    State(state): State<AppState>,
    Query(filter): Query<CostReportFilter>,
) -> AppResult<Json<CostReport>> {
    filter.range().validate()?;
    Ok(Json(cost_report(&*state.club.read().await, &filter)))
}

async fn costs_export(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Query(filter): Query<CostReportFilter>,
) -> AppResult<Json<ReportDocument>> {
    filter.range().validate()?;
    let report = cost_report(&*state.club.read().await, &filter);
    Ok(export(&state, &report, &context))
}

async fn assets(State(state): State<AppState>) -> Json<AssetReport> {
    Json(asset_report(&*state.club.read().await))
}

async fn assets_export(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> Json<ReportDocument> {
    let report = asset_report(&*state.club.read().await);
    export(&state, &report, &context)
}
