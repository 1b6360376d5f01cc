//! API Routes
//!
//! HTTP endpoint definitions for the club records. Reads take the club's
//! read lock directly; every mutation goes through a handler.

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;

use super::AppState;
use crate::domain::{
    Asset, CashEntry, Class, ClassName, Completion, Cost, Debit, Event, EventEnrollment, Id,
    Member, Minutes, OperationContext, Specialty, Unit,
};
use crate::error::{AppError, AppResult};
use crate::handlers::*;
use crate::reports::dashboard::{EnrollmentView, InstallmentView};
use crate::reports::filter::empty_string_as_none;
use crate::reports::{member_finance, MemberFinance};

type Created<T> = (StatusCode, Json<T>);

fn created<T>(value: T) -> Created<T> {
    (StatusCode::CREATED, Json(value))
}

// =========================================================================
// Query types
// =========================================================================

#[derive(Debug, Default, Deserialize)]
pub struct MemberQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub member_id: Option<Id>,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        // Roster
        .route("/members", get(list_members).post(create_member))
        .route(
            "/members/:id",
            get(get_member).put(update_member).delete(delete_member),
        )
        .route("/members/:id/finance", get(get_member_finance))
        .route("/classes", get(list_classes))
        .route("/classes/:class/units", post(add_unit))
        .route(
            "/classes/:class/units/:id",
            put(update_unit).delete(delete_unit),
        )
        // Specialties
        .route("/specialties", get(list_specialties).post(create_specialty))
        .route(
            "/specialties/:id",
            put(update_specialty).delete(delete_specialty),
        )
        .route(
            "/specialties/:id/completions",
            get(list_completions).post(record_completions),
        )
        // Minutes
        .route("/minutes", get(list_minutes).post(create_minutes))
        .route(
            "/minutes/:id",
            get(get_minutes).put(update_minutes).delete(delete_minutes),
        )
        // Events
        .route("/events", get(list_events).post(create_event))
        .route("/events/:id", put(update_event).delete(delete_event))
        .route(
            "/events/:id/enrollments",
            get(list_event_enrollments).post(enroll_in_event),
        )
        // Finance
        .route(
            "/finance/enrollments",
            get(list_dues_enrollments).post(create_dues_enrollment),
        )
        .route(
            "/finance/enrollments/:id/installments",
            get(list_installments),
        )
        .route("/finance/installments/:id/pay", post(pay_installment))
        .route("/finance/debits", get(list_debits).post(create_debit))
        .route("/finance/debits/:id/pay", post(pay_debit))
        .route("/finance/cash", get(list_cash).post(create_cash_entry))
        .route(
            "/finance/cash/:id",
            put(update_cash_entry).delete(delete_cash_entry),
        )
        .route("/finance/costs", get(list_costs).post(create_cost))
        .route("/finance/costs/:id", put(update_cost).delete(delete_cost))
        .route("/finance/assets", get(list_assets).post(create_asset))
        .route("/finance/assets/:id", put(update_asset).delete(delete_asset))
}

// =========================================================================
// Roster
// =========================================================================

async fn list_members(State(state): State<AppState>) -> Json<Vec<Member>> {
    Json(state.club.read().await.members.all().to_vec())
}

async fn get_member(State(state): State<AppState>, Path(id): Path<Id>) -> AppResult<Json<Member>> {
    let club = state.club.read().await;
    let member = club
        .members
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found("member", id))?;
    Ok(Json(member))
}

async fn create_member(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Json(command): Json<MemberCommand>,
) -> AppResult<Created<Member>> {
    let member = RosterHandler::new(state.club)
        .create_member(command, &context)
        .await?;
    Ok(created(member))
}

async fn update_member(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
    Json(command): Json<MemberCommand>,
) -> AppResult<Json<Member>> {
    let member = RosterHandler::new(state.club)
        .update_member(id, command, &context)
        .await?;
    Ok(Json(member))
}

async fn delete_member(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
) -> AppResult<StatusCode> {
    RosterHandler::new(state.club)
        .delete_member(id, &context)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_member_finance(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
) -> AppResult<Json<MemberFinance>> {
    let club = state.club.read().await;
    member_finance(&club, id, context.today)
        .map(Json)
        .ok_or_else(|| AppError::not_found("member", id))
}

async fn list_classes(State(state): State<AppState>) -> Json<Vec<Class>> {
    Json(state.club.read().await.classes.all().to_vec())
}

async fn add_unit(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(class): Path<ClassName>,
    Json(command): Json<UnitCommand>,
) -> AppResult<Created<Unit>> {
    let unit = RosterHandler::new(state.club)
        .add_unit(class, command, &context)
        .await?;
    Ok(created(unit))
}

async fn update_unit(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path((class, id)): Path<(ClassName, Id)>,
    Json(command): Json<UnitCommand>,
) -> AppResult<Json<Unit>> {
    let unit = RosterHandler::new(state.club)
        .update_unit(class, id, command, &context)
        .await?;
    Ok(Json(unit))
}

async fn delete_unit(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path((class, id)): Path<(ClassName, Id)>,
) -> AppResult<StatusCode> {
    RosterHandler::new(state.club)
        .delete_unit(class, id, &context)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// Specialties
// =========================================================================

async fn list_specialties(State(state): State<AppState>) -> Json<Vec<Specialty>> {
    Json(state.club.read().await.specialties.all().to_vec())
}

async fn create_specialty(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Json(command): Json<SpecialtyCommand>,
) -> AppResult<Created<Specialty>> {
    let specialty = SpecialtyHandler::new(state.club)
        .create(command, &context)
        .await?;
    Ok(created(specialty))
}

async fn update_specialty(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
    Json(command): Json<SpecialtyCommand>,
) -> AppResult<Json<Specialty>> {
    let specialty = SpecialtyHandler::new(state.club)
        .update(id, command, &context)
        .await?;
    Ok(Json(specialty))
}

async fn delete_specialty(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
) -> AppResult<StatusCode> {
    SpecialtyHandler::new(state.club).delete(id, &context).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_completions(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<Json<Vec<Completion>>> {
    let club = state.club.read().await;
    if club.specialties.get(id).is_none() {
        return Err(AppError::not_found("specialty", id));
    }
    Ok(Json(
        club.specialties.completions_for_specialty(id).cloned().collect(),
    ))
}

async fn record_completions(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
    Json(command): Json<CompletionCommand>,
) -> AppResult<Created<CompletionResult>> {
    let result = SpecialtyHandler::new(state.club)
        .record_completions(id, command, &context)
        .await?;
    Ok(created(result))
}

// =========================================================================
// Minutes
// =========================================================================

async fn list_minutes(State(state): State<AppState>) -> Json<Vec<Minutes>> {
    Json(state.club.read().await.minutes.all().to_vec())
}

async fn get_minutes(State(state): State<AppState>, Path(id): Path<Id>) -> AppResult<Json<Minutes>> {
    let club = state.club.read().await;
    let minutes = club
        .minutes
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found("minutes", id))?;
    Ok(Json(minutes))
}

async fn create_minutes(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Json(command): Json<MinutesCommand>,
) -> AppResult<Created<Minutes>> {
    let minutes = MinutesHandler::new(state.club).create(command, &context).await?;
    Ok(created(minutes))
}

async fn update_minutes(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
    Json(command): Json<MinutesCommand>,
) -> AppResult<Json<Minutes>> {
    let minutes = MinutesHandler::new(state.club)
        .update(id, command, &context)
        .await?;
    Ok(Json(minutes))
}

async fn delete_minutes(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
) -> AppResult<StatusCode> {
    MinutesHandler::new(state.club).delete(id, &context).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// Events
// =========================================================================

async fn list_events(State(state): State<AppState>) -> Json<Vec<Event>> {
    Json(state.club.read().await.events.all().to_vec())
}

async fn create_event(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Json(command): Json<EventCommand>,
) -> AppResult<Created<Event>> {
    let event = EventHandler::new(state.club).create(command, &context).await?;
    Ok(created(event))
}

async fn update_event(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
    Json(command): Json<EventCommand>,
) -> AppResult<Json<Event>> {
    let event = EventHandler::new(state.club)
        .update(id, command, &context)
        .await?;
    Ok(Json(event))
}

async fn delete_event(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
) -> AppResult<StatusCode> {
    EventHandler::new(state.club).delete(id, &context).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_event_enrollments(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<Json<Vec<EventEnrollment>>> {
    let club = state.club.read().await;
    if club.events.get(id).is_none() {
        return Err(AppError::not_found("event", id));
    }
    Ok(Json(club.events.enrollments_for(id).copied().collect()))
}

async fn enroll_in_event(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
    Json(command): Json<EventEnrollmentCommand>,
) -> AppResult<Created<EventEnrollmentResult>> {
    let result = EventHandler::new(state.club)
        .enroll(id, command, &context)
        .await?;
    Ok(created(result))
}

// =========================================================================
// Dues
// =========================================================================

async fn list_dues_enrollments(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Query(query): Query<MemberQuery>,
) -> Json<Vec<EnrollmentView>> {
    let club = state.club.read().await;
    let enrollments = club
        .finance
        .enrollments()
        .iter()
        .filter(|e| query.member_id.map_or(true, |id| e.member_id == id))
        .map(|e| EnrollmentView::as_of(e, context.today))
        .collect();
    Json(enrollments)
}

async fn create_dues_enrollment(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Json(command): Json<DuesEnrollmentCommand>,
) -> AppResult<Created<DuesEnrollmentResult>> {
    let result = DuesHandler::new(state.club).enroll(command, &context).await?;
    Ok(created(result))
}

async fn list_installments(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
) -> AppResult<Json<Vec<InstallmentView>>> {
    let club = state.club.read().await;
    if club.finance.enrollment(id).is_none() {
        return Err(AppError::not_found("enrollment", id));
    }
    let installments = club
        .finance
        .installments_for(id)
        .map(|i| InstallmentView::as_of(i, context.today))
        .collect();
    Ok(Json(installments))
}

async fn pay_installment(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
) -> AppResult<Json<PaymentResult>> {
    let result = DuesHandler::new(state.club)
        .pay_installment(id, &context)
        .await?;
    Ok(Json(result))
}

// =========================================================================
// Debits
// =========================================================================

async fn list_debits(
    State(state): State<AppState>,
    Query(query): Query<MemberQuery>,
) -> Json<Vec<Debit>> {
    let club = state.club.read().await;
    let debits = club
        .finance
        .debits()
        .iter()
        .filter(|d| query.member_id.map_or(true, |id| d.member_id == id))
        .cloned()
        .collect();
    Json(debits)
}

async fn create_debit(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Json(command): Json<DebitCommand>,
) -> AppResult<Created<Debit>> {
    let debit = LedgerHandler::new(state.club).add_debit(command, &context).await?;
    Ok(created(debit))
}

async fn pay_debit(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
) -> AppResult<Json<PaymentResult>> {
    let result = LedgerHandler::new(state.club).pay_debit(id, &context).await?;
    Ok(Json(result))
}

// =========================================================================
// Cash flow
// =========================================================================

async fn list_cash(State(state): State<AppState>) -> Json<Vec<CashEntry>> {
    Json(state.club.read().await.finance.cash_entries().to_vec())
}

async fn create_cash_entry(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Json(command): Json<CashEntryCommand>,
) -> AppResult<Created<CashEntry>> {
    let entry = LedgerHandler::new(state.club)
        .add_cash_entry(command, &context)
        .await?;
    Ok(created(entry))
}

async fn update_cash_entry(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
    Json(command): Json<CashEntryCommand>,
) -> AppResult<Json<CashEntry>> {
    let entry = LedgerHandler::new(state.club)
        .update_cash_entry(id, command, &context)
        .await?;
    Ok(Json(entry))
}

async fn delete_cash_entry(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
) -> AppResult<StatusCode> {
    LedgerHandler::new(state.club)
        .delete_cash_entry(id, &context)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// Costs
// =========================================================================

async fn list_costs(State(state): State<AppState>) -> Json<Vec<Cost>> {
    Json(state.club.read().await.finance.costs().to_vec())
}

async fn create_cost(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Json(command): Json<CostCommand>,
) -> AppResult<Created<Cost>> {
    let cost = LedgerHandler::new(state.club).add_cost(command, &context).await?;
    Ok(created(cost))
}

async fn update_cost(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
    Json(command): Json<CostCommand>,
) -> AppResult<Json<Cost>> {
    let cost = LedgerHandler::new(state.club)
        .update_cost(id, command, &context)
        .await?;
    Ok(Json(cost))
}

async fn delete_cost(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
) -> AppResult<StatusCode> {
    LedgerHandler::new(state.club).delete_cost(id, &context).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// Assets
// =========================================================================

async fn list_assets(State(state): State<AppState>) -> Json<Vec<Asset>> {
    Json(state.club.read().await.finance.assets().to_vec())
}

async fn create_asset(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Json(command): Json<AssetCommand>,
) -> AppResult<Created<Asset>> {
    let asset = LedgerHandler::new(state.club).add_asset(command, &context).await?;
    Ok(created(asset))
}

async fn update_asset(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
    Json(command): Json<AssetCommand>,
) -> AppResult<Json<Asset>> {
    let asset = LedgerHandler::new(state.club)
        .update_asset(id, command, &context)
        .await?;
    Ok(Json(asset))
}

async fn delete_asset(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Id>,
) -> AppResult<StatusCode> {
    LedgerHandler::new(state.club).delete_asset(id, &context).await?;
    Ok(StatusCode::NO_CONTENT)
}
