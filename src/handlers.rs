use crate::day::{date_key, effective_date_now};
use crate::engine;
use crate::errors::AppError;
use crate::models::{
    ReportRequest, ReportResponse, ResetRequest, SetupRequest, TallyRecord, TallyResponse,
};
use crate::state::AppState;
use crate::stats::build_trend;
use crate::storage::{delete_record, persist_record};
use crate::ui;
use axum::{Json, extract::State, response::Html};
use chrono::NaiveDate;
use tracing::info;

pub async fn index() -> Html<&'static str> {
    Html(ui::page())
}

/// Current state for the page. Also where a running server notices the day
/// has rolled over: the stored record is migrated and written through
/// before anything is reported back.
pub async fn get_tally(State(state): State<AppState>) -> Result<Json<TallyResponse>, AppError> {
    let today = effective_date_now(state.config.rollover_hour);
    let mut guard = state.record.lock().await;
    match guard.as_mut() {
        None => Ok(Json(needs_setup_response(today))),
        Some(record) => {
            if engine::roll_over(record, today) {
                persist_record(&state.config.data_path, record).await?;
                info!(date = %record.date, "rolled over to a new day");
            }
            Ok(Json(to_response(record)))
        }
    }
}

pub async fn setup(
    State(state): State<AppState>,
    Json(payload): Json<SetupRequest>,
) -> Result<Json<TallyResponse>, AppError> {
    let today = effective_date_now(state.config.rollover_hour);
    let mut guard = state.record.lock().await;
    if guard.is_some() {
        return Err(AppError::conflict("already set up"));
    }

    let total = engine::parse_total(&payload.total)?;
    let record = engine::fresh_record(total, today);
    persist_record(&state.config.data_path, &record).await?;
    info!(total, "initial setup complete");

    let response = to_response(&record);
    *guard = Some(record);
    Ok(Json(response))
}

pub async fn report(
    State(state): State<AppState>,
    Json(payload): Json<ReportRequest>,
) -> Result<Json<ReportResponse>, AppError> {
    let today = effective_date_now(state.config.rollover_hour);
    let mut guard = state.record.lock().await;
    let Some(record) = guard.as_mut() else {
        return Err(AppError::conflict("no record yet, run initial setup first"));
    };

    // The rollover migration persists on its own, even when the report
    // below is rejected.
    if engine::roll_over(record, today) {
        persist_record(&state.config.data_path, record).await?;
        info!(date = %record.date, "rolled over to a new day");
    }

    let outcome = engine::apply_report(record, &payload.total, payload.skip_daily)?;
    persist_record(&state.config.data_path, record).await?;
    if outcome.new_record {
        info!(record = outcome.record, "new single-day record");
    }

    Ok(Json(ReportResponse {
        total: outcome.total,
        daily_kills: outcome.daily_kills,
        record: outcome.record,
        new_record: outcome.new_record,
    }))
}

pub async fn reset_record(
    State(state): State<AppState>,
    Json(payload): Json<ResetRequest>,
) -> Result<Json<TallyResponse>, AppError> {
    if !payload.confirmed {
        return Err(AppError::bad_request("confirmation required"));
    }

    let today = effective_date_now(state.config.rollover_hour);
    let mut guard = state.record.lock().await;
    let Some(record) = guard.as_mut() else {
        return Err(AppError::conflict("no record yet, run initial setup first"));
    };

    // Migrate first so a finished day is never committed back into the
    // history this clears.
    if engine::roll_over(record, today) {
        persist_record(&state.config.data_path, record).await?;
        info!(date = %record.date, "rolled over to a new day");
    }

    engine::reset_history(record);
    persist_record(&state.config.data_path, record).await?;
    info!("history cleared");
    Ok(Json(to_response(record)))
}

pub async fn reset_all(
    State(state): State<AppState>,
    Json(payload): Json<ResetRequest>,
) -> Result<Json<TallyResponse>, AppError> {
    if !payload.confirmed {
        return Err(AppError::bad_request("confirmation required"));
    }

    let today = effective_date_now(state.config.rollover_hour);
    let mut guard = state.record.lock().await;
    delete_record(&state.config.data_path).await?;
    *guard = None;
    info!("full reset, awaiting initial setup");
    Ok(Json(needs_setup_response(today)))
}

fn to_response(record: &TallyRecord) -> TallyResponse {
    TallyResponse {
        needs_setup: false,
        total: record.total,
        daily_kills: record.daily_kills,
        record: engine::best_day(record),
        date: record.date.clone(),
        trend: build_trend(record),
    }
}

fn needs_setup_response(today: NaiveDate) -> TallyResponse {
    TallyResponse {
        needs_setup: true,
        total: 0,
        daily_kills: 0,
        record: 0,
        date: date_key(today),
        trend: Vec::new(),
    }
}
