use crate::errors::AppError;
use crate::models::{
    DeleteEntriesRequest, DeleteEntriesResponse, RecentQuery, RecentRecord, SaveEntriesRequest,
    StatsQuery, StatsResponse, WorkEntry,
};
use crate::period::resolve_range;
use crate::records::{expand_days, recent_records};
use crate::state::AppState;
use crate::stats::compute_stats;
use crate::storage::persist_data;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<WorkEntry>> {
    let data = state.data.lock().await;
    let mut entries = data.work_entries(&state.user_id);
    entries.reverse();
    Json(entries)
}

pub async fn save_entries(
    State(state): State<AppState>,
    Json(payload): Json<SaveEntriesRequest>,
) -> Result<Json<Vec<WorkEntry>>, AppError> {
    let dates = target_days(payload.date, payload.end_date, true)?;

    let mut data = state.data.lock().await;
    let mut next = data.clone();
    let saved = next.save(&dates, payload.location);
    persist_data(&state.data_path, &next).await?;
    *data = next;
    info!("saved {} entries as {:?}", saved.len(), payload.location);

    let entries = saved
        .into_iter()
        .map(|(date, stored)| WorkEntry {
            id: Some(stored.id),
            user_id: Some(state.user_id.clone()),
            ..WorkEntry::new(date, stored.location)
        })
        .collect();
    Ok(Json(entries))
}

pub async fn delete_entries(
    State(state): State<AppState>,
    Json(payload): Json<DeleteEntriesRequest>,
) -> Result<Json<DeleteEntriesResponse>, AppError> {
    let dates = target_days(payload.date, payload.end_date, false)?;

    let mut data = state.data.lock().await;
    let mut next = data.clone();
    let deleted = next.delete(&dates);
    if deleted > 0 {
        persist_data(&state.data_path, &next).await?;
        *data = next;
    }
    info!("deleted {deleted} entries");

    Ok(Json(DeleteEntriesResponse { deleted }))
}

pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let today = query.today.unwrap_or_else(today);
    let range = resolve_range(query.period, today, query.start, query.end)
        .ok_or_else(|| AppError::bad_request("period falls outside the supported calendar"))?;

    let data = state.data.lock().await;
    let stats = compute_stats(&data.work_entries(&state.user_id), &range);
    debug!(
        "stats for {:?} {}..{}: {:?}",
        query.period,
        range.start_day(),
        range.end_day(),
        stats
    );

    Ok(Json(StatsResponse {
        period: query.period,
        start: range.start_day(),
        end: range.end_day(),
        stats,
    }))
}

pub async fn get_recent(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Json<Vec<RecentRecord>> {
    let selected = query.date.unwrap_or_else(today);
    let data = state.data.lock().await;
    Json(recent_records(selected, &data.work_entries(&state.user_id)))
}

/// A single day, or a `date..=end_date` span. Saves over a span skip weekends.
fn target_days(
    date: NaiveDate,
    end_date: Option<NaiveDate>,
    weekdays_only: bool,
) -> Result<Vec<NaiveDate>, AppError> {
    match end_date {
        None => Ok(vec![date]),
        Some(end) if date > end => Err(AppError::bad_request("start date is after end date")),
        Some(end) => Ok(expand_days(date, end, weekdays_only)),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
