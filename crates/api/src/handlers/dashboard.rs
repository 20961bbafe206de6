//! Staff dashboard handlers: the headline stat cards and the monthly
//! revenue chart.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;
use std::sync::Arc;

use chairtime_core::{
    errors::BookingError,
    models::payment::{DashboardStatsResponse, MonthlyRevenue, RevenueResponse},
};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Deserialize)]
pub struct RevenueQuery {
    pub year: Option<i32>,
}

async fn require_shop(state: &ApiState, shop_id: Uuid) -> Result<(), AppError> {
    chairtime_db::repositories::barbershop::get_barbershop_by_id(&state.db_pool, shop_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Barbershop with ID {} not found", shop_id))
        })?;
    Ok(())
}

#[axum::debug_handler]
pub async fn get_stats(
    State(state): State<Arc<ApiState>>,
    Path(shop_id): Path<Uuid>,
) -> Result<Json<DashboardStatsResponse>, AppError> {
    require_shop(&state, shop_id).await?;

    let today = Local::now().date_naive();
    let month_start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).ok_or_else(|| {
        BookingError::Internal(format!("Invalid month start for {}", today).into())
    })?;

    let today_appointments =
        chairtime_db::repositories::appointment::count_for_date(&state.db_pool, shop_id, today)
            .await
            .map_err(BookingError::Database)?;

    let pending_appointments =
        chairtime_db::repositories::appointment::count_pending(&state.db_pool, shop_id)
            .await
            .map_err(BookingError::Database)?;

    let today_revenue =
        chairtime_db::repositories::payment::revenue_for_date(&state.db_pool, shop_id, today)
            .await
            .map_err(BookingError::Database)?;

    // Month-to-date: the card resets on the first of each month.
    let monthly_revenue = chairtime_db::repositories::payment::revenue_for_range(
        &state.db_pool,
        shop_id,
        month_start,
        today,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(DashboardStatsResponse {
        today_appointments,
        pending_appointments,
        today_revenue,
        monthly_revenue,
    }))
}

#[axum::debug_handler]
pub async fn get_revenue(
    State(state): State<Arc<ApiState>>,
    Path(shop_id): Path<Uuid>,
    Query(query): Query<RevenueQuery>,
) -> Result<Json<RevenueResponse>, AppError> {
    require_shop(&state, shop_id).await?;

    let year = query.year.unwrap_or_else(|| Local::now().year());

    let totals =
        chairtime_db::repositories::payment::monthly_totals(&state.db_pool, shop_id, year)
            .await
            .map_err(BookingError::Database)?;

    // The chart always shows twelve bars; months with no payments are zero.
    let mut months: Vec<MonthlyRevenue> = (1..=12)
        .map(|month| MonthlyRevenue { month, total: 0.0 })
        .collect();
    for row in totals {
        if let Some(entry) = months.get_mut((row.month - 1).max(0) as usize) {
            entry.total = row.total;
        }
    }

    Ok(Json(RevenueResponse { year, months }))
}
