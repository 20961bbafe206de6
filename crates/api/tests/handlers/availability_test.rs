use axum::{
    Json,
    extract::{Path, State},
};
use chairtime_api::handlers::availability::update_availability;
use chairtime_core::{
    errors::BookingError,
    models::availability::{BreakWindow, DayAvailability, UpdateAvailabilityRequest},
};
use chrono::NaiveTime;
use mockall::predicate;
use uuid::Uuid;

use crate::test_utils::TestContext;

fn t(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn working_day(day_of_week: i16) -> DayAvailability {
    DayAvailability {
        day_of_week,
        start_time: t(9, 0),
        end_time: t(18, 0),
        is_active: true,
        breaks: vec![],
    }
}

#[tokio::test]
async fn test_update_availability_rejects_out_of_range_weekday() {
    let ctx = TestContext::new();
    let state = ctx.build_state();

    let payload = UpdateAvailabilityRequest {
        days: vec![working_day(7)],
    };

    let err = update_availability(State(state), Path(Uuid::new_v4()), Json(payload))
        .await
        .unwrap_err();

    assert!(matches!(err.0, BookingError::Validation(_)));
}

#[tokio::test]
async fn test_update_availability_rejects_inverted_window() {
    let ctx = TestContext::new();
    let state = ctx.build_state();

    let mut day = working_day(2);
    day.start_time = t(18, 0);
    day.end_time = t(9, 0);

    let payload = UpdateAvailabilityRequest { days: vec![day] };

    let err = update_availability(State(state), Path(Uuid::new_v4()), Json(payload))
        .await
        .unwrap_err();

    assert!(matches!(err.0, BookingError::Validation(_)));
}

#[tokio::test]
async fn test_update_availability_rejects_break_outside_window() {
    let ctx = TestContext::new();
    let state = ctx.build_state();

    let mut day = working_day(3);
    day.breaks = vec![BreakWindow {
        start: t(8, 0),
        end: t(8, 30),
    }];

    let payload = UpdateAvailabilityRequest { days: vec![day] };

    let err = update_availability(State(state), Path(Uuid::new_v4()), Json(payload))
        .await
        .unwrap_err();

    assert!(matches!(err.0, BookingError::Validation(_)));
}

#[tokio::test]
async fn test_valid_week_rejected_as_a_whole_when_one_day_is_bad() {
    let ctx = TestContext::new();
    let state = ctx.build_state();

    // Six good days plus one inverted window: nothing may be written.
    let mut days: Vec<DayAvailability> = (0..6).map(working_day).collect();
    let mut bad = working_day(6);
    bad.end_time = bad.start_time;
    days.push(bad);

    let payload = UpdateAvailabilityRequest { days };

    let err = update_availability(State(state), Path(Uuid::new_v4()), Json(payload))
        .await
        .unwrap_err();

    assert!(matches!(err.0, BookingError::Validation(_)));
}

#[tokio::test]
async fn test_week_is_saved_through_a_single_batched_call() {
    let mut ctx = TestContext::new();
    let shop_id = Uuid::new_v4();
    let days: Vec<DayAvailability> = (1..=5).map(working_day).collect();

    // The whole week travels as one repository call, which the repository
    // runs inside one transaction.
    ctx.availability_repo
        .expect_upsert_week()
        .with(predicate::eq(shop_id), predicate::eq(days.clone()))
        .times(1)
        .returning(|_, _| Ok(()));

    ctx.availability_repo
        .upsert_week(shop_id, days)
        .await
        .unwrap();
}
