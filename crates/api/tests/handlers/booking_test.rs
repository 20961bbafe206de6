use axum::extract::{Path, State};
use chairtime_core::{
    errors::BookingError,
    models::appointment::CreateBookingRequest,
    slots::{BlockedSpan, BookedSpan, DayWindow, SlotPolicy, available_slots, time_to_minute},
};
use chairtime_db::models::{DbBookedSpan, DbDayAvailability};
use chairtime_api::middleware::error_handling::AppError;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use mockall::predicate;
use pretty_assertions::assert_eq;
use sqlx::types::Json;
use uuid::Uuid;

use crate::test_utils::TestContext;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn wednesday() -> NaiveDate {
    // 2025-03-12 is a Wednesday, day_of_week 3 counting from Sunday.
    let date = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
    assert_eq!(date.weekday().num_days_from_sunday(), 3);
    date
}

fn day_before_noon() -> NaiveDateTime {
    // A different date than the request, so no same-day cutoff applies.
    NaiveDate::from_ymd_opt(2025, 3, 11)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Mirrors the slot resolution the handlers perform, backed by the mock
/// repositories instead of a live pool.
async fn resolve_slots_wrapper(
    ctx: &TestContext,
    shop_id: Uuid,
    barber_id: Uuid,
    service_duration: u32,
    date: NaiveDate,
    now: NaiveDateTime,
) -> Result<Vec<u32>, AppError> {
    let day_of_week = date.weekday().num_days_from_sunday() as i16;

    let window = ctx
        .availability_repo
        .get_day(shop_id, day_of_week)
        .await
        .map_err(BookingError::Database)?
        .map(|day| DayWindow {
            start: time_to_minute(day.start_time),
            end: time_to_minute(day.end_time),
            is_active: day.is_active,
            breaks: day
                .breaks
                .0
                .iter()
                .map(|b| BlockedSpan::new(time_to_minute(b.start), time_to_minute(b.end)))
                .collect(),
        });

    let booked: Vec<BookedSpan> = ctx
        .appointment_repo
        .active_spans_for_barber(shop_id, barber_id, date)
        .await
        .map_err(BookingError::Database)?
        .into_iter()
        .map(|span| {
            let duration =
                (span.duration_at_booking > 0).then_some(span.duration_at_booking as u32);
            BookedSpan::new(time_to_minute(span.start_time), duration)
        })
        .collect();

    Ok(available_slots(
        service_duration,
        window.as_ref(),
        &booked,
        date,
        now,
        SlotPolicy::default(),
    ))
}

fn working_day(shop_id: Uuid, day_of_week: i16) -> DbDayAvailability {
    DbDayAvailability {
        id: Uuid::new_v4(),
        barbershop_id: shop_id,
        day_of_week,
        start_time: t(9, 0),
        end_time: t(18, 0),
        is_active: true,
        breaks: Json(vec![chairtime_core::models::availability::BreakWindow {
            start: t(12, 0),
            end: t(13, 0),
        }]),
    }
}

#[tokio::test]
async fn test_slots_exclude_booked_spans_and_breaks() {
    let mut ctx = TestContext::new();
    let shop_id = Uuid::new_v4();
    let barber_id = Uuid::new_v4();
    let date = wednesday();

    let day = working_day(shop_id, 3);
    ctx.availability_repo
        .expect_get_day()
        .with(predicate::eq(shop_id), predicate::eq(3i16))
        .returning(move |_, _| Ok(Some(day.clone())));

    ctx.appointment_repo
        .expect_active_spans_for_barber()
        .with(
            predicate::eq(shop_id),
            predicate::eq(barber_id),
            predicate::eq(date),
        )
        .returning(|_, _, _| {
            Ok(vec![DbBookedSpan {
                start_time: t(10, 0),
                duration_at_booking: 30,
            }])
        });

    let slots = resolve_slots_wrapper(&ctx, shop_id, barber_id, 30, date, day_before_noon())
        .await
        .unwrap();

    // 09:00-18:00 on a 30-minute grid, minus the 10:00 appointment and the
    // 12:00-13:00 lunch break.
    let expected: Vec<u32> = vec![
        540, 570, 630, 660, 690, 780, 810, 840, 870, 900, 930, 960, 990, 1020, 1050,
    ];
    assert_eq!(slots, expected);
}

#[tokio::test]
async fn test_slots_empty_for_unconfigured_day() {
    let mut ctx = TestContext::new();
    let shop_id = Uuid::new_v4();
    let barber_id = Uuid::new_v4();
    let date = wednesday();

    ctx.availability_repo
        .expect_get_day()
        .returning(|_, _| Ok(None));
    ctx.appointment_repo
        .expect_active_spans_for_barber()
        .returning(|_, _, _| Ok(vec![]));

    let slots = resolve_slots_wrapper(&ctx, shop_id, barber_id, 30, date, day_before_noon())
        .await
        .unwrap();

    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_booked_start_time_is_a_conflict() {
    let mut ctx = TestContext::new();
    let shop_id = Uuid::new_v4();
    let barber_id = Uuid::new_v4();
    let date = wednesday();

    let day = working_day(shop_id, 3);
    ctx.availability_repo
        .expect_get_day()
        .returning(move |_, _| Ok(Some(day.clone())));
    ctx.appointment_repo
        .expect_active_spans_for_barber()
        .returning(|_, _, _| {
            Ok(vec![DbBookedSpan {
                start_time: t(10, 0),
                duration_at_booking: 30,
            }])
        });

    let slots = resolve_slots_wrapper(&ctx, shop_id, barber_id, 30, date, day_before_noon())
        .await
        .unwrap();

    // The membership check the booking handler performs before inserting.
    let requested = time_to_minute(t(10, 0));
    assert!(!slots.contains(&requested));
    let free = time_to_minute(t(10, 30));
    assert!(slots.contains(&free));
}

#[tokio::test]
async fn test_create_booking_rejects_blank_client_name() {
    let ctx = TestContext::new();
    let state = ctx.build_state();

    // Validation runs before any lookup, so the real handler is safe to
    // call against the lazy pool.
    let payload = CreateBookingRequest {
        service_id: Uuid::new_v4(),
        barber_id: Uuid::new_v4(),
        date: wednesday(),
        start_time: t(10, 0),
        client_name: "   ".to_string(),
        client_phone: "555-0100".to_string(),
        client_email: None,
        notes: None,
    };

    let result = chairtime_api::handlers::booking::create_booking(
        State(state),
        Path("cool-cuts".to_string()),
        axum::Json(payload),
    )
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err.0, BookingError::Validation(_)));
}

#[tokio::test]
async fn test_create_booking_rejects_blank_phone() {
    let ctx = TestContext::new();
    let state = ctx.build_state();

    let payload = CreateBookingRequest {
        service_id: Uuid::new_v4(),
        barber_id: Uuid::new_v4(),
        date: wednesday(),
        start_time: t(10, 0),
        client_name: "Ana Souza".to_string(),
        client_phone: "".to_string(),
        client_email: None,
        notes: None,
    };

    let result = chairtime_api::handlers::booking::create_booking(
        State(state),
        Path("cool-cuts".to_string()),
        axum::Json(payload),
    )
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err.0, BookingError::Validation(_)));
}
