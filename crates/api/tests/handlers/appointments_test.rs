use chairtime_api::middleware::error_handling::AppError;
use chairtime_core::{
    errors::BookingError,
    models::{appointment::AppointmentStatus, payment::commission_split},
};
use chairtime_db::models::{DbAppointment, DbPayment};
use chrono::{NaiveDate, NaiveTime, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::test_utils::TestContext;

fn appointment_with_status(shop_id: Uuid, status: &str) -> DbAppointment {
    DbAppointment {
        id: Uuid::new_v4(),
        barbershop_id: shop_id,
        client_id: Uuid::new_v4(),
        barber_id: Uuid::new_v4(),
        service_id: Uuid::new_v4(),
        appointment_date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
        start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        status: status.to_string(),
        notes: None,
        price_at_booking: 100.0,
        duration_at_booking: 30,
        created_at: Utc::now(),
    }
}

/// Mirrors the completion flow the handler performs, backed by the mock
/// repositories: status-machine check first, then a single transactional
/// repository call that flips the status and records the payment together.
async fn complete_wrapper(
    ctx: &TestContext,
    shop_id: Uuid,
    appointment_id: Uuid,
    amount_override: Option<f64>,
    method: &'static str,
    payment_date: NaiveDate,
) -> Result<DbPayment, AppError> {
    let appointment = ctx
        .appointment_repo
        .get_appointment_by_id(shop_id, appointment_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Appointment with ID {} not found", appointment_id))
        })?;

    let current = AppointmentStatus::parse(&appointment.status).unwrap();
    if !current.can_transition_to(AppointmentStatus::Completed) {
        return Err(AppError(BookingError::Conflict(format!(
            "Cannot complete a {} appointment",
            current.as_str()
        ))));
    }

    let amount = amount_override.unwrap_or(appointment.price_at_booking);
    let (barber_commission, shop_revenue) = commission_split(amount);

    let payment = ctx
        .payment_repo
        .complete_appointment_with_payment(
            shop_id,
            appointment_id,
            appointment.barber_id,
            amount,
            method,
            payment_date,
            barber_commission,
            shop_revenue,
        )
        .await
        .map_err(BookingError::Database)?;

    Ok(payment)
}

#[tokio::test]
async fn test_completing_confirmed_appointment_records_split_payment() {
    let mut ctx = TestContext::new();
    let shop_id = Uuid::new_v4();
    let appointment = appointment_with_status(shop_id, "confirmed");
    let appointment_id = appointment.id;
    let barber_id = appointment.barber_id;
    let payment_date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

    ctx.appointment_repo
        .expect_get_appointment_by_id()
        .with(predicate::eq(shop_id), predicate::eq(appointment_id))
        .returning(move |_, _| Ok(Some(appointment.clone())));

    // The price snapshot is 100.0, so the split must be 60 / 40.
    ctx.payment_repo
        .expect_complete_appointment_with_payment()
        .with(
            predicate::eq(shop_id),
            predicate::eq(appointment_id),
            predicate::eq(barber_id),
            predicate::eq(100.0),
            predicate::eq("pix"),
            predicate::eq(payment_date),
            predicate::eq(60.0),
            predicate::eq(40.0),
        )
        .returning(move |shop, appt, barber, amount, method, date, commission, revenue| {
            Ok(DbPayment {
                id: Uuid::new_v4(),
                barbershop_id: shop,
                appointment_id: appt,
                barber_id: barber,
                amount,
                payment_method: method.to_string(),
                payment_date: date,
                barber_commission: commission,
                shop_revenue: revenue,
                notes: None,
                created_at: Utc::now(),
            })
        });

    let payment = complete_wrapper(&ctx, shop_id, appointment_id, None, "pix", payment_date)
        .await
        .unwrap();

    assert_eq!(payment.amount, 100.0);
    assert_eq!(payment.barber_commission, 60.0);
    assert_eq!(payment.shop_revenue, 40.0);
}

#[tokio::test]
async fn test_completing_pending_appointment_is_conflict_without_any_write() {
    let mut ctx = TestContext::new();
    let shop_id = Uuid::new_v4();
    let appointment = appointment_with_status(shop_id, "pending");
    let appointment_id = appointment.id;
    let payment_date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

    ctx.appointment_repo
        .expect_get_appointment_by_id()
        .returning(move |_, _| Ok(Some(appointment.clone())));
    // No payment expectation: any write attempt would fail the test.

    let err = complete_wrapper(&ctx, shop_id, appointment_id, None, "cash", payment_date)
        .await
        .unwrap_err();

    assert!(matches!(err.0, BookingError::Conflict(_)));
}

#[tokio::test]
async fn test_failed_completion_leaves_no_separate_status_update() {
    let mut ctx = TestContext::new();
    let shop_id = Uuid::new_v4();
    let appointment = appointment_with_status(shop_id, "confirmed");
    let appointment_id = appointment.id;
    let payment_date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

    ctx.appointment_repo
        .expect_get_appointment_by_id()
        .returning(move |_, _| Ok(Some(appointment.clone())));

    // The combined operation fails as a whole; there is no update_status
    // expectation because the flow issues no separate status write that
    // could survive the failed payment.
    ctx.payment_repo
        .expect_complete_appointment_with_payment()
        .returning(|_, _, _, _, _, _, _, _| Err(eyre::eyre!("insert failed")));

    let err = complete_wrapper(&ctx, shop_id, appointment_id, None, "card", payment_date)
        .await
        .unwrap_err();

    assert!(matches!(err.0, BookingError::Database(_)));
}
