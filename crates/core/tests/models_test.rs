use chairtime_core::models::{
    appointment::{AppointmentStatus, CreateBookingRequest},
    availability::{BreakWindow, DayAvailability},
    barbershop::{AccountRole, CreateBarbershopRequest, slugify},
    payment::{CompleteAppointmentRequest, PaymentMethod, commission_split},
    service::CreateServiceRequest,
};
use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string};
use uuid::Uuid;

#[rstest]
#[case("Barbearia do Zé", "barbearia-do-ze")]
#[case("  Cortes & Cia.  ", "cortes-cia")]
#[case("São João", "sao-joao")]
#[case("UPPER case Name", "upper-case-name")]
#[case("!!!", "barbershop")]
#[case("", "barbershop")]
fn test_slugify(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(slugify(input), expected);
}

#[test]
fn test_appointment_status_roundtrip() {
    for status in [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ] {
        assert_eq!(AppointmentStatus::parse(status.as_str()), Some(status));
        let json = to_string(&status).expect("Failed to serialize status");
        assert_eq!(json, format!("\"{}\"", status.as_str()));
    }
    assert_eq!(AppointmentStatus::parse("no-show"), None);
}

#[test]
fn test_status_transitions() {
    use AppointmentStatus::*;

    assert!(Pending.can_transition_to(Confirmed));
    assert!(Pending.can_transition_to(Cancelled));
    assert!(!Pending.can_transition_to(Completed));

    assert!(Confirmed.can_transition_to(Completed));
    assert!(Confirmed.can_transition_to(Cancelled));
    assert!(!Confirmed.can_transition_to(Pending));

    assert!(!Completed.can_transition_to(Cancelled));
    assert!(!Cancelled.can_transition_to(Pending));
}

#[test]
fn test_only_active_statuses_occupy_slots() {
    assert!(AppointmentStatus::Pending.occupies_slot());
    assert!(AppointmentStatus::Confirmed.occupies_slot());
    assert!(!AppointmentStatus::Completed.occupies_slot());
    assert!(!AppointmentStatus::Cancelled.occupies_slot());
}

#[test]
fn test_day_availability_projection() {
    let day = DayAvailability {
        day_of_week: 1,
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        is_active: true,
        breaks: vec![BreakWindow {
            start: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        }],
    };

    let window = day.to_window();
    assert_eq!(window.start, 540);
    assert_eq!(window.end, 1140);
    assert!(window.is_active);
    assert_eq!(window.breaks.len(), 1);
    assert_eq!(window.breaks[0].start, 720);
    assert_eq!(window.breaks[0].end, 780);
}

#[test]
fn test_day_availability_breaks_default_to_empty() {
    let json = r#"{
        "day_of_week": 3,
        "start_time": "09:00:00",
        "end_time": "19:00:00",
        "is_active": true
    }"#;

    let day: DayAvailability = from_str(json).expect("Failed to deserialize day availability");
    assert!(day.breaks.is_empty());
}

#[test]
fn test_create_booking_request_serialization() {
    let request = CreateBookingRequest {
        service_id: Uuid::new_v4(),
        barber_id: Uuid::new_v4(),
        date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
        start_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        client_name: "John Doe".to_string(),
        client_phone: "+55 11 98765-4321".to_string(),
        client_email: None,
        notes: Some("First visit".to_string()),
    };

    let json = to_string(&request).expect("Failed to serialize booking request");
    let deserialized: CreateBookingRequest =
        from_str(&json).expect("Failed to deserialize booking request");

    assert_eq!(deserialized.service_id, request.service_id);
    assert_eq!(deserialized.date, request.date);
    assert_eq!(deserialized.start_time, request.start_time);
    assert_eq!(deserialized.client_phone, request.client_phone);
    assert_eq!(deserialized.notes, request.notes);
}

#[test]
fn test_create_barbershop_request_defaults_active() {
    let json = r#"{"name": "Fade Factory"}"#;
    let request: CreateBarbershopRequest = from_str(json).expect("Failed to deserialize");

    assert_eq!(request.name, "Fade Factory");
    assert_eq!(request.slug, None);
    assert!(request.is_active);
}

#[test]
fn test_create_service_request_defaults_active() {
    let json = r#"{"name": "Haircut", "duration_minutes": 30, "price": 50.0}"#;
    let request: CreateServiceRequest = from_str(json).expect("Failed to deserialize");
    assert!(request.is_active);
}

#[test]
fn test_account_role_roundtrip() {
    for role in [AccountRole::Master, AccountRole::Owner, AccountRole::Staff] {
        assert_eq!(AccountRole::parse(role.as_str()), Some(role));
    }
    assert_eq!(AccountRole::parse("admin"), None);
}

#[test]
fn test_payment_method_roundtrip() {
    for method in [PaymentMethod::Cash, PaymentMethod::Card, PaymentMethod::Pix] {
        assert_eq!(PaymentMethod::parse(method.as_str()), Some(method));
        let json = to_string(&method).expect("Failed to serialize payment method");
        assert_eq!(json, format!("\"{}\"", method.as_str()));
    }
}

#[rstest]
#[case(100.0, 60.0, 40.0)]
#[case(50.0, 30.0, 20.0)]
#[case(0.01, 0.01, 0.0)]
#[case(33.35, 20.01, 13.34)]
fn test_commission_split(#[case] amount: f64, #[case] barber: f64, #[case] shop: f64) {
    let (got_barber, got_shop) = commission_split(amount);
    assert_eq!(got_barber, barber);
    assert_eq!(got_shop, shop);
}

#[test]
fn test_complete_appointment_request_defaults() {
    let json = r#"{"method": "pix"}"#;
    let request: CompleteAppointmentRequest = from_str(json).expect("Failed to deserialize");

    assert_eq!(request.amount, None);
    assert_eq!(request.method, PaymentMethod::Pix);
    assert_eq!(request.notes, None);
}
