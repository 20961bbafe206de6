use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Barber's share of a recorded payment; the shop keeps the remainder.
pub const BARBER_COMMISSION_RATE: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Pix,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Pix => "pix",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cash" => Some(PaymentMethod::Cash),
            "card" => Some(PaymentMethod::Card),
            "pix" => Some(PaymentMethod::Pix),
            _ => None,
        }
    }
}

/// Completes an appointment with a payment. `amount` defaults to the
/// appointment's price snapshot when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteAppointmentRequest {
    pub amount: Option<f64>,
    pub method: PaymentMethod,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub id: Uuid,
    pub appointment_id: Uuid,
    pub amount: f64,
    pub method: PaymentMethod,
    pub payment_date: NaiveDate,
    pub barber_commission: f64,
    pub shop_revenue: f64,
}

/// Splits a payment between barber and shop, rounded to cents. The two
/// parts are rounded independently, matching how the amounts are recorded.
pub fn commission_split(amount: f64) -> (f64, f64) {
    let barber = round_cents(amount * BARBER_COMMISSION_RATE);
    let shop = round_cents(amount * (1.0 - BARBER_COMMISSION_RATE));
    (barber, shop)
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStatsResponse {
    pub today_appointments: i64,
    pub pending_appointments: i64,
    pub today_revenue: f64,
    pub monthly_revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// 1-based calendar month.
    pub month: i32,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueResponse {
    pub year: i32,
    /// Twelve entries, one per month, zero-filled where no payments exist.
    pub months: Vec<MonthlyRevenue>,
}
