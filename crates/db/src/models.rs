use chairtime_core::models::availability::BreakWindow;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBarbershop {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAccount {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    /// "master", "owner" or "staff".
    pub role: String,
    pub barbershop_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBarber {
    pub id: Uuid,
    pub barbershop_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub barbershop_id: Uuid,
    pub name: String,
    pub duration_minutes: i32,
    pub price: f64,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClient {
    pub id: Uuid,
    pub barbershop_id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDayAvailability {
    pub id: Uuid,
    pub barbershop_id: Uuid,
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_active: bool,
    pub breaks: Json<Vec<BreakWindow>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub barbershop_id: Uuid,
    pub client_id: Uuid,
    pub barber_id: Uuid,
    pub service_id: Uuid,
    pub appointment_date: NaiveDate,
    pub start_time: NaiveTime,
    /// "pending", "confirmed", "completed" or "cancelled".
    pub status: String,
    pub notes: Option<String>,
    pub price_at_booking: f64,
    pub duration_at_booking: i32,
    pub created_at: DateTime<Utc>,
}

/// Appointment listing row joined with client, barber and service names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointmentDetail {
    pub id: Uuid,
    pub appointment_date: NaiveDate,
    pub start_time: NaiveTime,
    pub status: String,
    pub notes: Option<String>,
    pub price_at_booking: f64,
    pub duration_at_booking: i32,
    pub client_name: String,
    pub client_phone: String,
    pub barber_name: String,
    pub service_name: String,
    pub created_at: DateTime<Utc>,
}

/// Minimal projection the availability resolver needs from an appointment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBookedSpan {
    pub start_time: NaiveTime,
    pub duration_at_booking: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbPayment {
    pub id: Uuid,
    pub barbershop_id: Uuid,
    pub appointment_id: Uuid,
    pub barber_id: Uuid,
    pub amount: f64,
    /// "cash", "card" or "pix".
    pub payment_method: String,
    pub payment_date: NaiveDate,
    pub barber_commission: f64,
    pub shop_revenue: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbMonthlyRevenue {
    pub month: i32,
    pub total: f64,
}
