use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::client::Client;

/// Lifecycle of an appointment. Only `Pending` and `Confirmed` occupy time
/// on the booking grid; `Completed` and `Cancelled` free the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(AppointmentStatus::Pending),
            "confirmed" => Some(AppointmentStatus::Confirmed),
            "completed" => Some(AppointmentStatus::Completed),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }

    /// Whether this appointment still blocks its time span.
    pub fn occupies_slot(&self) -> bool {
        matches!(self, AppointmentStatus::Pending | AppointmentStatus::Confirmed)
    }

    /// Allowed transitions: pending may be confirmed or cancelled, confirmed
    /// may be completed or cancelled, terminal states never change.
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        match self {
            AppointmentStatus::Pending => matches!(
                next,
                AppointmentStatus::Confirmed | AppointmentStatus::Cancelled
            ),
            AppointmentStatus::Confirmed => matches!(
                next,
                AppointmentStatus::Completed | AppointmentStatus::Cancelled
            ),
            AppointmentStatus::Completed | AppointmentStatus::Cancelled => false,
        }
    }
}

/// Public booking submission. The client is found or created by phone
/// number; price and duration are snapshotted from the service at insert
/// time so later edits never rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub service_id: Uuid,
    pub barber_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: Option<String>,
    pub notes: Option<String>,
}

/// Confirmation returned to the booking page, including the client record
/// the appointment was matched or created under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub status: AppointmentStatus,
    pub price_at_booking: f64,
    pub duration_at_booking: i32,
    pub client: Client,
}

/// Dashboard listing row, joined with the names staff actually read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub price_at_booking: f64,
    pub duration_at_booking: i32,
    pub client_name: String,
    pub client_phone: String,
    pub barber_name: String,
    pub service_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: AppointmentStatus,
}
