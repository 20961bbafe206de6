use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{barber::Barber, service::Service};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Barbershop {
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBarbershopRequest {
    pub name: String,
    /// Derived from `name` via [`slugify`] when omitted.
    pub slug: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBarbershopRequest {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
}

/// Everything the public booking page needs in one response: the shop,
/// its bookable services and its barbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopProfileResponse {
    pub barbershop: Barbershop,
    pub services: Vec<Service>,
    pub barbers: Vec<Barber>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub email: String,
    pub password: String,
    pub barbershop_id: Uuid,
    #[serde(default = "AccountRole::owner")]
    pub role: AccountRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: String,
    pub role: AccountRole,
    pub barbershop_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Master,
    Owner,
    Staff,
}

impl AccountRole {
    fn owner() -> Self {
        AccountRole::Owner
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountRole::Master => "master",
            AccountRole::Owner => "owner",
            AccountRole::Staff => "staff",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "master" => Some(AccountRole::Master),
            "owner" => Some(AccountRole::Owner),
            "staff" => Some(AccountRole::Staff),
            _ => None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Derives a URL-safe tenant slug from a display name: ASCII lowercase,
/// non-alphanumeric runs collapsed to single hyphens, edges trimmed.
/// Falls back to a fixed slug for names with no usable characters.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.chars() {
        let c = fold_accent(c);
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        "barbershop".to_string()
    } else {
        slug
    }
}

// Covers the accented letters that show up in shop names; anything else
// non-ASCII becomes a separator.
fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' | 'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ñ' | 'Ñ' => 'n',
        _ => c,
    }
}
