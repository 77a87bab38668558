//! API request/response models.
//!
//! Wire shapes are camelCase for compatibility with existing clients.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Error body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `POST /api/auth/signup` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
    pub password: String,
    pub role: String,
}

/// `POST /api/auth/signup` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// `POST /api/auth/login` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/login` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Vehicle owner payload, used for both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleOwnerDto {
    pub name: String,
    pub national_id: String,
    pub phone: String,
    pub address: String,
    pub email: String,
}

/// Plate number payload, used for both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateNumberDto {
    pub plate_number: String,
    pub issued_date: NaiveDate,
    #[serde(default)]
    pub in_use: bool,
}

/// Paging parameters for owner listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    pub page: u32,
    pub size: u32,
}

/// Search parameters for owner lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSearchParams {
    pub national_id: Option<String>,
    pub phone: Option<String>,
}

/// One page of owners.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerPage {
    pub items: Vec<VehicleOwnerDto>,
    pub page: u32,
    pub size: u32,
    pub total: i64,
}

/// `GET /api/health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub version: String,
    pub db_connected: bool,
}
