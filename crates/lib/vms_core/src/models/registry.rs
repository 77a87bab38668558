//! Vehicle registry domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered vehicle owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleOwner {
    pub id: i64,
    pub name: String,
    pub national_id: String,
    pub phone: String,
    pub address: String,
    pub email: String,
}

/// A plate number attached to an owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateNumber {
    pub id: i64,
    pub owner_id: i64,
    pub plate_number: String,
    pub issued_date: NaiveDate,
    pub in_use: bool,
}

/// One page of query results plus the total row count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total: i64,
}

impl<T> Page<T> {
    /// Map the items of a page, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }
}
