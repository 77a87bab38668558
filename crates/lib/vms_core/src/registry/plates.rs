//! Plate number database queries.

use chrono::NaiveDate;
use sqlx::PgPool;

use super::RegistryError;
use crate::models::registry::PlateNumber;

type PlateRow = (i64, i64, String, NaiveDate, bool);

fn row_to_plate(row: PlateRow) -> PlateNumber {
    let (id, owner_id, plate_number, issued_date, in_use) = row;
    PlateNumber {
        id,
        owner_id,
        plate_number,
        issued_date,
        in_use,
    }
}

/// Insert a plate number for an owner, returning the stored record.
pub async fn create_plate(
    pool: &PgPool,
    owner_id: i64,
    plate_number: &str,
    issued_date: NaiveDate,
    in_use: bool,
) -> Result<PlateNumber, RegistryError> {
    let row = sqlx::query_as::<_, PlateRow>(
        "INSERT INTO plate_numbers (owner_id, plate_number, issued_date, in_use) \
         VALUES ($1, $2, $3, $4) \
         RETURNING id, owner_id, plate_number, issued_date, in_use",
    )
    .bind(owner_id)
    .bind(plate_number)
    .bind(issued_date)
    .bind(in_use)
    .fetch_one(pool)
    .await?;
    Ok(row_to_plate(row))
}

/// Check whether a plate number is already registered.
pub async fn plate_number_exists(
    pool: &PgPool,
    plate_number: &str,
) -> Result<bool, RegistryError> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM plate_numbers WHERE plate_number = $1)",
    )
    .bind(plate_number)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}

/// List all plates registered to an owner, oldest first.
pub async fn list_for_owner(
    pool: &PgPool,
    owner_id: i64,
) -> Result<Vec<PlateNumber>, RegistryError> {
    let rows = sqlx::query_as::<_, PlateRow>(
        "SELECT id, owner_id, plate_number, issued_date, in_use \
         FROM plate_numbers WHERE owner_id = $1 ORDER BY id",
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(row_to_plate).collect())
}
