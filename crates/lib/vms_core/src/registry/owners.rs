//! Vehicle owner database queries.

use sqlx::PgPool;

use super::RegistryError;
use crate::models::registry::{Page, VehicleOwner};

type OwnerRow = (i64, String, String, String, String, String);

fn row_to_owner(row: OwnerRow) -> VehicleOwner {
    let (id, name, national_id, phone, address, email) = row;
    VehicleOwner {
        id,
        name,
        national_id,
        phone,
        address,
        email,
    }
}

const OWNER_COLUMNS: &str = "id, name, national_id, phone, address, email";

/// Insert a new owner, returning the stored record.
pub async fn create_owner(
    pool: &PgPool,
    name: &str,
    national_id: &str,
    phone: &str,
    address: &str,
    email: &str,
) -> Result<VehicleOwner, RegistryError> {
    let row = sqlx::query_as::<_, OwnerRow>(
        "INSERT INTO vehicle_owners (name, national_id, phone, address, email) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, name, national_id, phone, address, email",
    )
    .bind(name)
    .bind(national_id)
    .bind(phone)
    .bind(address)
    .bind(email)
    .fetch_one(pool)
    .await?;
    Ok(row_to_owner(row))
}

/// Fetch an owner by primary key.
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<VehicleOwner>, RegistryError> {
    let row = sqlx::query_as::<_, OwnerRow>(&format!(
        "SELECT {OWNER_COLUMNS} FROM vehicle_owners WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(row_to_owner))
}

/// Fetch an owner by national ID.
pub async fn find_by_national_id(
    pool: &PgPool,
    national_id: &str,
) -> Result<Option<VehicleOwner>, RegistryError> {
    let row = sqlx::query_as::<_, OwnerRow>(&format!(
        "SELECT {OWNER_COLUMNS} FROM vehicle_owners WHERE national_id = $1"
    ))
    .bind(national_id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(row_to_owner))
}

/// Fetch an owner by phone number.
pub async fn find_by_phone(
    pool: &PgPool,
    phone: &str,
) -> Result<Option<VehicleOwner>, RegistryError> {
    let row = sqlx::query_as::<_, OwnerRow>(&format!(
        "SELECT {OWNER_COLUMNS} FROM vehicle_owners WHERE phone = $1"
    ))
    .bind(phone)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(row_to_owner))
}

/// Check whether a national ID is already registered to an owner.
pub async fn national_id_exists(
    pool: &PgPool,
    national_id: &str,
) -> Result<bool, RegistryError> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM vehicle_owners WHERE national_id = $1)",
    )
    .bind(national_id)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}

/// Check whether an email is already registered to an owner.
pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, RegistryError> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM vehicle_owners WHERE email = $1)",
    )
    .bind(email)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}

/// Fetch one page of owners ordered by ID, with the total count.
pub async fn list_owners(
    pool: &PgPool,
    page: u32,
    size: u32,
) -> Result<Page<VehicleOwner>, RegistryError> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vehicle_owners")
        .fetch_one(pool)
        .await?;

    let rows = sqlx::query_as::<_, OwnerRow>(&format!(
        "SELECT {OWNER_COLUMNS} FROM vehicle_owners ORDER BY id LIMIT $1 OFFSET $2"
    ))
    .bind(i64::from(size))
    .bind(i64::from(page) * i64::from(size))
    .fetch_all(pool)
    .await?;

    Ok(Page {
        items: rows.into_iter().map(row_to_owner).collect(),
        page,
        size,
        total,
    })
}
