//! Owner and plate registration delegating to `vms_core::registry`.

use chrono::Utc;
use sqlx::PgPool;
use tracing::{info, warn};
use vms_core::models::registry::{PlateNumber, VehicleOwner};
use vms_core::registry::{owners, plates};
use vms_core::validation;

use crate::error::{AppError, AppResult};
use crate::models::{OwnerPage, OwnerSearchParams, PlateNumberDto, VehicleOwnerDto};

fn owner_to_dto(owner: VehicleOwner) -> VehicleOwnerDto {
    VehicleOwnerDto {
        name: owner.name,
        national_id: owner.national_id,
        phone: owner.phone,
        address: owner.address,
        email: owner.email,
    }
}

fn plate_to_dto(plate: PlateNumber) -> PlateNumberDto {
    PlateNumberDto {
        plate_number: plate.plate_number,
        issued_date: plate.issued_date,
        in_use: plate.in_use,
    }
}

/// Register a new vehicle owner.
pub async fn register_owner(pool: &PgPool, dto: &VehicleOwnerDto) -> AppResult<VehicleOwnerDto> {
    validation::validate_name(&dto.name)?;
    validation::validate_national_id(&dto.national_id)?;
    validation::validate_phone(&dto.phone)?;
    validation::validate_address(&dto.address)?;
    validation::validate_email(&dto.email)?;

    if owners::national_id_exists(pool, &dto.national_id).await? {
        warn!("owner registration attempt with duplicate national ID");
        return Err(AppError::Validation("National ID already exists".into()));
    }
    if owners::email_exists(pool, &dto.email).await? {
        warn!(email = %dto.email, "owner registration attempt with duplicate email");
        return Err(AppError::Validation("Email already exists".into()));
    }

    let saved = owners::create_owner(
        pool,
        &dto.name,
        &dto.national_id,
        &dto.phone,
        &dto.address,
        &dto.email,
    )
    .await?;
    info!(email = %saved.email, "owner registered successfully");
    Ok(owner_to_dto(saved))
}

/// Paginated owner listing.
pub async fn list_owners(pool: &PgPool, page: u32, size: u32) -> AppResult<OwnerPage> {
    if size == 0 {
        return Err(AppError::Validation("Size must be at least 1".into()));
    }

    let result = owners::list_owners(pool, page, size).await?.map(owner_to_dto);
    Ok(OwnerPage {
        items: result.items,
        page: result.page,
        size: result.size,
        total: result.total,
    })
}

/// Search for an owner by national ID or phone. National ID wins when both
/// are supplied.
pub async fn search_owner(
    pool: &PgPool,
    params: &OwnerSearchParams,
) -> AppResult<VehicleOwnerDto> {
    let found = match (&params.national_id, &params.phone) {
        (Some(national_id), _) => owners::find_by_national_id(pool, national_id).await?,
        (None, Some(phone)) => owners::find_by_phone(pool, phone).await?,
        (None, None) => {
            return Err(AppError::Validation(
                "At least one search parameter (nationalId or phone) is required".into(),
            ));
        }
    };

    match found {
        Some(owner) => {
            info!(email = %owner.email, "owner found");
            Ok(owner_to_dto(owner))
        }
        None => Err(AppError::NotFound("Owner not found".into())),
    }
}

/// Attach a plate number to an owner.
pub async fn register_plate(
    pool: &PgPool,
    owner_id: i64,
    dto: &PlateNumberDto,
) -> AppResult<PlateNumberDto> {
    validation::validate_plate_number(&dto.plate_number)?;
    validation::validate_issued_date(dto.issued_date, Utc::now().date_naive())?;

    let owner = owners::find_by_id(pool, owner_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Owner not found".into()))?;

    if plates::plate_number_exists(pool, &dto.plate_number).await? {
        warn!(plate = %dto.plate_number, "plate number already exists");
        return Err(AppError::Validation("Plate number already exists".into()));
    }

    let saved =
        plates::create_plate(pool, owner.id, &dto.plate_number, dto.issued_date, dto.in_use)
            .await?;
    info!(owner_id, plate = %saved.plate_number, "plate number registered");
    Ok(plate_to_dto(saved))
}

/// List all plates registered to an owner.
pub async fn list_plates(pool: &PgPool, owner_id: i64) -> AppResult<Vec<PlateNumberDto>> {
    let owner = owners::find_by_id(pool, owner_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Owner not found".into()))?;

    let plates = plates::list_for_owner(pool, owner.id).await?;
    info!(owner_id, count = plates.len(), "retrieved plates for owner");
    Ok(plates.into_iter().map(plate_to_dto).collect())
}
