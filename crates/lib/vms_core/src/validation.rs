//! Field validation for signup and registry input.
//!
//! Mirrors the formats enforced at the API boundary: Rwandan 10-digit phone
//! numbers, 16-digit national IDs, `ADMIN`/`STANDARD` roles and 5-10
//! character alphanumeric plate numbers.

use chrono::NaiveDate;

/// A field-level validation failure: (field, message).
pub type FieldError = (&'static str, &'static str);

fn all_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// Non-blank, at most 100 characters.
pub fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        return Err(("name", "Name is required"));
    }
    if name.chars().count() > 100 {
        return Err(("name", "Name must not exceed 100 characters"));
    }
    Ok(())
}

/// Non-blank with a single `@` separating non-empty local and domain parts.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.trim().is_empty() {
        return Err(("email", "Email is required"));
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(("email", "Invalid email format"));
    }
    Ok(())
}

/// Exactly 10 digits.
pub fn validate_phone(phone: &str) -> Result<(), FieldError> {
    if phone.trim().is_empty() {
        return Err(("phone", "Phone number is required"));
    }
    if !all_digits(phone, 10) {
        return Err(("phone", "Phone number must be 10 digits"));
    }
    Ok(())
}

/// Exactly 16 digits.
pub fn validate_national_id(national_id: &str) -> Result<(), FieldError> {
    if national_id.trim().is_empty() {
        return Err(("nationalId", "National ID is required"));
    }
    if !all_digits(national_id, 16) {
        return Err(("nationalId", "National ID must be 16 digits"));
    }
    Ok(())
}

/// At least 8 characters.
pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        return Err(("password", "Password is required"));
    }
    if password.chars().count() < 8 {
        return Err(("password", "Password must be at least 8 characters"));
    }
    Ok(())
}

/// `ADMIN` or `STANDARD`.
pub fn validate_role(role: &str) -> Result<(), FieldError> {
    if role.trim().is_empty() {
        return Err(("role", "Role is required"));
    }
    if role != "ADMIN" && role != "STANDARD" {
        return Err(("role", "Role must be ADMIN or STANDARD"));
    }
    Ok(())
}

/// Non-blank, at most 255 characters.
pub fn validate_address(address: &str) -> Result<(), FieldError> {
    if address.trim().is_empty() {
        return Err(("address", "Address is required"));
    }
    if address.chars().count() > 255 {
        return Err(("address", "Address must not exceed 255 characters"));
    }
    Ok(())
}

/// 5-10 uppercase alphanumeric characters.
pub fn validate_plate_number(plate_number: &str) -> Result<(), FieldError> {
    if plate_number.trim().is_empty() {
        return Err(("plateNumber", "Plate number is required"));
    }
    let len = plate_number.len();
    let alnum_upper = plate_number
        .bytes()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
    if !(5..=10).contains(&len) || !alnum_upper {
        return Err((
            "plateNumber",
            "Plate number must be 5-10 alphanumeric characters",
        ));
    }
    Ok(())
}

/// Today or in the past, relative to `today`.
pub fn validate_issued_date(issued_date: NaiveDate, today: NaiveDate) -> Result<(), FieldError> {
    if issued_date > today {
        return Err(("issuedDate", "Issued date must be today or in the past"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_limits() {
        assert!(validate_name("Alice Mukamana").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn email_format() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("alice@nodot").is_err());
    }

    #[test]
    fn phone_is_ten_digits() {
        assert!(validate_phone("0788123456").is_ok());
        assert!(validate_phone("078812345").is_err());
        assert!(validate_phone("07881234567").is_err());
        assert!(validate_phone("07881234ab").is_err());
    }

    #[test]
    fn national_id_is_sixteen_digits() {
        assert!(validate_national_id("1199012345678901").is_ok());
        assert!(validate_national_id("123").is_err());
        assert!(validate_national_id("119901234567890a").is_err());
    }

    #[test]
    fn password_minimum_length() {
        assert!(validate_password("longenough").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn role_is_admin_or_standard() {
        assert!(validate_role("ADMIN").is_ok());
        assert!(validate_role("STANDARD").is_ok());
        assert!(validate_role("admin").is_err());
        assert!(validate_role("ROOT").is_err());
    }

    #[test]
    fn plate_number_format() {
        assert!(validate_plate_number("RAD123A").is_ok());
        assert!(validate_plate_number("AB123").is_ok());
        assert!(validate_plate_number("AB12").is_err());
        assert!(validate_plate_number("ABCDEFGHIJK").is_err());
        assert!(validate_plate_number("rad123a").is_err());
    }

    #[test]
    fn issued_date_not_in_future() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(validate_issued_date(today, today).is_ok());
        assert!(validate_issued_date(today.pred_opt().unwrap(), today).is_ok());
        assert!(validate_issued_date(today.succ_opt().unwrap(), today).is_err());
    }
}
