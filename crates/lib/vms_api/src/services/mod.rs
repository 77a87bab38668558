//! Business logic delegating to `vms_core`.

pub mod auth;
pub mod owners;
