//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for patches, where required columns use
//!   `Option<T>` (omitted = keep current value) and nullable columns use
//!   `Option<Option<T>>` (omitted = keep, `null` = clear, value = replace)

pub mod filament;
pub mod job;
pub mod patch;
pub mod printer;
pub mod setting;
pub mod user;
