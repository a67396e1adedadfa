//! REST client for Moonraker, the HTTP control service that fronts
//! Klipper-based 3D printers.
//!
//! Only the status-query surface is wrapped: one bounded-deadline GET
//! against the object-query endpoint, normalized into a [`PrinterStatus`]
//! snapshot. Retry and backoff are deliberately left to callers.

mod client;
mod status;

pub use client::{MoonrakerClient, MoonrakerError};
pub use status::PrinterStatus;
