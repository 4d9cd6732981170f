//! `mc-core` — foundational types for the monk/doctor visit scheduler.
//!
//! This crate is a dependency of every other `mc-*` crate.  It has no `mc-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `MonkId`, `DoctorId`                              |
//! | [`time`]    | `Tick`, `SimClock`                                |
//! | [`config`]  | `SimConfig`, `AdmissionPolicy`                    |
//! | [`error`]   | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AdmissionPolicy, SimConfig};
pub use error::{CoreError, CoreResult};
pub use ids::{DoctorId, MonkId};
pub use time::{SimClock, Tick};
