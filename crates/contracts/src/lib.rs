//! Shared types and pure reporting engines for the AssetDesk dashboard.
//!
//! Everything here is target independent: the frontend compiles it to wasm,
//! the tests run it natively.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
