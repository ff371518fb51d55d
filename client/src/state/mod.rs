//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns durable session data and talks to the API; `auth` exposes
//! it reactively to components.

pub mod auth;
pub mod session;
