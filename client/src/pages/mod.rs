//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped form state and delegates access control
//! to the guards in `components::guard`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod profile;
pub mod section;
pub mod signup;
