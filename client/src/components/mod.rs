//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `AppAuth` context; guards apply the route
//! authorization policy and the navbar reflects the signed-in identity.

pub mod guard;
pub mod loading;
pub mod navbar;
