//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` isolates the browser's durable storage behind a trait so the
//! session store can be tested natively; `auth` holds the pure route policy.

pub mod auth;
pub mod storage;
