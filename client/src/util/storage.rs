//! Durable key-value storage backing the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store reads and writes through `SessionStorage` so the browser
//! `localStorage` glue lives here and tests can substitute an in-memory map.
//! All access is synchronous.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Synchronous string key-value storage.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a description of the failure when the backend refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;

    /// Removing an absent key is a no-op.
    fn remove_item(&self, key: &str);
}

/// `window.localStorage`. Outside the browser reads are empty and writes fail.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or_else(|| "localStorage unavailable".to_owned())?;
            storage
                .set_item(key, value)
                .map_err(|e| format!("localStorage write failed: {e:?}"))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err("durable storage is only available in the browser".to_owned())
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
