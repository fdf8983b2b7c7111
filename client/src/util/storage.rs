//! `localStorage`-backed session store.
//!
//! Holds the same JSON document the CLI writes to its session file, under one
//! key. `Storage` handles are not `Send`, so every call looks the store up
//! again instead of keeping it.

use linkbio::backend::Session;
use linkbio::persist::{PersistError, SessionStore};

pub const SESSION_KEY: &str = "linkbio.session";

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSessionStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, PersistError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| PersistError::Unavailable("localStorage".to_owned()))
}

impl SessionStore for LocalStorageSessionStore {
    fn load(&self) -> Result<Option<Session>, PersistError> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?
                .get_item(SESSION_KEY)
                .map_err(|_| PersistError::Unavailable("localStorage read".to_owned()))?;
            match raw {
                Some(json) => Ok(Some(serde_json::from_str(&json)?)),
                None => Ok(None),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    fn save(&self, session: &Session) -> Result<(), PersistError> {
        let json = serde_json::to_string(session)?;
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(SESSION_KEY, &json)
                .map_err(|_| PersistError::Unavailable("localStorage write".to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = json;
            Ok(())
        }
    }

    fn clear(&self) -> Result<(), PersistError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(SESSION_KEY)
                .map_err(|_| PersistError::Unavailable("localStorage remove".to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}
