// ============================================================================
// AUTH SERVICE - SESSION FLAG
// ============================================================================
// The "session" is a single `valid_admin = "true"` entry in localStorage.
// Nothing is verified server-side; it only gates the UI routes.
// ============================================================================

use crate::error::{AuthError, StorageError};
use crate::utils::{KeyValueStore, STORAGE_KEY_VALID_ADMIN, VALID_ADMIN_VALUE};

/// True when the session flag is present. An unreadable store counts as logged out.
pub fn is_authenticated(store: &impl KeyValueStore) -> bool {
    match store.get_item(STORAGE_KEY_VALID_ADMIN) {
        Ok(value) => value.as_deref() == Some(VALID_ADMIN_VALUE),
        Err(e) => {
            log::warn!("⚠️ Could not read session flag: {}", e);
            false
        }
    }
}

/// Compares `input` with the configured key. Sets the flag on match, clears it otherwise.
pub fn login(store: &impl KeyValueStore, input: &str, security_key: &str) -> Result<(), AuthError> {
    if input == security_key {
        store.set_item(STORAGE_KEY_VALID_ADMIN, VALID_ADMIN_VALUE)?;
        log::info!("🔐 Admin session started");
        Ok(())
    } else {
        if let Err(e) = store.remove_item(STORAGE_KEY_VALID_ADMIN) {
            log::error!("❌ Could not clear session flag: {}", e);
        }
        log::warn!("⚠️ Invalid security key entered");
        Err(AuthError::InvalidKey)
    }
}

pub fn logout(store: &impl KeyValueStore) -> Result<(), StorageError> {
    store.remove_item(STORAGE_KEY_VALID_ADMIN)?;
    log::info!("👋 Logout");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;

    #[test]
    fn login_with_configured_key_sets_flag() {
        let store = MemoryStorage::default();
        assert!(login(&store, "s3cret", "s3cret").is_ok());
        assert!(is_authenticated(&store));
        assert_eq!(store.get_item("valid_admin"), Ok(Some("true".into())));
    }

    #[test]
    fn wrong_key_leaves_flag_absent() {
        let store = MemoryStorage::default();
        assert_eq!(login(&store, "guess", "s3cret"), Err(AuthError::InvalidKey));
        assert!(!is_authenticated(&store));
        assert_eq!(store.get_item("valid_admin"), Ok(None));
    }

    #[test]
    fn wrong_key_clears_existing_flag() {
        let store = MemoryStorage::default();
        login(&store, "s3cret", "s3cret").unwrap();
        assert!(login(&store, "S3CRET", "s3cret").is_err());
        assert!(!is_authenticated(&store));
    }

    #[test]
    fn comparison_is_exact() {
        let store = MemoryStorage::default();
        assert!(login(&store, "s3cret ", "s3cret").is_err());
        assert_eq!(AuthError::InvalidKey.to_string(), "Invalid security key. Please try again.");
    }

    #[test]
    fn logout_always_clears_flag() {
        let store = MemoryStorage::default();
        assert!(logout(&store).is_ok());
        assert!(!is_authenticated(&store));

        login(&store, "k", "k").unwrap();
        logout(&store).unwrap();
        assert!(!is_authenticated(&store));
    }

    #[test]
    fn other_flag_values_do_not_authenticate() {
        let store = MemoryStorage::default();
        store.set_item("valid_admin", "false").unwrap();
        assert!(!is_authenticated(&store));
    }
}
