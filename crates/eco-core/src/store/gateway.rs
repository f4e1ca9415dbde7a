use crate::constants::USER_KEY;
use crate::error::{CoreError, Result};
use crate::models::User;
use crate::store::StorageProvider;

/// Persistence gateway for the single user record.
///
/// Contract: every mutating core operation loads a snapshot, mutates it,
/// and saves it back before returning, with no suspension in between.
/// `save` always serializes the complete aggregate as one write, so the
/// stored record is never a partial merge.
pub struct UserStore<S: StorageProvider> {
    provider: S,
}

impl<S: StorageProvider> UserStore<S> {
    pub fn new(provider: S) -> Self {
        Self { provider }
    }

    /// Load the resident user. `NotFound` when the slot is empty,
    /// `CorruptData` when the stored text fails the schema check.
    pub fn load(&self) -> Result<User> {
        let text = self.provider.get(USER_KEY)?.ok_or(CoreError::NotFound)?;
        User::from_json(&text).map_err(CoreError::CorruptData)
    }

    /// Serialize and overwrite the stored record wholesale.
    pub fn save(&mut self, user: &User) -> Result<()> {
        let json = user.to_json().map_err(CoreError::Storage)?;
        self.provider.set(USER_KEY, &json)
    }

    /// Remove the stored record (logout).
    pub fn clear(&mut self) -> Result<()> {
        self.provider.remove(USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    #[test]
    fn test_load_empty_slot_is_not_found() {
        let store = UserStore::new(MemoryStorage::new());
        assert!(matches!(store.load(), Err(CoreError::NotFound)));
    }

    #[test]
    fn test_save_then_load() {
        let mut store = UserStore::new(MemoryStorage::new());
        let user = User::create("a@x.com", "Ann").unwrap();
        store.save(&user).unwrap();
        let loaded = store.load().expect("load saved user");
        assert_eq!(loaded, user);
    }

    #[test]
    fn test_clear_empties_the_slot() {
        let mut store = UserStore::new(MemoryStorage::new());
        let user = User::create("a@x.com", "Ann").unwrap();
        store.save(&user).unwrap();
        store.clear().unwrap();
        assert!(matches!(store.load(), Err(CoreError::NotFound)));
    }

    #[test]
    fn test_malformed_record_is_corrupt_data() {
        let mut provider = MemoryStorage::new();
        provider.set(USER_KEY, "{ not json").unwrap();
        let store = UserStore::new(provider);
        assert!(matches!(store.load(), Err(CoreError::CorruptData(_))));
    }

    #[test]
    fn test_record_missing_required_fields_is_corrupt_data() {
        let mut provider = MemoryStorage::new();
        provider.set(USER_KEY, r#"{"email":"a@x.com"}"#).unwrap();
        let store = UserStore::new(provider);
        assert!(matches!(store.load(), Err(CoreError::CorruptData(_))));
    }
}
