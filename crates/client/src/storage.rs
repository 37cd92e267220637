//! Key/value persistence for the session, the auth token and form drafts.
//!
//! Browser builds use `localStorage`; native builds keep a small JSON file.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use shared_types::{
    is_token_expired, rehydrate, rehydrate_forgot_password, ForgotPasswordState, NewProduction,
    PersistedRoot, SessionState, FORM_STATE_KEY, PERSIST_ROOT_KEY, TOKEN_KEY,
};

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-process store. Used by tests and as a fallback when nothing else is
/// available.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.entries).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        lock(&self.entries).insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        lock(&self.entries).remove(key);
    }
}

/// JSON-file store for desktop and mobile builds.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    cache: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`. An unreadable or corrupt
    /// file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self {
            path,
            cache: Mutex::new(cache),
        }
    }

    fn flush(&self, entries: &BTreeMap<String, String>) {
        let result = serde_json::to_string_pretty(entries)
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(&self.path, json).map_err(|e| e.to_string()));
        if let Err(e) = result {
            tracing::warn!(error = %e, path = %self.path.display(), "Failed to write storage file");
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.cache).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = lock(&self.cache);
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = lock(&self.cache);
        if entries.remove(key).is_some() {
            self.flush(&entries);
        }
    }
}

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!(key, "localStorage write rejected");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Store appropriate for the current target.
pub fn platform_store() -> Arc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(BrowserStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(FileStore::open("garment-dashboard-session.json"))
    }
}

/// Session, token and draft persistence on top of a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionPersistence {
    store: Arc<dyn KeyValueStore>,
}

impl SessionPersistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load_root(&self) -> Option<PersistedRoot> {
        self.store
            .get(PERSIST_ROOT_KEY)
            .and_then(|raw| PersistedRoot::decode(&raw))
    }

    /// Persist the session. A stored password-reset email is carried over.
    pub fn save_session(&self, state: &SessionState) {
        let mut root = state.to_persisted();
        root.forgot_password_email = self.load_root().and_then(|r| r.forgot_password_email);
        self.store.set(PERSIST_ROOT_KEY, &root.encode());
    }

    /// Persist the forgot-password email next to the session.
    pub fn save_forgot_password(&self, flow: &ForgotPasswordState) {
        let mut root = self
            .load_root()
            .unwrap_or_else(|| SessionState::default().to_persisted());
        root.forgot_password_email = flow.email.clone();
        self.store.set(PERSIST_ROOT_KEY, &root.encode());
    }

    pub fn load_forgot_password(&self) -> ForgotPasswordState {
        rehydrate_forgot_password(self.store.get(PERSIST_ROOT_KEY).as_deref())
    }

    /// Raw rehydration without any token check.
    pub fn load_session(&self) -> SessionState {
        rehydrate(self.store.get(PERSIST_ROOT_KEY).as_deref())
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn save_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    /// True when a signed-in session has no usable token.
    pub fn session_expired(&self, now: DateTime<Utc>) -> bool {
        match self.token() {
            Some(token) => is_token_expired(&token, now),
            None => true,
        }
    }

    /// Rehydrate for first render. A stored user whose token is missing or
    /// expired is logged out and the stale entries are removed.
    pub fn restore(&self, now: DateTime<Utc>) -> SessionState {
        let state = self.load_session();
        if state.is_authenticated() && self.session_expired(now) {
            tracing::info!("Stored session expired, starting as guest");
            self.clear();
            return SessionState::default();
        }
        state
    }

    /// Forget the session and token. The persisted blob is rewritten as a
    /// guest rather than removed so the version marker stays current.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.save_session(&SessionState::default());
    }

    pub fn save_form_draft(&self, draft: &NewProduction) {
        if draft.is_blank() {
            self.store.remove(FORM_STATE_KEY);
            return;
        }
        match serde_json::to_string(draft) {
            Ok(json) => self.store.set(FORM_STATE_KEY, &json),
            Err(e) => tracing::warn!(error = %e, "Failed to encode form draft"),
        }
    }

    pub fn load_form_draft(&self) -> NewProduction {
        self.store
            .get(FORM_STATE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn clear_form_draft(&self) {
        self.store.remove(FORM_STATE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{Role, SessionAction, User};

    fn admin() -> User {
        User {
            id: "a-1".into(),
            name: "Ana Cruz".into(),
            email: "ana@example.com".into(),
            role: Role::Admin,
            is_admin: true,
            photo: None,
            department: None,
            level: None,
            gender: None,
            verified: true,
        }
    }

    fn signed_in() -> SessionState {
        let mut state = SessionState::default();
        state.reduce(SessionAction::LoginSuccess(admin()));
        state
    }

    // header.payload.sig with the given exp.
    fn jwt(exp: i64) -> String {
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;
        use base64::Engine;
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#),
            URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp}}}"#))
        )
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn session_roundtrip_through_store() {
        let persistence = SessionPersistence::new(Arc::new(MemoryStore::new()));
        persistence.save_session(&signed_in());
        let restored = persistence.load_session();
        assert_eq!(restored.current_user, Some(admin()));
    }

    #[test]
    fn forgot_password_email_survives_session_writes() {
        let persistence = SessionPersistence::new(Arc::new(MemoryStore::new()));
        let flow = ForgotPasswordState {
            email: Some("ana@example.com".into()),
            ..ForgotPasswordState::default()
        };
        persistence.save_forgot_password(&flow);
        persistence.save_session(&signed_in());

        assert_eq!(persistence.load_forgot_password().email.as_deref(), Some("ana@example.com"));
        assert_eq!(persistence.load_session().current_user, Some(admin()));

        persistence.save_forgot_password(&ForgotPasswordState::default());
        assert_eq!(persistence.load_forgot_password().email, None);
        assert_eq!(persistence.load_session().current_user, Some(admin()));
    }

    #[test]
    fn restore_keeps_session_with_live_token() {
        let persistence = SessionPersistence::new(Arc::new(MemoryStore::new()));
        persistence.save_session(&signed_in());
        persistence.save_token(&jwt(1_800_000_000));
        assert_eq!(persistence.restore(now()).current_user, Some(admin()));
    }

    #[test]
    fn restore_logs_out_expired_token() {
        let store = MemoryStore::new();
        let persistence = SessionPersistence::new(Arc::new(store.clone()));
        persistence.save_session(&signed_in());
        persistence.save_token(&jwt(1_600_000_000));

        assert!(!persistence.restore(now()).is_authenticated());
        assert_eq!(store.get(TOKEN_KEY), None);
        assert!(!persistence.load_session().is_authenticated());
    }

    #[test]
    fn restore_logs_out_when_token_missing() {
        let persistence = SessionPersistence::new(Arc::new(MemoryStore::new()));
        persistence.save_session(&signed_in());
        assert!(!persistence.restore(now()).is_authenticated());
    }

    #[test]
    fn corrupt_blob_restores_as_guest() {
        let store = MemoryStore::new();
        store.set(PERSIST_ROOT_KEY, "{{{{");
        let persistence = SessionPersistence::new(Arc::new(store));
        assert_eq!(persistence.restore(now()), SessionState::default());
    }

    #[test]
    fn form_draft_roundtrip_and_blank_clears() {
        let store = MemoryStore::new();
        let persistence = SessionPersistence::new(Arc::new(store.clone()));
        let draft = NewProduction {
            product_type: "Uniform".into(),
            quantity: 40,
            notes: None,
        };
        persistence.save_form_draft(&draft);
        assert_eq!(persistence.load_form_draft(), draft);

        persistence.save_form_draft(&NewProduction::default());
        assert_eq!(store.get(FORM_STATE_KEY), None);
        assert!(persistence.load_form_draft().is_blank());
    }

    #[test]
    fn file_store_persists_across_instances() {
        let path = std::env::temp_dir().join(format!(
            "garment-dashboard-store-{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let first = FileStore::open(&path);
        first.set(TOKEN_KEY, "abc");
        first.set("other", "1");
        first.remove("other");

        let second = FileStore::open(&path);
        assert_eq!(second.get(TOKEN_KEY).as_deref(), Some("abc"));
        assert_eq!(second.get("other"), None);

        let _ = std::fs::remove_file(&path);
    }
}
