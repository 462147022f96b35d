//! Session state: who is signed in, persisted across restarts.
//!
//! The session owns the current [`Identity`] and mirrors it to a JSON file
//! under the platform data directory. Login writes the file, logout removes
//! it, and startup re-hydrates from it. Storage writes are fire-and-forget:
//! a failed write is logged but never blocks the sign-in itself.

use std::fs;
use std::path::{Path, PathBuf};

use crate::auth::{AuthError, Authenticator, Identity};

/// File name of the persisted identity inside the data directory.
const SESSION_FILE: &str = "session.json";

/// Current user session.
pub struct Session {
    identity: Option<Identity>,
    storage_path: PathBuf,
}

impl Session {
    /// Create a session with no signed-in user.
    pub fn new(storage_path: PathBuf) -> Self {
        Self {
            identity: None,
            storage_path,
        }
    }

    /// Create a session, re-hydrating a previously persisted identity.
    ///
    /// A missing file means first launch; a corrupt file is logged and
    /// treated the same as missing.
    pub fn restore(storage_path: PathBuf) -> Self {
        let identity = load_identity(&storage_path);
        Self {
            identity,
            storage_path,
        }
    }

    /// Default session file path inside the given data directory.
    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join(SESSION_FILE)
    }

    /// Sign in through the given authenticator.
    ///
    /// On success the identity is stored in memory and mirrored to disk.
    pub fn login(
        &mut self,
        authenticator: &dyn Authenticator,
        email: &str,
        password: &str,
    ) -> Result<&Identity, AuthError> {
        let identity = authenticator.authenticate(email, password)?;
        tracing::info!("Signed in: {} ({})", identity.email, identity.role);

        if let Err(e) = persist_identity(&self.storage_path, &identity) {
            tracing::warn!("Failed to persist session: {}", e);
        }

        Ok(self.identity.insert(identity))
    }

    /// Sign out, clearing the in-memory identity and the persisted copy.
    pub fn logout(&mut self) {
        if let Some(identity) = self.identity.take() {
            tracing::info!("Signed out: {}", identity.email);
        }

        if self.storage_path.exists()
            && let Err(e) = fs::remove_file(&self.storage_path)
        {
            tracing::warn!("Failed to remove session file: {}", e);
        }
    }

    /// The signed-in identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// Load a persisted identity, returning `None` on first launch or corruption.
fn load_identity(path: &Path) -> Option<Identity> {
    if !path.exists() {
        tracing::info!("No session file at {:?} (first launch)", path);
        return None;
    }

    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read session file {:?}: {}", path, e);
            return None;
        }
    };

    match serde_json::from_str::<Identity>(&contents) {
        Ok(identity) => {
            tracing::info!("Restored session for {}", identity.email);
            Some(identity)
        }
        Err(e) => {
            tracing::warn!("Session file corrupted at {:?}: {}", path, e);
            None
        }
    }
}

/// Write the identity as JSON, creating the parent directory if needed.
fn persist_identity(path: &Path, identity: &Identity) -> crate::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(identity)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MockAuthenticator, Role};

    fn temp_session_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("influencer-desk-test-{}-{}.json", std::process::id(), name))
    }

    #[test]
    fn test_login_persists_and_restore_rehydrates() {
        let path = temp_session_path("roundtrip");
        let _ = fs::remove_file(&path);

        let mut session = Session::new(path.clone());
        session.login(&MockAuthenticator, "admin@example.com", "pw").unwrap();
        assert!(session.is_authenticated());

        let restored = Session::restore(path.clone());
        let identity = restored.identity().expect("identity restored");
        assert_eq!(identity.email, "admin@example.com");
        assert_eq!(identity.role, Role::Admin);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_logout_clears_identity_and_file() {
        let path = temp_session_path("logout");
        let _ = fs::remove_file(&path);

        let mut session = Session::new(path.clone());
        session.login(&MockAuthenticator, "alice@example.com", "pw").unwrap();
        assert!(path.exists());

        session.logout();
        assert!(!session.is_authenticated());
        assert!(!path.exists());
    }

    #[test]
    fn test_restore_missing_file_is_anonymous() {
        let path = temp_session_path("missing");
        let _ = fs::remove_file(&path);

        let session = Session::restore(path);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_restore_corrupt_file_is_anonymous() {
        let path = temp_session_path("corrupt");
        fs::write(&path, "not json at all").unwrap();

        let session = Session::restore(path.clone());
        assert!(!session.is_authenticated());

        let _ = fs::remove_file(&path);
    }
}
