//! Session cookie configuration from the environment.
//!
//! Debug builds fall back to permissive defaults and warn; release builds
//! insist on every toggle being set to a valid value and on a persistent key
//! of at least 64 bytes.
//!
//! | Variable | Meaning |
//! | --- | --- |
//! | `BOOKSTORE_SESSION_KEY_FILE` | path to the signing key material |
//! | `BOOKSTORE_SESSION_COOKIE_SECURE` | mark the cookie `Secure` |
//! | `BOOKSTORE_SESSION_SAMESITE` | `Strict`, `Lax` or `None` |
//! | `BOOKSTORE_SESSION_ALLOW_EPHEMERAL` | permit a generated key (debug only) |

use std::path::PathBuf;

use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite, time::Duration};
use mockable::Env;
use tracing::{info, warn};
use zeroize::Zeroize;

pub mod fingerprint;
mod parsing;

use fingerprint::key_fingerprint;
use parsing::{BoolEnvConfig, debug_warn_or_error, parse_bool_env, parse_same_site_value};

const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/bookstore_session_key";
const SESSION_KEY_MIN_LEN: usize = 64;
const SESSION_COOKIE_NAME: &str = "session";
const SESSION_TTL_HOURS: i64 = 2;
pub(crate) const COOKIE_SECURE_ENV: &str = "BOOKSTORE_SESSION_COOKIE_SECURE";
pub(crate) const SAMESITE_ENV: &str = "BOOKSTORE_SESSION_SAMESITE";
pub(crate) const ALLOW_EPHEMERAL_ENV: &str = "BOOKSTORE_SESSION_ALLOW_EPHEMERAL";
pub(crate) const KEY_FILE_ENV: &str = "BOOKSTORE_SESSION_KEY_FILE";

/// Build mode for session configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Tolerate defaults, warning about each one.
    Debug,
    /// Require explicit, valid settings.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bookstore::inbound::http::session_config::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// assert_eq!(mode == BuildMode::Debug, cfg!(debug_assertions));
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    pub(crate) fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Validated session cookie settings.
#[derive(Clone)]
pub struct SessionSettings {
    /// Signing and encryption key for cookie sessions.
    pub key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
    /// `SameSite` policy for session cookies.
    pub same_site: SameSite,
}

impl SessionSettings {
    /// Cookie session middleware: private (encrypted) content, `HttpOnly`,
    /// path `/`, two-hour persistent lifetime.
    #[must_use]
    pub fn middleware(&self) -> SessionMiddleware<CookieSessionStore> {
        SessionMiddleware::builder(CookieSessionStore::default(), self.key.clone())
            .cookie_name(SESSION_COOKIE_NAME.to_owned())
            .cookie_path("/".to_owned())
            .cookie_secure(self.cookie_secure)
            .cookie_http_only(true)
            .cookie_content_security(CookieContentSecurity::Private)
            .cookie_same_site(self.same_site)
            .session_lifecycle(
                PersistentSession::default().session_ttl(Duration::hours(SESSION_TTL_HOURS)),
            )
            .build()
    }
}

/// Errors raised while validating session configuration.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// Reading the session key file failed.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The key file is too short for release builds.
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    /// `SameSite=None` without a secure cookie in a release build.
    #[error("BOOKSTORE_SESSION_SAMESITE=None requires BOOKSTORE_SESSION_COOKIE_SECURE=1")]
    InsecureSameSiteNone,
    /// Ephemeral keys requested in a release build.
    #[error("BOOKSTORE_SESSION_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

/// Build session settings from environment variables and build mode.
///
/// Logs a fingerprint of the active key so operators can tell keys apart
/// without exposing them.
///
/// # Errors
///
/// Returns [`SessionConfigError`] when a release build is misconfigured.
///
/// # Examples
///
/// ```rust
/// use bookstore::inbound::http::session_config::{BuildMode, session_settings_from_env};
/// use mockable::MockEnv;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let key_file = tempfile::NamedTempFile::new()?;
/// std::fs::write(key_file.path(), vec![b'a'; 64])?;
/// let key_path = key_file.path().to_string_lossy().into_owned();
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(move |name| match name {
///     "BOOKSTORE_SESSION_KEY_FILE" => Some(key_path.clone()),
///     "BOOKSTORE_SESSION_COOKIE_SECURE" => Some("1".to_owned()),
///     "BOOKSTORE_SESSION_SAMESITE" => Some("Strict".to_owned()),
///     "BOOKSTORE_SESSION_ALLOW_EPHEMERAL" => Some("0".to_owned()),
///     _ => None,
/// });
///
/// let settings = session_settings_from_env(&env, BuildMode::Release)?;
/// assert!(settings.cookie_secure);
/// # Ok(())
/// # }
/// ```
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let cookie_secure = parse_bool_env(
        env,
        mode,
        BoolEnvConfig::new(COOKIE_SECURE_ENV, true),
        |flag, _| Ok(flag),
    )?;
    let same_site = same_site_from_env(env, mode, cookie_secure)?;
    let allow_ephemeral = parse_bool_env(
        env,
        mode,
        BoolEnvConfig::new(ALLOW_EPHEMERAL_ENV, false),
        |flag, mode| {
            if flag && !mode.is_debug() {
                Err(SessionConfigError::EphemeralNotAllowed)
            } else {
                Ok(flag)
            }
        },
    )?;
    let key = session_key_from_env(env, mode, allow_ephemeral)?;
    info!(
        fingerprint = %key_fingerprint(&key),
        cookie_secure,
        same_site = ?same_site,
        "session key loaded"
    );

    Ok(SessionSettings {
        key,
        cookie_secure,
        same_site,
    })
}

fn same_site_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
    cookie_secure: bool,
) -> Result<SameSite, SessionConfigError> {
    let default_same_site = if mode.is_debug() {
        SameSite::Lax
    } else {
        SameSite::Strict
    };

    match env.string(SAMESITE_ENV) {
        Some(value) => parse_same_site_value(value, mode, cookie_secure, default_same_site),
        None => debug_warn_or_error(
            mode,
            default_same_site,
            SessionConfigError::MissingEnv { name: SAMESITE_ENV },
            || warn!("{SAMESITE_ENV} not set; using default"),
        ),
    }
}

fn session_key_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
    allow_ephemeral: bool,
) -> Result<Key, SessionConfigError> {
    let path = PathBuf::from(
        env.string(KEY_FILE_ENV)
            .unwrap_or_else(|| SESSION_KEY_DEFAULT_PATH.to_owned()),
    );

    match std::fs::read(&path) {
        Ok(mut bytes) if bytes.len() < SESSION_KEY_MIN_LEN => {
            let length = bytes.len();
            bytes.zeroize();
            debug_warn_or_error(
                mode,
                Key::generate(),
                SessionConfigError::KeyTooShort {
                    path: path.clone(),
                    length,
                    min_len: SESSION_KEY_MIN_LEN,
                },
                || {
                    warn!(
                        path = %path.display(),
                        length,
                        "session key too short; using temporary key (dev only)"
                    );
                },
            )
        }
        Ok(mut bytes) => {
            let key = Key::derive_from(&bytes);
            bytes.zeroize();
            Ok(key)
        }
        Err(error) if mode.is_debug() || allow_ephemeral => {
            warn!(
                path = %path.display(),
                error = %error,
                "using temporary session key (dev only)"
            );
            Ok(Key::generate())
        }
        Err(error) => Err(SessionConfigError::KeyRead {
            path,
            source: error,
        }),
    }
}

#[cfg(test)]
mod tests;
