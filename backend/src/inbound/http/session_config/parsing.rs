//! Environment parsing helpers for session configuration.

use actix_web::cookie::SameSite;
use mockable::Env;
use tracing::warn;

use super::{BuildMode, SAMESITE_ENV, SessionConfigError};

const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const SAMESITE_EXPECTED: &str = "Strict|Lax|None";

/// Name and debug fallback of a boolean toggle.
pub(super) struct BoolEnvConfig {
    name: &'static str,
    default_value: bool,
}

impl BoolEnvConfig {
    pub(super) const fn new(name: &'static str, default_value: bool) -> Self {
        Self {
            name,
            default_value,
        }
    }
}

/// Read a boolean toggle, then let `validate` veto the parsed value.
pub(super) fn parse_bool_env<E: Env, F>(
    env: &E,
    mode: BuildMode,
    config: BoolEnvConfig,
    validate: F,
) -> Result<bool, SessionConfigError>
where
    F: FnOnce(bool, BuildMode) -> Result<bool, SessionConfigError>,
{
    let default_label = if config.default_value {
        "enabled"
    } else {
        "disabled"
    };
    let Some(value) = env.string(config.name) else {
        return debug_warn_or_error(
            mode,
            config.default_value,
            SessionConfigError::MissingEnv { name: config.name },
            || warn!("{} not set; defaulting to {}", config.name, default_label),
        );
    };

    match parse_bool(&value) {
        Some(flag) => validate(flag, mode),
        None => {
            let reported = value.clone();
            debug_warn_or_error(
                mode,
                config.default_value,
                SessionConfigError::InvalidEnv {
                    name: config.name,
                    value: reported,
                    expected: BOOL_EXPECTED,
                },
                || {
                    warn!(
                        value = %value,
                        "invalid {}; defaulting to {}",
                        config.name,
                        default_label
                    );
                },
            )
        }
    }
}

/// Debug builds warn and fall back; release builds fail.
pub(super) fn debug_warn_or_error<T, F>(
    mode: BuildMode,
    fallback: T,
    error: SessionConfigError,
    warn_fn: F,
) -> Result<T, SessionConfigError>
where
    F: FnOnce(),
{
    if mode.is_debug() {
        warn_fn();
        Ok(fallback)
    } else {
        Err(error)
    }
}

pub(super) fn parse_same_site_value(
    value: String,
    mode: BuildMode,
    cookie_secure: bool,
    default_same_site: SameSite,
) -> Result<SameSite, SessionConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "lax" => Ok(SameSite::Lax),
        "strict" => Ok(SameSite::Strict),
        "none" => {
            validate_same_site_none(mode, cookie_secure)?;
            Ok(SameSite::None)
        }
        _ => {
            let reported = value.clone();
            debug_warn_or_error(
                mode,
                default_same_site,
                SessionConfigError::InvalidEnv {
                    name: SAMESITE_ENV,
                    value: reported,
                    expected: SAMESITE_EXPECTED,
                },
                || warn!(value = %value, "invalid {SAMESITE_ENV}, using default"),
            )
        }
    }
}

fn validate_same_site_none(mode: BuildMode, cookie_secure: bool) -> Result<(), SessionConfigError> {
    if cookie_secure {
        return Ok(());
    }

    debug_warn_or_error(mode, (), SessionConfigError::InsecureSameSiteNone, || {
        warn!("SameSite=None without a secure cookie; browsers may reject the session cookie");
    })
}

pub(super) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}
