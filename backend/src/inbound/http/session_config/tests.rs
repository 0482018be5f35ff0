//! Unit tests for session configuration parsing.

use std::collections::HashMap;
use std::io::Write as _;

use super::*;
use mockable::MockEnv;
use rstest::{fixture, rstest};
use tempfile::NamedTempFile;

struct KeyFile(NamedTempFile);

impl KeyFile {
    fn with_len(len: usize) -> Self {
        let mut file = NamedTempFile::new().expect("temporary key file");
        file.write_all(&vec![b'k'; len]).expect("write key bytes");
        Self(file)
    }

    fn path(&self) -> String {
        self.0.path().to_string_lossy().into_owned()
    }
}

#[fixture]
fn key_file() -> KeyFile {
    KeyFile::with_len(SESSION_KEY_MIN_LEN)
}

fn mock_env(vars: HashMap<&'static str, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

fn release_vars(key_file: &KeyFile) -> HashMap<&'static str, String> {
    HashMap::from([
        (KEY_FILE_ENV, key_file.path()),
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Strict".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ])
}

fn release_error(vars: HashMap<&'static str, String>) -> SessionConfigError {
    match session_settings_from_env(&mock_env(vars), BuildMode::Release) {
        Ok(_) => panic!("release settings should be rejected"),
        Err(error) => error,
    }
}

#[rstest]
fn release_valid_settings_succeed(key_file: KeyFile) {
    let settings = session_settings_from_env(&mock_env(release_vars(&key_file)), BuildMode::Release)
        .expect("valid release settings");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Strict);
}

#[rstest]
#[case(COOKIE_SECURE_ENV)]
#[case(SAMESITE_ENV)]
#[case(ALLOW_EPHEMERAL_ENV)]
fn release_requires_every_toggle(key_file: KeyFile, #[case] missing: &'static str) {
    let mut vars = release_vars(&key_file);
    vars.remove(missing);
    let err = release_error(vars);
    assert!(matches!(err, SessionConfigError::MissingEnv { name } if name == missing));
}

#[rstest]
#[case(COOKIE_SECURE_ENV, "maybe")]
#[case(COOKIE_SECURE_ENV, "")]
#[case(SAMESITE_ENV, "sometimes")]
#[case(ALLOW_EPHEMERAL_ENV, "2")]
fn release_rejects_invalid_values(
    key_file: KeyFile,
    #[case] name: &'static str,
    #[case] value: &str,
) {
    let mut vars = release_vars(&key_file);
    vars.insert(name, value.to_owned());
    let err = release_error(vars);
    assert!(matches!(err, SessionConfigError::InvalidEnv { name: n, .. } if n == name));
}

#[rstest]
fn release_rejects_ephemeral_keys(key_file: KeyFile) {
    let mut vars = release_vars(&key_file);
    vars.insert(ALLOW_EPHEMERAL_ENV, "yes".to_owned());
    assert!(matches!(
        release_error(vars),
        SessionConfigError::EphemeralNotAllowed
    ));
}

#[rstest]
fn release_rejects_insecure_same_site_none(key_file: KeyFile) {
    let mut vars = release_vars(&key_file);
    vars.insert(COOKIE_SECURE_ENV, "0".to_owned());
    vars.insert(SAMESITE_ENV, "None".to_owned());
    assert!(matches!(
        release_error(vars),
        SessionConfigError::InsecureSameSiteNone
    ));
}

#[rstest]
fn release_accepts_secure_same_site_none(key_file: KeyFile) {
    let mut vars = release_vars(&key_file);
    vars.insert(SAMESITE_ENV, "none".to_owned());
    let settings = session_settings_from_env(&mock_env(vars), BuildMode::Release)
        .expect("secure SameSite=None is allowed");
    assert_eq!(settings.same_site, SameSite::None);
}

#[rstest]
fn release_rejects_missing_key_file(key_file: KeyFile) {
    let mut vars = release_vars(&key_file);
    vars.insert(KEY_FILE_ENV, "/nonexistent/bookstore/key".to_owned());
    assert!(matches!(
        release_error(vars),
        SessionConfigError::KeyRead { .. }
    ));
}

#[rstest]
fn release_rejects_short_key() {
    let short = KeyFile::with_len(32);
    let err = release_error(release_vars(&short));
    assert!(matches!(
        err,
        SessionConfigError::KeyTooShort { length: 32, min_len: 64, .. }
    ));
}

#[rstest]
fn debug_defaults_apply_without_environment() {
    let settings = session_settings_from_env(&mock_env(HashMap::new()), BuildMode::Debug)
        .expect("debug defaults");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
fn debug_invalid_values_fall_back(key_file: KeyFile) {
    let mut vars = release_vars(&key_file);
    vars.insert(SAMESITE_ENV, "unexpected".to_owned());
    vars.insert(COOKIE_SECURE_ENV, "perhaps".to_owned());
    let settings = session_settings_from_env(&mock_env(vars), BuildMode::Debug)
        .expect("debug falls back to defaults");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
fn debug_short_key_uses_temporary_key() {
    let short = KeyFile::with_len(8);
    let settings = session_settings_from_env(&mock_env(release_vars(&short)), BuildMode::Debug)
        .expect("debug tolerates short keys");
    assert_ne!(
        key_fingerprint(&settings.key),
        key_fingerprint(&Key::derive_from(&[b'k'; 64]))
    );
}

#[rstest]
fn same_key_file_yields_same_key(key_file: KeyFile) {
    let first = session_settings_from_env(&mock_env(release_vars(&key_file)), BuildMode::Release)
        .expect("first load");
    let second = session_settings_from_env(&mock_env(release_vars(&key_file)), BuildMode::Release)
        .expect("second load");
    assert_eq!(key_fingerprint(&first.key), key_fingerprint(&second.key));
}

#[rstest]
#[case("1", Some(true))]
#[case(" YES ", Some(true))]
#[case("n", Some(false))]
#[case("False", Some(false))]
#[case("on", None)]
fn parses_boolean_spellings(#[case] raw: &str, #[case] expected: Option<bool>) {
    assert_eq!(parsing::parse_bool(raw), expected);
}
