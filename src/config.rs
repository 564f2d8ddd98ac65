use crate::error::NotifyError;

pub const TOKEN_VAR: &str = "LINE_CHANNEL_ACCESS_TOKEN";
pub const USER_VAR: &str = "LINE_USER_ID";

/// Credentials for the LINE Messaging API push call.
#[derive(Debug, Clone)]
pub struct Config {
    /// Channel access token, sent as the bearer credential.
    pub access_token: String,
    /// Opaque LINE user id the notification is pushed to.
    pub user_id: String,
}

impl Config {
    /// Read both credentials through `lookup` — `main` passes
    /// `std::env::var` (after `load_env_files()` has run so dot-env values
    /// are visible); tests pass a closure over fixed pairs.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, NotifyError> {
        let access_token = require(&lookup, TOKEN_VAR)?;
        let user_id = require(&lookup, USER_VAR)?;
        Ok(Self {
            access_token,
            user_id,
        })
    }
}

/// An empty value counts as unset.
fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, NotifyError> {
    match lookup(name) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(NotifyError::MissingEnv(name)),
    }
}

/// Best-effort dot-env loading: `./.env` in the working directory first,
/// then `<config dir>/cursor-line-notify/env` for values still unset.
///
/// Hook processes start wherever cursor-agent was launched, so the per-user
/// fallback lets credentials live in one place. Neither file overrides
/// variables already present in the environment; a missing file is fine.
pub fn load_env_files() {
    let _ = dotenvy::dotenv();
    if let Some(path) = dirs::config_dir().map(|d| d.join("cursor-line-notify").join("env")) {
        let _ = dotenvy::from_path(&path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_of<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn both_credentials_present() {
        let cfg = Config::from_lookup(lookup_of(&[
            (TOKEN_VAR, "secret-token"),
            (USER_VAR, "U1234"),
        ]))
        .unwrap();
        assert_eq!(cfg.access_token, "secret-token");
        assert_eq!(cfg.user_id, "U1234");
    }

    #[test]
    fn missing_token_is_an_error() {
        let err = Config::from_lookup(lookup_of(&[(USER_VAR, "U1234")])).unwrap_err();
        assert!(matches!(err, NotifyError::MissingEnv(TOKEN_VAR)));
    }

    #[test]
    fn missing_user_id_is_an_error() {
        let err = Config::from_lookup(lookup_of(&[(TOKEN_VAR, "secret-token")])).unwrap_err();
        assert!(matches!(err, NotifyError::MissingEnv(USER_VAR)));
    }

    #[test]
    fn empty_value_counts_as_unset() {
        let err =
            Config::from_lookup(lookup_of(&[(TOKEN_VAR, ""), (USER_VAR, "U1234")])).unwrap_err();
        assert!(matches!(err, NotifyError::MissingEnv(TOKEN_VAR)));
    }

    #[test]
    fn env_file_fills_gaps_without_overriding_process_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env");
        std::fs::write(
            &path,
            "CLN_TEST_TOKEN=from-file\nCLN_TEST_FRESH=from-file\n",
        )
        .unwrap();

        // Var names are unique to this test, so parallel tests are unaffected.
        unsafe { std::env::set_var("CLN_TEST_TOKEN", "from-process") };

        // Same call `load_env_files` makes for both the cwd and the
        // config-dir file.
        dotenvy::from_path(&path).unwrap();

        assert_eq!(std::env::var("CLN_TEST_TOKEN").unwrap(), "from-process");
        assert_eq!(std::env::var("CLN_TEST_FRESH").unwrap(), "from-file");
    }
}
