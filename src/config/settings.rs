//! Manager connection settings
//!
//! Built once from the command line and handed to the API client. Nothing
//! here is read from process-wide state after startup.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::DfwError;

/// Default manager username
pub const DEFAULT_USER: &str = "admin";

/// Placeholder password used when none is supplied. Operators should override it.
pub const DEFAULT_PASSWORD: &str = "Admin!23Admin";

/// Connection settings for one NSX Manager
#[derive(Clone)]
pub struct ManagerSettings {
    /// Manager hostname or IP, optionally with a port
    host: String,
    /// Basic auth username
    username: String,
    /// Basic auth password, wiped from memory on drop
    password: Zeroizing<String>,
}

impl ManagerSettings {
    /// Create settings for a manager
    ///
    /// # Errors
    ///
    /// Returns an error if the host is empty or carries a URL scheme.
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, DfwError> {
        let host = host.into().trim().trim_end_matches('/').to_string();
        if host.is_empty() {
            return Err(DfwError::Config("manager address must not be empty".into()));
        }
        if host.contains("://") {
            return Err(DfwError::Config(format!(
                "manager address must be a host name or IP, not a URL: {}",
                host
            )));
        }

        Ok(Self {
            host,
            username: username.into(),
            password: Zeroizing::new(password.into()),
        })
    }

    /// Manager host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Basic auth username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Basic auth password
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Whether the built-in placeholder password is in use
    pub fn uses_default_password(&self) -> bool {
        self.password.as_str() == DEFAULT_PASSWORD
    }

    /// Root URL of the manager (`https://<host>`)
    pub fn base_url(&self) -> String {
        format!("https://{}", self.host)
    }
}

// Keeps the password out of debug output and logs.
impl fmt::Debug for ManagerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagerSettings")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        let settings = ManagerSettings::new("10.110.57.244", DEFAULT_USER, "secret").unwrap();
        assert_eq!(settings.base_url(), "https://10.110.57.244");
        assert_eq!(settings.username(), "admin");
        assert_eq!(settings.password(), "secret");
    }

    #[test]
    fn test_host_is_trimmed() {
        let settings = ManagerSettings::new(" nsx.lab.local/ ", DEFAULT_USER, "x").unwrap();
        assert_eq!(settings.host(), "nsx.lab.local");
    }

    #[test]
    fn test_rejects_empty_or_url_host() {
        assert!(ManagerSettings::new("", DEFAULT_USER, "x").is_err());
        assert!(ManagerSettings::new("https://nsx", DEFAULT_USER, "x").is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let settings = ManagerSettings::new("nsx", DEFAULT_USER, "hunter2").unwrap();
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_default_password_detection() {
        let settings = ManagerSettings::new("nsx", DEFAULT_USER, DEFAULT_PASSWORD).unwrap();
        assert!(settings.uses_default_password());
    }
}
