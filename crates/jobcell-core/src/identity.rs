//! Invoking user and host identity.

use nix::unistd::{gethostname, getgid, getuid};

use crate::config::GeneratorConfig;
use crate::document::UserIdentity;
use crate::error::Error;
use crate::hostenv::HostEnv;
use crate::Result;

/// Numeric ids and hostname copied into the sandbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostIdentity {
    pub uid: u32,
    pub gid: u32,
    pub hostname: String,
}

impl HostIdentity {
    pub fn new(uid: u32, gid: u32, hostname: impl Into<String>) -> Self {
        Self {
            uid,
            gid,
            hostname: hostname.into(),
        }
    }

    /// Read the real uid/gid and hostname of this process.
    ///
    /// A non-empty `config.hostname_override_var` replaces the hostname and
    /// skips the system lookup.
    pub fn probe(host: &HostEnv, config: &GeneratorConfig) -> Result<Self> {
        let hostname = match host.get(&config.hostname_override_var) {
            Some(name) => {
                tracing::debug!(hostname = name, "hostname overridden");
                name.to_string()
            }
            None => system_hostname()?,
        };

        Ok(Self {
            uid: getuid().as_raw(),
            gid: getgid().as_raw(),
            hostname,
        })
    }

    pub fn user(&self) -> UserIdentity {
        UserIdentity {
            uid: self.uid,
            gid: self.gid,
        }
    }
}

fn system_hostname() -> Result<String> {
    gethostname()
        .map_err(Error::Hostname)?
        .into_string()
        .map_err(|raw| Error::HostnameEncoding(raw.to_string_lossy().into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        let host = HostEnv::new().with("HOSTNAME_FOR_TEST", "ci-box");
        let identity = HostIdentity::probe(&host, &GeneratorConfig::default()).unwrap();
        assert_eq!(identity.hostname, "ci-box");
        assert_eq!(identity.uid, getuid().as_raw());
        assert_eq!(identity.gid, getgid().as_raw());
    }

    #[test]
    fn system_lookup() {
        assert!(HostIdentity::probe(&HostEnv::new(), &GeneratorConfig::default()).is_ok());
    }

    #[test]
    fn user_ids() {
        let identity = HostIdentity::new(1001, 118, "h");
        assert_eq!(identity.user(), UserIdentity { uid: 1001, gid: 118 });
    }
}
