//! Config document assembly.
//!
//! ## Example
//!
//! ```ignore
//! use jobcell_core::{Generator, GeneratorConfig, HostEnv, HostIdentity};
//!
//! let env = HostEnv::new()
//!     .with("GITHUB_WORKSPACE", "/work")
//!     .with("USER", "runner");
//! let identity = HostIdentity::new(1001, 118, "ci-box");
//!
//! let doc = Generator::new(GeneratorConfig::default()).generate(&env, &identity, None)?;
//! assert_eq!(doc.mounts.len(), 7);
//! ```

use std::path::Path;

use crate::capabilities::job_capabilities;
use crate::config::GeneratorConfig;
use crate::document::{ConfigDocument, LinuxSpec, ProcessSpec, RootSpec, OCI_VERSION};
use crate::env::collect_env;
use crate::error::Error;
use crate::hostenv::HostEnv;
use crate::identity::HostIdentity;
use crate::mounts::plan_mounts;
use crate::Result;

/// Builds a [`ConfigDocument`] from host state.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Workspace path and user name, or the first of them that is unset or empty.
    ///
    /// Callers run this before probing the host identity so a missing
    /// variable is reported ahead of any hostname lookup failure.
    pub fn check_required<'a>(&self, host: &'a HostEnv) -> Result<(&'a str, &'a str)> {
        let workspace = required(host, &self.config.workspace_var)?;
        let user = required(host, &self.config.user_var)?;
        Ok((workspace, user))
    }

    /// Assemble the document.
    ///
    /// Fails before reading the env file if the workspace or user variable
    /// is unset or empty.
    pub fn generate(
        &self,
        host: &HostEnv,
        identity: &HostIdentity,
        env_file: Option<&Path>,
    ) -> Result<ConfigDocument> {
        let (workspace, user) = self.check_required(host)?;

        tracing::debug!(
            profile = %self.config.profile,
            workspace,
            user,
            uid = identity.uid,
            gid = identity.gid,
            "generating config"
        );

        let env = collect_env(&self.config, host, user, env_file)?;
        let mounts = plan_mounts(&self.config, host, workspace);

        Ok(ConfigDocument {
            oci_version: OCI_VERSION.into(),
            process: ProcessSpec {
                terminal: false,
                user: identity.user(),
                args: self.config.entrypoint.clone(),
                env,
                cwd: workspace.into(),
                capabilities: Some(job_capabilities()),
                no_new_privileges: false,
            },
            root: RootSpec::default(),
            hostname: identity.hostname.clone(),
            mounts,
            linux: Some(LinuxSpec::isolated()),
        })
    }
}

fn required<'a>(host: &'a HostEnv, name: &str) -> Result<&'a str> {
    host.get(name).ok_or_else(|| Error::missing(name))
}
