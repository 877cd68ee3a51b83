//! Generator configuration.
//!
//! A `GeneratorConfig` holds every fixed input the generator consults:
//! the environment allowlist, the standard `PATH`, the entrypoint and the
//! names of the host variables it reads.
//!
//! ## Example
//!
//! ```ignore
//! use jobcell_core::{GeneratorConfig, Profile};
//!
//! let config = GeneratorConfig::new(Profile::Baseline)
//!     .allowlist(["USER", "CI"])
//!     .home_prefix("/home");
//! ```
//!
//! ## Defaults
//!
//! | Field | Default |
//! |-------|---------|
//! | `profile` | `Extended` |
//! | `allowlist` | [`DEFAULT_ALLOWLIST`] |
//! | `standard_path` | [`STANDARD_PATH`] |
//! | `home_prefix` | `/home` |
//! | `entrypoint` | `/bin/bash /entrypoint.sh` |
//! | `workspace_var` | `GITHUB_WORKSPACE` |
//! | `user_var` | `USER` |
//! | `tool_cache_var` | `RUNNER_TOOL_CACHE` |
//! | `hostname_override_var` | `HOSTNAME_FOR_TEST` |

use std::fmt;
use std::str::FromStr;

/// Variables passed from host to sandbox when set and non-empty, in output order.
pub const DEFAULT_ALLOWLIST: &[&str] = &[
    "USER",
    "TERM",
    "LANG",
    "LC_ALL",
    "LC_CTYPE",
    "TZ",
    "GITHUB_WORKSPACE",
    "GITHUB_ACTION",
    "GITHUB_ACTIONS",
    "GITHUB_ACTOR",
    "GITHUB_ACTOR_ID",
    "GITHUB_API_URL",
    "GITHUB_BASE_REF",
    "GITHUB_EVENT_NAME",
    "GITHUB_GRAPHQL_URL",
    "GITHUB_HEAD_REF",
    "GITHUB_JOB",
    "GITHUB_REF",
    "GITHUB_REF_NAME",
    "GITHUB_REF_PROTECTED",
    "GITHUB_REF_TYPE",
    "GITHUB_REPOSITORY",
    "GITHUB_REPOSITORY_ID",
    "GITHUB_REPOSITORY_OWNER",
    "GITHUB_REPOSITORY_OWNER_ID",
    "GITHUB_RETENTION_DAYS",
    "GITHUB_RUN_ATTEMPT",
    "GITHUB_RUN_ID",
    "GITHUB_RUN_NUMBER",
    "GITHUB_SERVER_URL",
    "GITHUB_SHA",
    "GITHUB_WORKFLOW",
    "GITHUB_WORKFLOW_REF",
    "GITHUB_WORKFLOW_SHA",
    "RUNNER_ARCH",
    "RUNNER_DEBUG",
    "RUNNER_NAME",
    "RUNNER_OS",
    "RUNNER_TOOL_CACHE",
    "CI",
    // workflow tests pin the hostname through this
    "HOSTNAME_FOR_TEST",
];

/// Directories every sandbox `PATH` starts with (Ubuntu layout).
pub const STANDARD_PATH: &[&str] = &[
    "/usr/local/sbin",
    "/usr/local/bin",
    "/usr/sbin",
    "/usr/bin",
    "/sbin",
    "/bin",
];

/// Which generator behaviours are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Tool-cache `PATH` augmentation and the supplementary env file. Default.
    #[default]
    Extended,
    /// Standard `PATH` only; a supplementary env file is ignored.
    Baseline,
}

impl Profile {
    pub fn augments_path(self) -> bool {
        matches!(self, Profile::Extended)
    }

    pub fn reads_env_file(self) -> bool {
        matches!(self, Profile::Extended)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Extended => "extended",
            Profile::Baseline => "baseline",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "extended" => Ok(Profile::Extended),
            "baseline" => Ok(Profile::Baseline),
            other => Err(format!("unknown profile: {other}")),
        }
    }
}

/// Fixed inputs for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub profile: Profile,
    pub allowlist: Vec<String>,
    pub standard_path: Vec<String>,
    pub home_prefix: String,
    pub entrypoint: Vec<String>,
    pub workspace_var: String,
    pub user_var: String,
    pub tool_cache_var: String,
    pub hostname_override_var: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            allowlist: to_strings(DEFAULT_ALLOWLIST),
            standard_path: to_strings(STANDARD_PATH),
            home_prefix: "/home".into(),
            entrypoint: vec!["/bin/bash".into(), "/entrypoint.sh".into()],
            workspace_var: "GITHUB_WORKSPACE".into(),
            user_var: "USER".into(),
            tool_cache_var: "RUNNER_TOOL_CACHE".into(),
            hostname_override_var: "HOSTNAME_FOR_TEST".into(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            ..Default::default()
        }
    }

    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Replace the allowlist. Output order follows iteration order.
    pub fn allowlist(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.allowlist = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn standard_path(mut self, dirs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.standard_path = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn home_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.home_prefix = prefix.into();
        self
    }

    pub fn entrypoint(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.entrypoint = args.into_iter().map(Into::into).collect();
        self
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
