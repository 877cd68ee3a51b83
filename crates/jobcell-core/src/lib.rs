//! # jobcell-core
//!
//! Synthesizes an OCI runtime `config.json` that isolates a single CI job.
//!
//! The host state a job runs in (environment, user identity, hostname,
//! tool cache) is translated into one fixed configuration shape:
//!
//! - **Environment** - allowlisted variables, synthesized `PATH` and `HOME`,
//!   optional extra variables from a file
//! - **Mounts** - workspace bind, virtual filesystems, optional read-only tool cache
//! - **Capabilities** - one static list for bounding, effective and permitted
//! - **Namespaces** - pid, mount, ipc, uts
//!
//! ## Quick Start
//!
//! ```ignore
//! use jobcell_core::{Generator, GeneratorConfig, HostEnv, HostIdentity};
//!
//! let env = HostEnv::from_process();
//! let config = GeneratorConfig::default();
//! let identity = HostIdentity::probe(&env, &config)?;
//! let doc = Generator::new(config).generate(&env, &identity, None)?;
//! jobcell_core::output::write_document(&doc, std::io::stdout().lock())?;
//! ```

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assemble;
pub mod capabilities;
pub mod config;
pub mod document;
pub mod env;
pub mod error;
pub mod hostenv;
pub mod identity;
pub mod mounts;
pub mod output;

pub use assemble::Generator;
pub use config::{GeneratorConfig, Profile};
pub use document::{CapabilitySet, ConfigDocument, MountEntry, Namespace, ProcessSpec};
pub use error::Error;
pub use hostenv::HostEnv;
pub use identity::HostIdentity;

/// Crate-level result type
pub type Result<T> = std::result::Result<T, Error>;
