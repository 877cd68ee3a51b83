//! OCI runtime config document.
//!
//! Only the subset of the OCI runtime spec this generator emits. Field
//! declaration order is the JSON key order.

use serde::Serialize;

/// OCI runtime spec version written to `ociVersion`.
pub const OCI_VERSION: &str = "1.0.0";

/// Root of `config.json`: one process, one root filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    pub oci_version: String,
    pub process: ProcessSpec,
    pub root: RootSpec,
    pub hostname: String,
    pub mounts: Vec<MountEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linux: Option<LinuxSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSpec {
    pub terminal: bool,
    pub user: UserIdentity,
    pub args: Vec<String>,
    pub env: Vec<String>,
    pub cwd: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<CapabilitySet>,
    /// Left `false`: setuid executables inside the sandbox may gain privileges.
    pub no_new_privileges: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserIdentity {
    pub uid: u32,
    pub gid: u32,
}

/// Bounding, effective and permitted capabilities.
///
/// Ambient and inheritable sets are never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilitySet {
    pub bounding: Vec<String>,
    pub effective: Vec<String>,
    pub permitted: Vec<String>,
}

impl CapabilitySet {
    /// Same list for all three sets.
    pub fn uniform(caps: &[String]) -> Self {
        Self {
            bounding: caps.to_vec(),
            effective: caps.to_vec(),
            permitted: caps.to_vec(),
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.bounding == self.effective && self.effective == self.permitted
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootSpec {
    pub path: String,
    pub readonly: bool,
}

impl Default for RootSpec {
    fn default() -> Self {
        Self {
            path: "rootfs".into(),
            readonly: false,
        }
    }
}

/// One mount point. Option order is preserved as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountEntry {
    pub destination: String,
    #[serde(rename = "type")]
    pub kind: MountKind,
    pub source: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl MountEntry {
    pub fn new(destination: impl Into<String>, kind: MountKind, source: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            kind,
            source: source.into(),
            options: Vec::new(),
        }
    }

    /// Recursive bind of `path` onto itself, read-write.
    pub fn rbind_rw(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(path.clone(), MountKind::Bind, path).options(["rbind", "rw"])
    }

    /// Recursive bind of `path` onto itself, read-only.
    pub fn rbind_ro(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(path.clone(), MountKind::Bind, path).options(["rbind", "ro"])
    }

    pub fn options(mut self, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_read_only(&self) -> bool {
        self.options.iter().any(|o| o == "ro")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MountKind {
    Bind,
    Proc,
    Tmpfs,
    Devpts,
    Sysfs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinuxSpec {
    pub namespaces: Vec<Namespace>,
}

impl LinuxSpec {
    /// pid, mount, ipc and uts. No user or network namespace.
    pub fn isolated() -> Self {
        Self {
            namespaces: [
                NamespaceKind::Pid,
                NamespaceKind::Mount,
                NamespaceKind::Ipc,
                NamespaceKind::Uts,
            ]
            .into_iter()
            .map(|kind| Namespace { kind })
            .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Namespace {
    #[serde(rename = "type")]
    pub kind: NamespaceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceKind {
    Pid,
    Mount,
    Ipc,
    Uts,
}
