//! Capability set granted to the job.
//!
//! One fixed list covers ownership and identity changes, raw sockets,
//! chroot and signalling. It is not configurable.

use crate::document::CapabilitySet;

pub const JOB_CAPABILITIES: &[&str] = &[
    "CAP_CHOWN",
    "CAP_DAC_OVERRIDE",
    "CAP_FSETID",
    "CAP_FOWNER",
    "CAP_MKNOD",
    "CAP_NET_RAW",
    "CAP_SETGID",
    "CAP_SETUID",
    "CAP_SETFCAP",
    "CAP_SETPCAP",
    "CAP_SYS_CHROOT",
    "CAP_KILL",
];

/// The job capability list as bounding, effective and permitted sets.
pub fn job_capabilities() -> CapabilitySet {
    let caps: Vec<String> = JOB_CAPABILITIES.iter().map(|c| (*c).to_string()).collect();
    CapabilitySet::uniform(&caps)
}
