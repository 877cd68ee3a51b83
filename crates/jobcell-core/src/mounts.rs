//! Mount plan for the job container.
//!
//! The workspace bind comes first so the working tree is in place before
//! the virtual filesystems. Option strings and their order are reproduced
//! exactly; some runtimes treat them as ordered flags.
//!
//! | Destination | Type | Source |
//! |-------------|------|--------|
//! | workspace | bind | workspace |
//! | `/proc` | proc | proc |
//! | `/dev` | tmpfs | tmpfs |
//! | `/dev/pts` | devpts | devpts |
//! | `/dev/shm` | tmpfs | shm |
//! | `/sys` | sysfs | sysfs |
//! | `/tmp` | tmpfs | tmpfs |
//! | tool cache (if it exists) | bind, ro | tool cache |

use std::fs;

use crate::config::GeneratorConfig;
use crate::document::{MountEntry, MountKind};
use crate::hostenv::HostEnv;

/// Build the ordered mount list for `workspace`.
pub fn plan_mounts(config: &GeneratorConfig, host: &HostEnv, workspace: &str) -> Vec<MountEntry> {
    let mut mounts = base_mounts(workspace);

    if let Some(cache) = host.get(&config.tool_cache_var) {
        if is_dir(cache) {
            tracing::debug!(path = cache, "mounting tool cache read-only");
            mounts.push(MountEntry::rbind_ro(cache));
        } else {
            tracing::debug!(path = cache, "tool cache not a directory, skipping mount");
        }
    }

    mounts
}

fn base_mounts(workspace: &str) -> Vec<MountEntry> {
    vec![
        MountEntry::rbind_rw(workspace),
        MountEntry::new("/proc", MountKind::Proc, "proc"),
        MountEntry::new("/dev", MountKind::Tmpfs, "tmpfs").options([
            "nosuid",
            "strictatime",
            "mode=755",
            "size=65536k",
        ]),
        MountEntry::new("/dev/pts", MountKind::Devpts, "devpts").options([
            "nosuid",
            "noexec",
            "newinstance",
            "ptmxmode=0666",
            "mode=0620",
        ]),
        MountEntry::new("/dev/shm", MountKind::Tmpfs, "shm").options([
            "nosuid",
            "noexec",
            "nodev",
            "mode=1777",
            "size=65536k",
        ]),
        MountEntry::new("/sys", MountKind::Sysfs, "sysfs").options([
            "nosuid", "noexec", "nodev", "ro",
        ]),
        MountEntry::new("/tmp", MountKind::Tmpfs, "tmpfs").options([
            "nosuid",
            "nodev",
            "mode=1777",
        ]),
    ]
}

// Best effort: any stat failure counts as absent.
fn is_dir(path: &str) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_dir())
}
