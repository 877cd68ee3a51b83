//! Sandbox environment collection.
//!
//! Output order is fixed: allowlisted variables in allowlist order, then
//! `PATH`, then `HOME`, then lines from the supplementary env file.

use std::fs;
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::error::Error;
use crate::hostenv::HostEnv;
use crate::Result;

/// Build the `NAME=VALUE` list for the sandboxed process.
///
/// `env_file` is only consulted when the profile reads env files.
pub fn collect_env(
    config: &GeneratorConfig,
    host: &HostEnv,
    user: &str,
    env_file: Option<&Path>,
) -> Result<Vec<String>> {
    let mut env: Vec<String> = config
        .allowlist
        .iter()
        .filter_map(|name| host.get(name).map(|value| format!("{name}={value}")))
        .collect();

    tracing::debug!(
        passed = env.len(),
        allowlist = config.allowlist.len(),
        "filtered host environment"
    );

    env.push(format!("PATH={}", sandbox_path(config, host)));
    env.push(format!("HOME={}", home_dir(&config.home_prefix, user)));

    match env_file {
        Some(path) if config.profile.reads_env_file() => {
            let extra = read_env_file(path)?;
            tracing::debug!(path = %path.display(), count = extra.len(), "merged env file");
            env.extend(extra);
        }
        Some(path) => {
            tracing::warn!(path = %path.display(), profile = %config.profile, "ignoring env file");
        }
        None => {}
    }

    Ok(env)
}

/// Standard directories, then host `PATH` entries under the tool cache.
pub fn sandbox_path(config: &GeneratorConfig, host: &HostEnv) -> String {
    let mut dirs: Vec<&str> = config.standard_path.iter().map(String::as_str).collect();

    if config.profile.augments_path() {
        let cache = host.get(&config.tool_cache_var);
        if let (Some(cache), Some(host_path)) = (cache, host.get("PATH")) {
            dirs.extend(tool_cache_dirs(host_path, cache));
        }
    }

    dirs.join(":")
}

/// Entries of `host_path` rooted under `cache`, in their original order.
fn tool_cache_dirs<'a>(host_path: &'a str, cache: &'a str) -> impl Iterator<Item = &'a str> {
    host_path.split(':').filter(move |dir| dir.starts_with(cache))
}

fn home_dir(prefix: &str, user: &str) -> String {
    format!("{}/{user}", prefix.trim_end_matches('/'))
}

/// Read a supplementary env file.
pub fn read_env_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| Error::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_env_lines(&content))
}

/// Keep trimmed lines that are non-empty and contain `=`.
///
/// No quoting, escaping or duplicate detection.
pub fn parse_env_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.contains('='))
        .map(str::to_string)
        .collect()
}
