//! Runtime setup for the CLI: logging and argument normalization.

use std::ffi::OsString;

/// Flags also accepted with a single leading dash, e.g. `-filename x`
const LEGACY_LONG_FLAGS: &[&str] = &["filename"];

/// Initialize `env_logger` on stderr, `warn` unless `RUST_LOG` says otherwise.
///
/// Stdout carries the profile, so nothing is ever logged there.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    // A logger may already be installed when embedded; keep that one.
    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Rewrite single-dash long flags (`-filename`, `-filename=x`) to their
/// double-dash form so the argument parser accepts them.
pub fn normalize_legacy_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some(text) if is_legacy_long_flag(text) => OsString::from(format!("-{}", text)),
            _ => arg,
        })
        .collect()
}

fn is_legacy_long_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LEGACY_LONG_FLAGS.contains(&name)
}
