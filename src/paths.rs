//! Path relativization for emitted directives

use std::path::Path;

/// Path of `target` relative to `root`, in canonical forward-slash form.
///
/// The root prefix is stripped exactly once; the result never starts with a
/// slash and never contains the host's native separator. If `target` is not
/// under `root` it is rendered as-is, component-joined with forward slashes.
pub fn relativize(root: &Path, target: &Path) -> String {
    let relative = target.strip_prefix(root).unwrap_or(target);

    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
