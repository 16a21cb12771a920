mod manifest;
mod manifest_resolve;
mod package;

pub(crate) use manifest_resolve::manifest_candidates;
pub use manifest::{Author, PluginManifest};
pub use manifest_resolve::has_manifest;
pub use package::{PackageLoader, PluginPackage};
