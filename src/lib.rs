//! Claude プラグインマーケットプレイスの読み取り専用カタログ
//!
//! ホストツールが marketplace.json からプラグインを解決し、
//! plugin.json とガイダンスドキュメントを読み込むためのライブラリ。
//!
//! ```no_run
//! use plugin_catalog::{MarketplaceRegistry, PackageLoader};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let registry = MarketplaceRegistry::load(root)?;
//! let dir = registry.package_dir("lxdb-plugins", "testing")?;
//!
//! let loader = PackageLoader::new();
//! let manifest = loader.load_manifest(&dir)?;
//! let skill = loader.read_document(&dir, "skills/testing/SKILL.md")?;
//! # let _ = (manifest, skill);
//! # Ok::<(), plugin_catalog::CatalogError>(())
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod fs;
pub mod marketplace;
pub mod plugin;
mod relative_path;

pub use check::{check, CheckReport, Finding, FindingKind, Severity};
pub use config::CatalogConfig;
pub use error::{CatalogError, ErrorCode, Result};
pub use fs::{FileSystem, RealFs};
pub use marketplace::{MarketplaceEntry, MarketplaceRegistry, PluginReference, PluginSource};
pub use plugin::{PackageLoader, PluginManifest, PluginPackage};
pub use relative_path::RelativePath;
