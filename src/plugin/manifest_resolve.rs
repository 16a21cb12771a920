//! マニフェストファイルのパス解決
//!
//! プラグインディレクトリ内の `plugin.json` の検索と解決を行う。

use crate::config::CatalogConfig;
use crate::fs::FileSystem;
use std::path::{Path, PathBuf};

/// プラグインディレクトリ内のマニフェストパスを解決する
///
/// 設定の候補順に検索する（デフォルト: `.claude-plugin/plugin.json` → `plugin.json`）。
/// 見つからない場合は None。
pub(crate) fn resolve_manifest_path(
    fs: &dyn FileSystem,
    plugin_dir: &Path,
    config: &CatalogConfig,
) -> Option<PathBuf> {
    manifest_candidates(fs, plugin_dir, config).into_iter().next()
}

/// 実在するマニフェスト候補をすべて返す（優先順）
///
/// 2件以上ある場合、パッケージのマニフェストは曖昧。
pub(crate) fn manifest_candidates(
    fs: &dyn FileSystem,
    plugin_dir: &Path,
    config: &CatalogConfig,
) -> Vec<PathBuf> {
    config
        .manifest_files()
        .iter()
        .map(|candidate| plugin_dir.join(candidate))
        .filter(|path| fs.is_file(path))
        .collect()
}

/// プラグインディレクトリがマニフェストを持つか確認する
pub fn has_manifest(fs: &dyn FileSystem, plugin_dir: &Path, config: &CatalogConfig) -> bool {
    resolve_manifest_path(fs, plugin_dir, config).is_some()
}
