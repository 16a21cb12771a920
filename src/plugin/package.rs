//! プラグインパッケージローダー
//!
//! パッケージディレクトリからマニフェストとコンテンツドキュメントを読み込む。
//! ドキュメントの内容は解釈せず、そのままホストに渡す。

use super::manifest::PluginManifest;
use super::manifest_resolve::resolve_manifest_path;
use crate::config::{CatalogConfig, MANIFEST_DIR};
use crate::error::{CatalogError, Result};
use crate::fs::{FileSystem, RealFs};
use crate::relative_path::RelativePath;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 読み込み済みのプラグインパッケージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginPackage {
    pub root: PathBuf,
    pub manifest: PluginManifest,
    /// パッケージルートからの相対パス（"/" 区切り、ソート済み）
    pub documents: Vec<String>,
    /// プライマリドキュメント（パッケージルートからの相対パス）
    pub primary: Option<String>,
}

impl PluginPackage {
    pub fn name(&self) -> &str {
        &self.manifest.name
    }

    /// プライマリ以外のドキュメント
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.documents
            .iter()
            .map(String::as_str)
            .filter(move |d| Some(*d) != self.primary.as_deref())
    }
}

/// プラグインパッケージローダー
pub struct PackageLoader {
    fs: Box<dyn FileSystem>,
    config: CatalogConfig,
}

impl Default for PackageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageLoader {
    /// 実ファイルシステムとデフォルト設定で作成
    pub fn new() -> Self {
        Self::with_fs(RealFs, CatalogConfig::default())
    }

    /// ファイルシステムと設定を指定して作成
    pub fn with_fs(fs: impl FileSystem + 'static, config: CatalogConfig) -> Self {
        Self {
            fs: Box::new(fs),
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub(crate) fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    /// マニフェストを読み込む
    ///
    /// - マニフェストファイルがない: ManifestMissing
    /// - パース不可、または `name` がない: ManifestMalformed
    pub fn load_manifest(&self, package_dir: &Path) -> Result<PluginManifest> {
        let path = resolve_manifest_path(self.fs(), package_dir, &self.config)
            .ok_or_else(|| CatalogError::ManifestMissing(package_dir.to_path_buf()))?;
        debug!(path = %path.display(), "loading plugin manifest");
        PluginManifest::load(self.fs(), &path)
    }

    /// ドキュメントを読み込む（内容は無変換）
    ///
    /// `name` はパッケージルートからの相対パス。ベース外を指す名前は InvalidPath。
    pub fn read_document(&self, package_dir: &Path, name: &str) -> Result<String> {
        let relative: RelativePath = name.parse()?;
        let path = relative.join_to(package_dir);
        if !self.fs.is_file(&path) {
            return Err(CatalogError::DocumentNotFound {
                package: package_dir.to_path_buf(),
                name: name.to_string(),
            });
        }
        debug!(path = %path.display(), "reading document");
        self.fs.read_to_string(&path)
    }

    /// パッケージ内のドキュメント一覧
    ///
    /// マニフェストディレクトリは除外する。"/" 区切りの相対パスでソートして返す。
    pub fn list_documents(&self, package_dir: &Path) -> Result<Vec<String>> {
        if !self.fs.is_dir(package_dir) {
            return Err(CatalogError::PackageNotFound(package_dir.to_path_buf()));
        }

        let mut documents: Vec<String> = self
            .fs
            .walk_files(package_dir)?
            .iter()
            .filter_map(|path| relative_name(package_dir, path))
            .filter(|name| {
                name.split('/').next() != Some(MANIFEST_DIR)
                    && name
                        .rsplit('/')
                        .next()
                        .is_some_and(|file| self.config.is_document(file))
            })
            .collect();
        documents.sort();
        Ok(documents)
    }

    /// プライマリドキュメントを探す
    ///
    /// 候補の `{name}` はプラグイン名に置換する。見つからなければ None。
    pub fn primary_document(&self, package_dir: &Path, manifest: &PluginManifest) -> Option<String> {
        self.config
            .primary_documents()
            .iter()
            .map(|candidate| candidate.replace("{name}", &manifest.name))
            .filter_map(|candidate| candidate.parse::<RelativePath>().ok())
            .find(|candidate| self.fs.is_file(&candidate.join_to(package_dir)))
            .map(|candidate| candidate.as_str().to_string())
    }

    /// パッケージ全体を読み込む
    pub fn load(&self, package_dir: &Path) -> Result<PluginPackage> {
        let manifest = self.load_manifest(package_dir)?;
        let documents = self.list_documents(package_dir)?;
        let primary = self.primary_document(package_dir, &manifest);
        debug!(
            plugin = %manifest.name,
            documents = documents.len(),
            primary = primary.as_deref().unwrap_or("-"),
            "loaded plugin package"
        );

        Ok(PluginPackage {
            root: package_dir.to_path_buf(),
            manifest,
            documents,
            primary,
        })
    }
}

/// ルートからの相対パスを "/" 区切りの文字列にする
fn relative_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
    Some(parts?.join("/"))
}

#[cfg(test)]
#[path = "package_test.rs"]
mod tests;

#[cfg(test)]
#[path = "package_proptests.rs"]
mod proptests;
