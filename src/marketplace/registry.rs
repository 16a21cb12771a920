use super::manifest::{MarketplaceManifest, MarketplaceOwner, PluginReference, PluginSource};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::fs::{FileSystem, RealFs};
use crate::relative_path::RelativePath;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// レジストリに登録されたマーケットプレイス
///
/// プラグインは marketplace.json の宣言順で保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketplaceEntry {
    id: String,
    owner: Option<MarketplaceOwner>,
    description: Option<String>,
    plugins: Vec<PluginReference>,
    /// source パスの基準ディレクトリ（リポジトリルート）
    root: PathBuf,
}

impl MarketplaceEntry {
    /// エントリを作成（プラグイン名の重複は Err）
    pub fn new(
        id: impl Into<String>,
        plugins: Vec<PluginReference>,
        root: impl Into<PathBuf>,
    ) -> Result<Self> {
        let id = id.into();
        let mut seen = HashSet::new();
        for plugin in &plugins {
            if !seen.insert(plugin.name.as_str()) {
                return Err(CatalogError::DuplicatePlugin {
                    marketplace: id,
                    plugin: plugin.name.clone(),
                });
            }
        }

        Ok(Self {
            id,
            owner: None,
            description: None,
            plugins,
            root: root.into(),
        })
    }

    /// marketplace.json の内容から作成
    pub fn from_manifest(manifest: MarketplaceManifest, root: impl Into<PathBuf>) -> Result<Self> {
        let description = manifest.description().map(str::to_string);
        let mut entry = Self::new(manifest.name, manifest.plugins, root)?;
        entry.owner = manifest.owner;
        entry.description = description;
        Ok(entry)
    }

    /// JSON文字列から作成
    pub fn from_json(content: &str, root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let manifest =
            MarketplaceManifest::parse(content).map_err(|e| CatalogError::RegistryMalformed {
                path: root.clone(),
                reason: e.to_string(),
            })?;
        Self::from_manifest(manifest, root)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn owner(&self) -> Option<&MarketplaceOwner> {
        self.owner.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// 宣言順のプラグイン一覧
    pub fn plugins(&self) -> &[PluginReference] {
        &self.plugins
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// プラグインを名前で検索（完全一致）
    pub fn find(&self, plugin_name: &str) -> Option<&PluginReference> {
        self.plugins.iter().find(|p| p.name == plugin_name)
    }
}

/// マーケットプレイスレジストリ
///
/// 起動時に一度だけ構築し、以降は読み取り専用で使う。
#[derive(Debug, Clone, Default)]
pub struct MarketplaceRegistry {
    marketplaces: Vec<MarketplaceEntry>,
}

impl MarketplaceRegistry {
    /// 空のレジストリを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// リポジトリルートの marketplace.json からレジストリを構築
    pub fn load(root: &Path) -> Result<Self> {
        Self::load_with(&RealFs, root, &CatalogConfig::default())
    }

    /// ファイルシステムと設定を指定して構築
    pub fn load_with(fs: &dyn FileSystem, root: &Path, config: &CatalogConfig) -> Result<Self> {
        let mut registry = Self::new();
        registry.add(load_marketplace(fs, root, config)?)?;
        Ok(registry)
    }

    /// マーケットプレイスを追加（ID の重複は Err）
    pub fn add(&mut self, entry: MarketplaceEntry) -> Result<()> {
        if self.marketplaces.iter().any(|m| m.id == entry.id) {
            return Err(CatalogError::DuplicateMarketplace(entry.id));
        }
        debug!(
            marketplace = %entry.id,
            plugins = entry.plugins.len(),
            "registered marketplace"
        );
        self.marketplaces.push(entry);
        Ok(())
    }

    /// 登録順のマーケットプレイスID
    pub fn marketplaces(&self) -> impl Iterator<Item = &str> {
        self.marketplaces.iter().map(|m| m.id.as_str())
    }

    /// マーケットプレイスを取得
    pub fn marketplace(&self, marketplace_id: &str) -> Result<&MarketplaceEntry> {
        self.marketplaces
            .iter()
            .find(|m| m.id == marketplace_id)
            .ok_or_else(|| CatalogError::MarketplaceNotFound(marketplace_id.to_string()))
    }

    /// プラグイン一覧（宣言順、ソートしない）
    pub fn list(&self, marketplace_id: &str) -> Result<&[PluginReference]> {
        Ok(self.marketplace(marketplace_id)?.plugins())
    }

    /// プラグインエントリを取得
    pub fn get(&self, marketplace_id: &str, plugin_name: &str) -> Result<&PluginReference> {
        self.marketplace(marketplace_id)?
            .find(plugin_name)
            .ok_or_else(|| CatalogError::PluginNotFound {
                marketplace: marketplace_id.to_string(),
                plugin: plugin_name.to_string(),
            })
    }

    /// プラグイン名をパッケージパスに解決
    ///
    /// 記録された source 文字列をそのまま返す。外部ソースは ExternalSource。
    pub fn resolve(&self, marketplace_id: &str, plugin_name: &str) -> Result<&str> {
        let plugin = self.get(marketplace_id, plugin_name)?;
        let path = local_source(marketplace_id, plugin)?;
        debug!(
            marketplace = marketplace_id,
            plugin = plugin_name,
            path,
            "resolved plugin"
        );
        Ok(path)
    }

    /// パッケージディレクトリの実パスを取得
    ///
    /// source がベース外を指す場合は InvalidPath。"./" はリポジトリルートそのもの。
    pub fn package_dir(&self, marketplace_id: &str, plugin_name: &str) -> Result<PathBuf> {
        let marketplace = self.marketplace(marketplace_id)?;
        let plugin = self.get(marketplace_id, plugin_name)?;
        let path = local_source(marketplace_id, plugin)?;
        RelativePath::join_dir(path, marketplace.root())
    }
}

fn local_source<'a>(marketplace_id: &str, plugin: &'a PluginReference) -> Result<&'a str> {
    match &plugin.source {
        PluginSource::Local(path) => Ok(path),
        external @ PluginSource::External { .. } => Err(CatalogError::ExternalSource {
            marketplace: marketplace_id.to_string(),
            plugin: plugin.name.clone(),
            location: external.to_string(),
        }),
    }
}

/// リポジトリルート内の marketplace.json を探す
fn resolve_registry_path(fs: &dyn FileSystem, root: &Path, config: &CatalogConfig) -> Option<PathBuf> {
    config
        .registry_files()
        .iter()
        .map(|candidate| root.join(candidate))
        .find(|path| fs.is_file(path))
}

/// リポジトリルートからマーケットプレイスを読み込む
pub fn load_marketplace(
    fs: &dyn FileSystem,
    root: &Path,
    config: &CatalogConfig,
) -> Result<MarketplaceEntry> {
    let path = resolve_registry_path(fs, root, config)
        .ok_or_else(|| CatalogError::RegistryNotFound(root.to_path_buf()))?;
    debug!(path = %path.display(), "loading marketplace registry");

    let content = fs.read_to_string(&path)?;
    let manifest =
        MarketplaceManifest::parse(&content).map_err(|e| CatalogError::RegistryMalformed {
            path: path.clone(),
            reason: e.to_string(),
        })?;
    MarketplaceEntry::from_manifest(manifest, root)
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

#[cfg(test)]
#[path = "registry_proptests.rs"]
mod proptests;
