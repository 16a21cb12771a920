use serde::{Deserialize, Serialize};
use std::fmt;

/// マーケットプレイスオーナー情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceOwner {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// marketplace.json の metadata セクション
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// プラグインの取得元
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginSource {
    /// 相対パス: "./plugins/testing"（記録された文字列そのまま）
    Local(String),
    /// 外部: { "source": "github", "repo": "org/repo" } または { "source": "url", "url": "..." }
    External {
        source: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        repo: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
}

impl PluginSource {
    /// ローカルパスであればその文字列
    pub fn as_local(&self) -> Option<&str> {
        match self {
            PluginSource::Local(path) => Some(path),
            PluginSource::External { .. } => None,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, PluginSource::External { .. })
    }
}

impl fmt::Display for PluginSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginSource::Local(path) => f.write_str(path),
            PluginSource::External { source, repo, url } => {
                match repo.as_deref().or(url.as_deref()) {
                    Some(location) => write!(f, "{source}:{location}"),
                    None => f.write_str(source),
                }
            }
        }
    }
}

/// マーケットプレイス内のプラグインエントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginReference {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(alias = "path")]
    pub source: PluginSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// marketplace.json のスキーマ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceManifest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<MarketplaceOwner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MarketplaceMetadata>,
    #[serde(default)]
    pub plugins: Vec<PluginReference>,
}

impl MarketplaceManifest {
    /// JSONからパース
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// 説明文（トップレベル優先、なければ metadata）
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .or_else(|| self.metadata.as_ref()?.description.as_deref())
    }
}
