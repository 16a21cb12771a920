use crate::error::{CatalogError, Result};
use crate::fs::FileSystem;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// プラグイン作者情報
///
/// 文字列（`"Jane <jane@example.com>"`）とオブジェクトの両方の形式を受け付ける。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Author {
    Name(String),
    Detailed {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        email: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
}

impl Author {
    /// 作者名
    pub fn name(&self) -> &str {
        match self {
            Author::Name(name) => name,
            Author::Detailed { name, .. } => name,
        }
    }
}

/// plugin.json のスキーマ
///
/// 必須なのは文字列の `name` のみ。それ以外は参考情報で、型が合わない値は
/// エラーにせず `None` として扱う。未知のフィールドは無視する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<Author>,
    #[serde(default, deserialize_with = "lenient")]
    pub homepage: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub repository: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub license: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub keywords: Option<Vec<String>>,
}

/// 型が一致しない値を `None` に落とすデシリアライザ
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

impl PluginManifest {
    /// JSONからパース
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// ファイルから読み込み
    ///
    /// パースできない場合、`name` がない場合、UTF-8 でない場合は ManifestMalformed。
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let content = fs.read_to_string(path).map_err(|e| match e {
            CatalogError::Io(io) if io.kind() == std::io::ErrorKind::InvalidData => {
                CatalogError::ManifestMalformed {
                    path: path.to_path_buf(),
                    reason: io.to_string(),
                }
            }
            other => other,
        })?;
        Self::parse(&content).map_err(|e| CatalogError::ManifestMalformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "manifest_test.rs"]
mod tests;
