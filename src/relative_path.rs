//! 相対パス値オブジェクト
//!
//! marketplace.json の source とドキュメント名で使う、ベースディレクトリからの相対パス。

use crate::error::CatalogError;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

/// ベースディレクトリ内に留まることが保証された相対パス
///
/// # 不変条件
///
/// - 正規化済み（"./", ".", 末尾スラッシュなし、区切りは "/"）
/// - ベース外への参照なし（".." 禁止）
/// - 相対パスのみ（絶対パス、ドライブレター、UNC禁止）
/// - 空でない
///
/// # Examples
///
/// ```
/// use plugin_catalog::RelativePath;
///
/// let path: RelativePath = "./plugins/testing".parse().unwrap();
/// assert_eq!(path.as_str(), "plugins/testing");
///
/// assert!("../bad".parse::<RelativePath>().is_err());
/// assert!(".".parse::<RelativePath>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(String);

impl RelativePath {
    /// 正規化されたパス文字列を取得
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ベースディレクトリに結合
    pub fn join_to(&self, base: &Path) -> PathBuf {
        self.0.split('/').fold(base.to_path_buf(), |acc, part| acc.join(part))
    }

    /// ディレクトリ指定を検証してベースに結合
    ///
    /// ファイル名と違い、ベースそのもの（"./", "."）も許可する。
    pub fn join_dir(path: &str, base: &Path) -> Result<PathBuf, CatalogError> {
        let parts = normalize(path)?;
        Ok(parts.iter().fold(base.to_path_buf(), |acc, part| acc.join(part)))
    }
}

fn invalid(path: &str, reason: &str) -> CatalogError {
    CatalogError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

/// 区切りを "/" に揃え、"." を除いた構成要素を返す（空もあり得る）
fn normalize(s: &str) -> Result<Vec<String>, CatalogError> {
    // Windows 由来の区切り文字を正規化
    let path = s.replace('\\', "/");

    // ドライブレター（"C:xxx"）はどのプラットフォームでも拒否
    let mut chars = path.chars();
    if let (Some(first), Some(':')) = (chars.next(), chars.next()) {
        if first.is_ascii_alphabetic() {
            return Err(invalid(s, "must be relative (drive letters are not allowed)"));
        }
    }

    // UNC パス（正規化後は "//"）
    if path.starts_with("//") {
        return Err(invalid(s, "must be relative (UNC paths are not allowed)"));
    }

    let mut parts = Vec::new();
    for component in Path::new(&path).components() {
        match component {
            Component::Normal(part) => match part.to_str() {
                Some(part) => parts.push(part.to_string()),
                None => return Err(invalid(s, "contains non-UTF-8 characters")),
            },
            Component::ParentDir => return Err(invalid(s, "contains '..'")),
            Component::Prefix(_) | Component::RootDir => {
                return Err(invalid(s, "must be relative"));
            }
            Component::CurDir => {}
        }
    }
    Ok(parts)
}

impl FromStr for RelativePath {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = normalize(s)?;
        if parts.is_empty() {
            return Err(invalid(s, "must name an entry below its base directory"));
        }

        Ok(Self(parts.join("/")))
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[path = "relative_path_test.rs"]
mod tests;
