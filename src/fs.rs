//! ファイルシステム抽象化
//!
//! レジストリとプラグインパッケージの読み取りに使う読み取り専用の抽象化レイヤー。
//! テスト時に MockFs を注入してファイル操作をモック化できる。

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 読み取り専用のファイルシステム操作を抽象化するトレイト
///
/// 本番コードでは RealFs を使用する。
pub trait FileSystem: Send + Sync {
    /// ディレクトリかどうか（シンボリックリンク追従）
    fn is_dir(&self, path: &Path) -> bool;

    /// 通常ファイルかどうか（シンボリックリンク追従）
    fn is_file(&self, path: &Path) -> bool;

    /// ファイル内容を読み込み
    ///
    /// - 内容は変換せずそのまま返す
    /// - UTF-8 でない場合は Err
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// ディレクトリ配下のファイルを再帰的に列挙
    ///
    /// - ディレクトリ自体は含まない
    /// - 順序は未定義
    /// - シンボリックリンクは追従しない
    /// - 引数がディレクトリでない場合は Err
    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// 本番用ファイルシステム実装
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotADirectory,
                format!("Not a directory: {}", root.display()),
            )
            .into());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(false) {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "fs_test.rs"]
mod tests;
