//! テスト用モックファイルシステム

use super::*;
use crate::error::CatalogError;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// テスト用モックファイルシステム
///
/// ファイルを追加すると親ディレクトリは暗黙的に存在する扱いになる。
pub struct MockFs {
    entries: RwLock<BTreeMap<String, MockEntry>>,
}

enum MockEntry {
    File(Vec<u8>),
    Dir,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str, content: &str) {
        self.add_file_bytes(path, content.as_bytes());
    }

    /// バイナリファイルを追加
    pub fn add_file_bytes(&self, path: &str, content: &[u8]) {
        self.entries
            .write()
            .unwrap()
            .insert(path.to_string(), MockEntry::File(content.to_vec()));
    }

    /// 空ディレクトリを追加
    pub fn add_dir(&self, path: &str) {
        self.entries
            .write()
            .unwrap()
            .insert(path.to_string(), MockEntry::Dir);
    }

    fn key(path: &Path) -> String {
        path.to_string_lossy().trim_end_matches('/').to_string()
    }

    fn has_children(&self, key: &str) -> bool {
        let prefix = format!("{}/", key);
        self.entries
            .read()
            .unwrap()
            .keys()
            .any(|k| k.starts_with(&prefix))
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFs {
    fn is_dir(&self, path: &Path) -> bool {
        let key = Self::key(path);
        let explicit = matches!(
            self.entries.read().unwrap().get(&key),
            Some(MockEntry::Dir)
        );
        explicit || self.has_children(&key)
    }

    fn is_file(&self, path: &Path) -> bool {
        matches!(
            self.entries.read().unwrap().get(&Self::key(path)),
            Some(MockEntry::File(_))
        )
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let entries = self.entries.read().unwrap();
        match entries.get(&Self::key(path)) {
            Some(MockEntry::File(content)) => String::from_utf8(content.clone())
                .map_err(|e| io_error(std::io::ErrorKind::InvalidData, &e.to_string())),
            Some(MockEntry::Dir) => Err(io_error(std::io::ErrorKind::IsADirectory, "Is a directory")),
            None => Err(io_error(std::io::ErrorKind::NotFound, "not found")),
        }
    }

    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !self.is_dir(root) {
            return Err(io_error(std::io::ErrorKind::NotADirectory, "Not a directory"));
        }

        let prefix = format!("{}/", Self::key(root));
        let files = self
            .entries
            .read()
            .unwrap()
            .iter()
            .filter(|(k, v)| k.starts_with(&prefix) && matches!(v, MockEntry::File(_)))
            .map(|(k, _)| PathBuf::from(k))
            .collect();
        Ok(files)
    }
}

fn io_error(kind: std::io::ErrorKind, message: &str) -> CatalogError {
    CatalogError::Io(std::io::Error::new(kind, message.to_string()))
}
