//! カタログ設定
//!
//! レジストリ・マニフェスト・ドキュメントの探索ルールをまとめる。
//! 環境変数や設定ファイルは読まない。ホスト側で必要に応じて上書きする。

/// マーケットプレイス定義ファイルのパス候補（優先順）
pub const DEFAULT_REGISTRY_FILES: &[&str] = &[".claude-plugin/marketplace.json", "marketplace.json"];

/// プラグインマニフェストのパス候補（優先順）
pub const DEFAULT_MANIFEST_FILES: &[&str] = &[".claude-plugin/plugin.json", "plugin.json"];

/// プライマリドキュメントの候補（優先順）
///
/// `{name}` はマニフェストのプラグイン名に置換される。
pub const DEFAULT_PRIMARY_DOCUMENTS: &[&str] = &["SKILL.md", "skills/{name}/SKILL.md", "README.md"];

/// ドキュメントとして扱う拡張子
pub const DEFAULT_DOCUMENT_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

/// マニフェスト格納ディレクトリ（ドキュメント一覧からは除外）
pub const MANIFEST_DIR: &str = ".claude-plugin";

/// 探索ルール設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    registry_files: Vec<String>,
    manifest_files: Vec<String>,
    primary_documents: Vec<String>,
    document_extensions: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            registry_files: to_owned_list(DEFAULT_REGISTRY_FILES),
            manifest_files: to_owned_list(DEFAULT_MANIFEST_FILES),
            primary_documents: to_owned_list(DEFAULT_PRIMARY_DOCUMENTS),
            document_extensions: to_owned_list(DEFAULT_DOCUMENT_EXTENSIONS),
        }
    }
}

impl CatalogConfig {
    /// デフォルト設定を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// レジストリファイル候補を設定
    pub fn with_registry_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.registry_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// マニフェストファイル候補を設定
    pub fn with_manifest_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.manifest_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// プライマリドキュメント候補を設定
    pub fn with_primary_documents<I, S>(mut self, documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_documents = documents.into_iter().map(Into::into).collect();
        self
    }

    /// ドキュメント拡張子を設定（先頭の "." は取り除く）
    pub fn with_document_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.document_extensions = extensions
            .into_iter()
            .map(|e| e.into().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    pub fn registry_files(&self) -> &[String] {
        &self.registry_files
    }

    pub fn manifest_files(&self) -> &[String] {
        &self.manifest_files
    }

    pub fn primary_documents(&self) -> &[String] {
        &self.primary_documents
    }

    pub fn document_extensions(&self) -> &[String] {
        &self.document_extensions
    }

    /// ドキュメントとして扱うファイル名かどうか（拡張子は大文字小文字を区別しない）
    pub fn is_document(&self, file_name: &str) -> bool {
        match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => {
                let ext = ext.to_ascii_lowercase();
                self.document_extensions.iter().any(|e| *e == ext)
            }
            _ => false,
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
