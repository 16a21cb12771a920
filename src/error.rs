mod code;

pub use code::ErrorCode;

use std::path::PathBuf;
use thiserror::Error;

/// カタログ統一エラー型
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Marketplace not found: {0}")]
    MarketplaceNotFound(String),

    #[error("Plugin '{plugin}' not found in marketplace '{marketplace}'")]
    PluginNotFound { marketplace: String, plugin: String },

    #[error("Marketplace registry file not found under {}", .0.display())]
    RegistryNotFound(PathBuf),

    #[error("Invalid marketplace registry {}: {reason}", .path.display())]
    RegistryMalformed { path: PathBuf, reason: String },

    #[error("Marketplace '{0}' is already registered")]
    DuplicateMarketplace(String),

    #[error("Plugin '{plugin}' is declared more than once in marketplace '{marketplace}'")]
    DuplicatePlugin { marketplace: String, plugin: String },

    #[error("Plugin '{plugin}' in marketplace '{marketplace}' has an external source ({location}) with no local package")]
    ExternalSource {
        marketplace: String,
        plugin: String,
        location: String,
    },

    #[error("Plugin package directory not found: {}", .0.display())]
    PackageNotFound(PathBuf),

    #[error("Plugin manifest not found in {}", .0.display())]
    ManifestMissing(PathBuf),

    #[error("Invalid plugin manifest {}: {reason}", .path.display())]
    ManifestMalformed { path: PathBuf, reason: String },

    #[error("Document '{name}' not found in {}", .package.display())]
    DocumentNotFound { package: PathBuf, name: String },

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// 名前またはパスの解決に失敗したエラーかどうか
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::MarketplaceNotFound(_)
                | CatalogError::PluginNotFound { .. }
                | CatalogError::RegistryNotFound(_)
                | CatalogError::PackageNotFound(_)
        )
    }

    /// リトライ可能なエラーかどうか
    ///
    /// ローカルファイルの読み取りのみなので、一時的な失敗は存在しない。
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// エラーコードを取得
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::MarketplaceNotFound(_) => ErrorCode::Mkt001,
            CatalogError::RegistryNotFound(_) => ErrorCode::Mkt002,
            CatalogError::RegistryMalformed { .. } => ErrorCode::Mkt003,
            CatalogError::DuplicateMarketplace(_) => ErrorCode::Mkt004,
            CatalogError::PluginNotFound { .. } => ErrorCode::Plg001,
            CatalogError::ManifestMissing(_) => ErrorCode::Plg002,
            CatalogError::ManifestMalformed { .. } => ErrorCode::Plg003,
            CatalogError::DuplicatePlugin { .. } => ErrorCode::Plg004,
            CatalogError::PackageNotFound(_) => ErrorCode::Plg005,
            CatalogError::ExternalSource { .. } => ErrorCode::Plg006,
            CatalogError::DocumentNotFound { .. } => ErrorCode::Doc001,
            CatalogError::InvalidPath { .. } => ErrorCode::Val001,
            CatalogError::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::Io001,
                std::io::ErrorKind::PermissionDenied => ErrorCode::Io002,
                std::io::ErrorKind::InvalidData => ErrorCode::Io003,
                _ => ErrorCode::Io004,
            },
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
