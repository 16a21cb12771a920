//! レジストリ検査
//!
//! マーケットプレイスの全プラグインについて、名前・パス・マニフェスト・バージョンを検査する。
//! 検査は失敗せず、見つかった問題をすべて CheckReport に記録する。

use crate::error::CatalogError;
use crate::marketplace::{validate_name, MarketplaceRegistry, PluginReference, PluginSource};
use crate::plugin::{manifest_candidates, PackageLoader};
use semver::Version;
use std::fmt;
use std::path::Path;
use tracing::{debug, error, warn};

/// 問題の重大度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// 問題の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    /// 名前が [a-z0-9._-] 規則に合わない
    InvalidName,
    /// source がベース外を指す
    InvalidPath,
    /// source が外部（GitHub など）でローカルに検査できない
    ExternalSource,
    /// パッケージディレクトリがない
    MissingPackage,
    ManifestMissing,
    ManifestMalformed,
    /// マニフェストが読めない（権限など）
    Unreadable,
    /// マニフェスト候補が複数ある
    AmbiguousManifest,
    /// マニフェストの name とレジストリの name が異なる
    NameMismatch,
    /// semver として解釈できないバージョン
    InvalidVersion,
    /// レジストリとマニフェストのバージョンが異なる
    VersionMismatch,
}

impl FindingKind {
    pub fn severity(&self) -> Severity {
        match self {
            FindingKind::ExternalSource
            | FindingKind::AmbiguousManifest
            | FindingKind::NameMismatch
            | FindingKind::InvalidVersion
            | FindingKind::VersionMismatch => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// 検出された問題
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub kind: FindingKind,
    pub marketplace: String,
    pub plugin: Option<String>,
    pub message: String,
}

impl Finding {
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity() {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        match &self.plugin {
            Some(plugin) => write!(f, "{level}: {}/{}: {}", self.marketplace, plugin, self.message),
            None => write!(f, "{level}: {}: {}", self.marketplace, self.message),
        }
    }
}

/// 検査結果
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    findings: Vec<Finding>,
}

impl CheckReport {
    /// エラーがなければ true（警告は許容）
    pub fn is_ok(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity() == Severity::Warning)
    }

    fn push(
        &mut self,
        kind: FindingKind,
        marketplace: &str,
        plugin: Option<&str>,
        message: impl Into<String>,
    ) {
        let finding = Finding {
            kind,
            marketplace: marketplace.to_string(),
            plugin: plugin.map(str::to_string),
            message: message.into(),
        };
        match finding.severity() {
            Severity::Error => error!("{}", finding),
            Severity::Warning => warn!("{}", finding),
        }
        self.findings.push(finding);
    }
}

/// レジストリ全体を検査する
pub fn check(registry: &MarketplaceRegistry, loader: &PackageLoader) -> CheckReport {
    let mut report = CheckReport::default();

    for marketplace_id in registry.marketplaces() {
        if let Err(reason) = validate_name(marketplace_id) {
            report.push(FindingKind::InvalidName, marketplace_id, None, reason);
        }

        let plugins = registry.list(marketplace_id).unwrap_or_default();
        for plugin in plugins {
            check_plugin(&mut report, registry, loader, marketplace_id, plugin);
        }
    }

    debug!(findings = report.findings.len(), "registry check finished");
    report
}

fn check_plugin(
    report: &mut CheckReport,
    registry: &MarketplaceRegistry,
    loader: &PackageLoader,
    marketplace: &str,
    plugin: &PluginReference,
) {
    let name = Some(plugin.name.as_str());

    if let Err(reason) = validate_name(&plugin.name) {
        report.push(FindingKind::InvalidName, marketplace, name, reason);
    }

    if let Some(version) = &plugin.version {
        if let Err(e) = Version::parse(version) {
            report.push(
                FindingKind::InvalidVersion,
                marketplace,
                name,
                format!("marketplace version '{}' is not semver: {}", version, e),
            );
        }
    }

    let path = match &plugin.source {
        PluginSource::Local(path) => path,
        external @ PluginSource::External { .. } => {
            report.push(
                FindingKind::ExternalSource,
                marketplace,
                name,
                format!("external source '{}' is not checked locally", external),
            );
            return;
        }
    };

    let package_dir = match registry.package_dir(marketplace, &plugin.name) {
        Ok(dir) => dir,
        Err(e) => {
            report.push(FindingKind::InvalidPath, marketplace, name, e.to_string());
            return;
        }
    };

    if !loader.fs().is_dir(&package_dir) {
        report.push(
            FindingKind::MissingPackage,
            marketplace,
            name,
            format!("package directory '{}' does not exist", path),
        );
        return;
    }

    check_manifest(report, loader, marketplace, plugin, &package_dir);
}

fn check_manifest(
    report: &mut CheckReport,
    loader: &PackageLoader,
    marketplace: &str,
    plugin: &PluginReference,
    package_dir: &Path,
) {
    let name = Some(plugin.name.as_str());

    let candidates = manifest_candidates(loader.fs(), package_dir, loader.config());
    if candidates.len() > 1 {
        let found: Vec<String> = candidates
            .iter()
            .filter_map(|p| p.strip_prefix(package_dir).ok())
            .map(|p| p.display().to_string())
            .collect();
        report.push(
            FindingKind::AmbiguousManifest,
            marketplace,
            name,
            format!("multiple manifests found ({}); using the first", found.join(", ")),
        );
    }

    let manifest = match loader.load_manifest(package_dir) {
        Ok(manifest) => manifest,
        Err(e) => {
            let kind = match e {
                CatalogError::ManifestMissing(_) => FindingKind::ManifestMissing,
                CatalogError::ManifestMalformed { .. } => FindingKind::ManifestMalformed,
                _ => FindingKind::Unreadable,
            };
            report.push(kind, marketplace, name, e.to_string());
            return;
        }
    };

    if manifest.name != plugin.name {
        report.push(
            FindingKind::NameMismatch,
            marketplace,
            name,
            format!("manifest declares name '{}'", manifest.name),
        );
    }

    let Some(manifest_version) = &manifest.version else {
        return;
    };

    if Version::parse(manifest_version).is_err() {
        report.push(
            FindingKind::InvalidVersion,
            marketplace,
            name,
            format!("manifest version '{}' is not semver", manifest_version),
        );
    }

    // 不一致は報告のみで、どちらを優先するかは決めない
    if let Some(declared) = &plugin.version {
        if !same_version(declared, manifest_version) {
            report.push(
                FindingKind::VersionMismatch,
                marketplace,
                name,
                format!(
                    "marketplace declares version {} but manifest has {}",
                    declared, manifest_version
                ),
            );
        }
    }
}

/// semver として比較し、解釈できなければ文字列で比較する
fn same_version(a: &str, b: &str) -> bool {
    match (Version::parse(a), Version::parse(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
#[path = "check_test.rs"]
mod tests;
