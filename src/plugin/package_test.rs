use super::*;
use crate::fs::mock::MockFs;
use std::fs;
use tempfile::TempDir;

fn testing_package() -> MockFs {
    let fs = MockFs::new();
    fs.add_file(
        "/repo/plugins/testing/.claude-plugin/plugin.json",
        r#"{"name": "testing", "version": "1.0.0", "description": "Testing guidance"}"#,
    );
    fs.add_file(
        "/repo/plugins/testing/skills/testing/SKILL.md",
        "# Testing\n\nUse unit tests when...\n",
    );
    fs.add_file(
        "/repo/plugins/testing/skills/testing/references/integration.md",
        "# Integration tests\n",
    );
    fs.add_file(
        "/repo/plugins/testing/skills/testing/references/unit.md",
        "# Unit tests\n",
    );
    fs.add_file("/repo/plugins/testing/.claude-plugin/notes.md", "internal");
    fs.add_file("/repo/plugins/testing/scripts/run.sh", "#!/bin/sh\n");
    fs
}

fn loader(fs: MockFs) -> PackageLoader {
    PackageLoader::with_fs(fs, CatalogConfig::default())
}

const PKG: &str = "/repo/plugins/testing";

#[test]
fn test_load_manifest() {
    let loader = loader(testing_package());
    let manifest = loader.load_manifest(Path::new(PKG)).unwrap();
    assert_eq!(manifest.name, "testing");
    assert_eq!(manifest.version.as_deref(), Some("1.0.0"));
    assert_eq!(manifest.description.as_deref(), Some("Testing guidance"));
}

#[test]
fn test_load_manifest_missing() {
    let fs = MockFs::new();
    fs.add_file("/pkg/SKILL.md", "# Skill");
    let err = loader(fs).load_manifest(Path::new("/pkg")).unwrap_err();
    assert!(matches!(err, CatalogError::ManifestMissing(ref p) if p == Path::new("/pkg")));
}

#[test]
fn test_load_manifest_missing_directory() {
    let err = loader(MockFs::new())
        .load_manifest(Path::new("/nowhere"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::ManifestMissing(_)));
}

#[test]
fn test_load_manifest_without_name_is_malformed() {
    let fs = MockFs::new();
    fs.add_file("/pkg/plugin.json", r#"{"version": "1.0.0"}"#);
    let err = loader(fs).load_manifest(Path::new("/pkg")).unwrap_err();
    assert!(matches!(err, CatalogError::ManifestMalformed { .. }));
}

#[test]
fn test_load_manifest_uses_configured_candidates() {
    let fs = MockFs::new();
    fs.add_file("/pkg/manifest.json", r#"{"name": "custom"}"#);
    let loader = PackageLoader::with_fs(
        fs,
        CatalogConfig::new().with_manifest_files(["manifest.json"]),
    );
    assert_eq!(loader.load_manifest(Path::new("/pkg")).unwrap().name, "custom");
}

#[test]
fn test_read_document_verbatim() {
    let loader = loader(testing_package());
    let content = loader
        .read_document(Path::new(PKG), "skills/testing/SKILL.md")
        .unwrap();
    assert_eq!(content, "# Testing\n\nUse unit tests when...\n");
}

#[test]
fn test_read_document_not_found() {
    let loader = loader(testing_package());
    let err = loader
        .read_document(Path::new(PKG), "skills/testing/references/e2e.md")
        .unwrap_err();
    match err {
        CatalogError::DocumentNotFound { package, name } => {
            assert_eq!(package, Path::new(PKG));
            assert_eq!(name, "skills/testing/references/e2e.md");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_read_document_directory_is_not_a_document() {
    let loader = loader(testing_package());
    let err = loader
        .read_document(Path::new(PKG), "skills/testing")
        .unwrap_err();
    assert!(matches!(err, CatalogError::DocumentNotFound { .. }));
}

#[test]
fn test_read_document_rejects_escape() {
    let fs = testing_package();
    fs.add_file("/repo/secret.md", "secret");
    let loader = loader(fs);

    for name in ["../../secret.md", "/repo/secret.md", ""] {
        let err = loader.read_document(Path::new(PKG), name).unwrap_err();
        assert!(
            matches!(err, CatalogError::InvalidPath { .. }),
            "{name:?}: {err}"
        );
    }
}

#[test]
fn test_list_documents_sorted_and_filtered() {
    let loader = loader(testing_package());
    let documents = loader.list_documents(Path::new(PKG)).unwrap();
    assert_eq!(
        documents,
        vec![
            "skills/testing/SKILL.md",
            "skills/testing/references/integration.md",
            "skills/testing/references/unit.md",
        ]
    );
}

#[test]
fn test_list_documents_missing_package() {
    let err = loader(MockFs::new())
        .list_documents(Path::new("/nowhere"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::PackageNotFound(_)));
}

#[test]
fn test_primary_document_substitutes_plugin_name() {
    let loader = loader(testing_package());
    let manifest = loader.load_manifest(Path::new(PKG)).unwrap();
    assert_eq!(
        loader.primary_document(Path::new(PKG), &manifest).as_deref(),
        Some("skills/testing/SKILL.md")
    );
}

#[test]
fn test_primary_document_prefers_root_skill() {
    let fs = testing_package();
    fs.add_file("/repo/plugins/testing/SKILL.md", "# Root skill");
    let loader = loader(fs);
    let manifest = loader.load_manifest(Path::new(PKG)).unwrap();
    assert_eq!(
        loader.primary_document(Path::new(PKG), &manifest).as_deref(),
        Some("SKILL.md")
    );
}

#[test]
fn test_primary_document_absent() {
    let fs = MockFs::new();
    fs.add_file("/pkg/plugin.json", r#"{"name": "bare"}"#);
    fs.add_file("/pkg/docs/guide.md", "guide");
    let loader = loader(fs);
    let package = loader.load(Path::new("/pkg")).unwrap();
    assert!(package.primary.is_none());
    assert_eq!(package.documents, vec!["docs/guide.md"]);
}

#[test]
fn test_load_package() {
    let loader = loader(testing_package());
    let package = loader.load(Path::new(PKG)).unwrap();

    assert_eq!(package.name(), "testing");
    assert_eq!(package.root, Path::new(PKG));
    assert_eq!(package.primary.as_deref(), Some("skills/testing/SKILL.md"));
    assert_eq!(
        package.references().collect::<Vec<_>>(),
        vec![
            "skills/testing/references/integration.md",
            "skills/testing/references/unit.md",
        ]
    );
}

#[test]
fn test_real_fs_package_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let pkg = temp_dir.path().join("plugins/testing");
    fs::create_dir_all(pkg.join(".claude-plugin")).unwrap();
    fs::create_dir_all(pkg.join("references")).unwrap();
    fs::write(
        pkg.join(".claude-plugin/plugin.json"),
        r#"{"name": "testing", "version": "1.0.0"}"#,
    )
    .unwrap();
    fs::write(pkg.join("SKILL.md"), "line one\r\nline two  \n\n").unwrap();
    fs::write(pkg.join("references/unit.md"), "unit").unwrap();

    let loader = PackageLoader::new();
    let package = loader.load(&pkg).unwrap();
    assert_eq!(package.manifest.version.as_deref(), Some("1.0.0"));
    assert_eq!(package.documents, vec!["SKILL.md", "references/unit.md"]);
    assert_eq!(package.primary.as_deref(), Some("SKILL.md"));

    // 改行や末尾空白も含めてそのまま返る
    assert_eq!(
        loader.read_document(&pkg, "SKILL.md").unwrap(),
        "line one\r\nline two  \n\n"
    );
}

#[test]
fn test_real_fs_non_utf8_document() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bin.md"), [0xffu8, 0xfe]).unwrap();

    let err = PackageLoader::new()
        .read_document(temp_dir.path(), "bin.md")
        .unwrap_err();
    assert_eq!(err.code(), crate::error::ErrorCode::Io003);
}
