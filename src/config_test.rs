use super::*;

#[test]
fn test_catalog_config_default() {
    let config = CatalogConfig::default();
    assert_eq!(
        config.registry_files(),
        [".claude-plugin/marketplace.json", "marketplace.json"]
    );
    assert_eq!(
        config.manifest_files(),
        [".claude-plugin/plugin.json", "plugin.json"]
    );
    assert_eq!(config.primary_documents()[0], "SKILL.md");
}

#[test]
fn test_catalog_config_builder() {
    let config = CatalogConfig::new()
        .with_manifest_files(["manifest.json"])
        .with_document_extensions([".MD", "rst"]);

    assert_eq!(config.manifest_files(), ["manifest.json"]);
    assert_eq!(config.document_extensions(), ["md", "rst"]);
    // 未指定の項目はデフォルトのまま
    assert_eq!(config.registry_files().len(), 2);
}

#[test]
fn test_is_document() {
    let config = CatalogConfig::default();
    assert!(config.is_document("SKILL.md"));
    assert!(config.is_document("notes.TXT"));
    assert!(config.is_document("guide.markdown"));
    assert!(!config.is_document("plugin.json"));
    assert!(!config.is_document("Makefile"));
}

#[test]
fn test_is_document_rejects_bare_extension() {
    // ".md" のような拡張子のみのファイル名はドキュメント扱いしない
    let config = CatalogConfig::default();
    assert!(!config.is_document(".md"));
}
