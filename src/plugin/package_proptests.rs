use super::*;
use crate::fs::mock::MockFs;
use proptest::prelude::*;
use tempfile::TempDir;

/// ドキュメント名に使えるパスセグメント
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_][a-zA-Z0-9_-]{0,11}".prop_map(|s| s)
}

proptest! {
    /// 書き込んだテキストがそのまま読み出される（実ファイルシステム）
    #[test]
    fn prop_read_document_is_verbatim_on_disk(content in any::<String>()) {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("doc.md"), &content).unwrap();

        let read = PackageLoader::new()
            .read_document(temp_dir.path(), "doc.md")
            .unwrap();
        prop_assert_eq!(read.as_bytes(), content.as_bytes());
    }

    /// ネストしたドキュメント名でも内容は変わらない
    #[test]
    fn prop_read_document_is_verbatim_nested(
        dirs in prop::collection::vec(segment_strategy(), 0..4),
        file in segment_strategy(),
        content in any::<String>()
    ) {
        let mut parts = dirs.clone();
        parts.push(format!("{}.md", file));
        let name = parts.join("/");

        let fs = MockFs::new();
        fs.add_file(&format!("/pkg/{}", name), &content);
        let loader = PackageLoader::with_fs(fs, CatalogConfig::default());

        prop_assert_eq!(loader.read_document(Path::new("/pkg"), &name).unwrap(), content);
        prop_assert_eq!(loader.list_documents(Path::new("/pkg")).unwrap(), vec![name]);
    }

    /// ".." を含む名前は常に拒否される
    #[test]
    fn prop_parent_segments_are_rejected(
        before in prop::collection::vec(segment_strategy(), 0..3),
        after in prop::collection::vec(segment_strategy(), 0..3)
    ) {
        let mut parts = before;
        parts.push("..".to_string());
        parts.extend(after);
        let name = parts.join("/");

        let loader = PackageLoader::with_fs(MockFs::new(), CatalogConfig::default());
        let err = loader.read_document(Path::new("/pkg"), &name).unwrap_err();
        let is_invalid_path = matches!(err, CatalogError::InvalidPath { .. });
        prop_assert!(is_invalid_path);
    }
}
