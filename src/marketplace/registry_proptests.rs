use super::*;
use proptest::prelude::*;
use std::collections::BTreeMap;

/// プラグイン名 → source の組（名前は一意）
fn plugins_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-z][a-z0-9-]{0,15}", "[./a-zA-Z0-9_-]{1,24}", 1..8)
}

proptest! {
    /// 登録されたすべての組について、記録された source がそのまま返る
    #[test]
    fn prop_resolve_returns_recorded_path(
        plugins in plugins_strategy(),
        order in any::<prop::sample::Index>()
    ) {
        let mut references: Vec<PluginReference> = plugins
            .iter()
            .map(|(name, path)| PluginReference {
                name: name.clone(),
                version: None,
                source: PluginSource::Local(path.clone()),
                description: None,
            })
            .collect();
        let len = references.len();
        references.rotate_left(order.index(len));

        let mut registry = MarketplaceRegistry::new();
        registry
            .add(MarketplaceEntry::new("m", references.clone(), "/repo").unwrap())
            .unwrap();

        for (name, path) in &plugins {
            prop_assert_eq!(registry.resolve("m", name).unwrap(), path.as_str());
        }

        // list は宣言順のまま
        prop_assert_eq!(registry.list("m").unwrap(), references.as_slice());
    }

    /// 登録されていない名前は常に PluginNotFound
    #[test]
    fn prop_unknown_plugin_is_not_found(
        plugins in plugins_strategy(),
        unknown in "[a-z][a-z0-9-]{0,15}"
    ) {
        prop_assume!(!plugins.contains_key(&unknown));

        let references = plugins
            .iter()
            .map(|(name, path)| PluginReference {
                name: name.clone(),
                version: None,
                source: PluginSource::Local(path.clone()),
                description: None,
            })
            .collect();
        let mut registry = MarketplaceRegistry::new();
        registry
            .add(MarketplaceEntry::new("m", references, "/repo").unwrap())
            .unwrap();

        let err = registry.resolve("m", &unknown).unwrap_err();
        let is_plugin_not_found = matches!(err, CatalogError::PluginNotFound { .. });
        prop_assert!(is_plugin_not_found);
    }
}
