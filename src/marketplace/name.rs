/// 名前の最大長
const MAX_NAME_LENGTH: usize = 64;

/// マーケットプレイス名・プラグイン名の検証
///
/// 解決時は完全一致で比較するため正規化はしない。
/// この関数はレジストリ検査でのみ使用する。
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(format!(
            "Name is too long (max {} characters)",
            MAX_NAME_LENGTH
        ));
    }

    // 使用可能文字: [a-z0-9._-]
    if let Some(c) = name
        .chars()
        .find(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit() && !matches!(c, '.' | '_' | '-'))
    {
        return Err(format!(
            "Invalid character '{}' in name. Only [a-z0-9._-] are allowed.",
            c
        ));
    }

    if name.starts_with(['.', '-']) {
        return Err("Name cannot start with a period or hyphen".to_string());
    }

    if name.ends_with(['.', '-']) {
        return Err("Name cannot end with a period or hyphen".to_string());
    }

    Ok(())
}
