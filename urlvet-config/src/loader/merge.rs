/// Fold `overlay` into `base`.
///
/// Keys present on both sides recurse when both values are tables; every
/// other overlay value, arrays included, replaces what was there.
pub fn merge_toml_values(base: &mut toml::Value, overlay: &toml::Value) {
    if let (Some(target), Some(source)) = (base.as_table_mut(), overlay.as_table()) {
        for (key, incoming) in source {
            if let Some(existing) = target.get_mut(key) {
                merge_toml_values(existing, incoming);
            } else {
                target.insert(key.clone(), incoming.clone());
            }
        }
        return;
    }
    *base = overlay.clone();
}
