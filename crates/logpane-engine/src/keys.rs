use std::collections::HashMap;

/// Assigns render keys that stay unique within one render pass even when
/// several rows share a natural identifier (exact-duplicate lines before
/// dedup merges them).
///
/// The first occurrence of an identifier keys as the bare identifier;
/// the nth repeat keys as `{id}-{n}`. A fresh instance is required per
/// pass since row composition can change between passes.
#[derive(Debug, Default)]
pub struct UniqueKeyMaker {
    seen: HashMap<String, usize>,
}

impl UniqueKeyMaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_key(&mut self, uid: &str) -> String {
        let count = self.seen.entry(uid.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            uid.to_string()
        } else {
            format!("{}-{}", uid, *count - 1)
        }
    }
}
