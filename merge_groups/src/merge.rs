//! Merging of token groups.
use parcor_union_find::{Error, Json, PolyUnionFind, Serializer};
use parcor_util::Count;
use serde_json::Value;

/// Compares tokens structurally, optionally ignoring the case of string tokens.
///
/// Only tokens that are JSON strings are lower-cased; strings nested in arrays or objects are
/// compared as is.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenKey {
    /// Lower-case string tokens before comparing them.
    pub ignore_case: bool,
}

impl Serializer<Value> for TokenKey {
    type Key = String;

    fn serialize(&self, value: &Value) -> Result<String, Error> {
        match value {
            Value::String(text) if self.ignore_case => {
                Ok(serde_json::to_string(&text.to_lowercase())?)
            }
            _ => Json.serialize(value),
        }
    }
}

/// Merges overlapping groups of tokens.
///
/// Returns the resulting groups with the representative first. Unless `singletons` is set, groups
/// consisting of a single token are omitted.
pub fn merge_groups(
    groups: Vec<Vec<Value>>,
    key: TokenKey,
    singletons: bool,
) -> Result<Vec<Vec<Value>>, Error> {
    if log::log_enabled!(log::Level::Debug) {
        let mut occurrences = Count::new();
        for token in groups.iter().flatten() {
            occurrences.inc(key.serialize(token)?);
        }
        let linking = occurrences.iter().filter(|&(_, count)| count > 1).count();
        log::debug!("{linking} tokens occur more than once in the input");
    }

    let mut union_find = PolyUnionFind::with_serializer(key);
    let mut empty = 0;
    for group in groups {
        if group.is_empty() {
            empty += 1;
            continue;
        }
        union_find.unions(group)?;
    }
    if empty > 0 {
        log::warn!("skipped {empty} empty input groups");
    }

    let merged = if singletons {
        union_find.partition()
    } else {
        union_find.groups()
    };
    log::info!(
        "merged {} tokens into {} groups",
        union_find.renumber().len(),
        merged.len()
    );
    Ok(merged)
}
