//! Citation resolution against the caller-supplied source lookup.

use std::collections::BTreeMap;

use grader_core::models::Block;

/// Citation id → source excerpt. May be empty.
pub type CitationLookup = BTreeMap<u32, String>;

/// Excerpts for the block's citations that the lookup knows about, in id order.
/// Unknown ids are skipped.
pub fn resolve<'a>(block: &Block, lookup: &'a CitationLookup) -> BTreeMap<u32, &'a str> {
    let Some(ids) = block.citations() else {
        return BTreeMap::new();
    };
    ids.iter()
        .filter_map(|id| lookup.get(id).map(|text| (*id, text.as_str())))
        .collect()
}

/// Citation section embedded in grading and correction prompts.
pub fn render(resolved: &BTreeMap<u32, &str>) -> String {
    if resolved.is_empty() {
        return "No citations provided".to_string();
    }
    let mut out = String::from("Citation Content:\n");
    for (id, text) in resolved {
        out.push_str(&format!("[{id}]: {text}\n"));
    }
    out
}
