use std::collections::HashSet;

use crate::types::DgoodRow;

/// Project the owner out of every table row and drop duplicates, keeping
/// first-seen order so repeated runs log accounts in a stable order.
pub fn unique_owners(rows: &[DgoodRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut owners = Vec::new();
    for row in rows {
        if seen.insert(row.owner.as_str()) {
            owners.push(row.owner.clone());
        }
    }
    owners
}
