//! Policy, rule and group counts for a saved backup
//!
//! This is a text scan, not a walk over the parsed tree. Each line is
//! lower-cased and split on whitespace; every token containing a marker counts
//! once for that marker. It depends on the one-pair-per-line layout of the
//! pretty-printed backup and can miscount when names or values happen to
//! contain a marker.

use std::fmt;

const POLICY_MARKER: &str = "childsecuritypolicy";
const RULE_MARKER: &str = "rule_id";
const GROUP_MARKER: &str = "childgroup";

/// Object counts found in a backup file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectCounts {
    pub policies: usize,
    pub rules: usize,
    pub groups: usize,
}

impl fmt::Display for ObjectCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Policy, {} Rules, {} Group",
            self.policies, self.rules, self.groups
        )
    }
}

/// Count marker tokens in raw backup text
pub fn count_objects(text: &str) -> ObjectCounts {
    let mut counts = ObjectCounts::default();

    for line in text.lines() {
        let line = line.to_lowercase();
        for token in line.split_whitespace() {
            if token.contains(POLICY_MARKER) {
                counts.policies += 1;
            }
            if token.contains(RULE_MARKER) {
                counts.rules += 1;
            }
            if token.contains(GROUP_MARKER) {
                counts.groups += 1;
            }
        }
    }

    counts
}
