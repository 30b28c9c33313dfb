use std::collections::HashSet;

use crate::GuildId;

/// Changes needed to bring a persisted guild list in line with live membership
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuildDelta {
    pub to_add: HashSet<GuildId>,
    pub to_remove: HashSet<GuildId>,
}

impl GuildDelta {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    /// Apply the delta to a persisted set in place
    pub fn apply(&self, persisted: &mut HashSet<GuildId>) {
        for id in &self.to_remove {
            persisted.remove(id);
        }
        persisted.extend(self.to_add.iter().copied());
    }
}

/// `to_add = live - persisted`, `to_remove = persisted - live`
pub fn reconcile(persisted: &HashSet<GuildId>, live: &HashSet<GuildId>) -> GuildDelta {
    GuildDelta {
        to_add: live.difference(persisted).copied().collect(),
        to_remove: persisted.difference(live).copied().collect(),
    }
}
