use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealChange {
    NewlyRevealed,
    AlreadyRevealed,
    Ignored,
}

/// One-way visibility per section id. Ids are only ever added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealLatch {
    revealed: HashSet<String>,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, id: &str, is_intersecting: bool) -> RevealChange {
        if self.revealed.contains(id) {
            return RevealChange::AlreadyRevealed;
        }
        if !is_intersecting || id.is_empty() {
            return RevealChange::Ignored;
        }

        self.revealed.insert(id.to_string());
        RevealChange::NewlyRevealed
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

/// Staggered `transition-delay` for the nth item of a grid.
pub fn stagger_delay(index: usize) -> String {
    let tenths = u32::try_from(index).unwrap_or(u32::MAX);
    format!("{:.1}s", f64::from(tenths) * 0.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_intersection_latches_section() {
        let mut latch = RevealLatch::new();

        assert_eq!(latch.observe("about", false), RevealChange::Ignored);
        assert!(!latch.is_revealed("about"));
        assert_eq!(latch.observe("about", true), RevealChange::NewlyRevealed);
        assert!(latch.is_revealed("about"));
    }

    #[test]
    fn exit_after_reveal_keeps_visible() {
        let mut latch = RevealLatch::new();
        latch.observe("projects", true);

        assert_eq!(latch.observe("projects", false), RevealChange::AlreadyRevealed);
        assert_eq!(latch.observe("projects", true), RevealChange::AlreadyRevealed);
        assert!(latch.is_revealed("projects"));
        assert_eq!(latch.len(), 1);
    }

    #[test]
    fn sections_latch_independently() {
        let mut latch = RevealLatch::new();
        latch.observe("about", true);

        assert!(!latch.is_revealed("skills"));
        assert_eq!(latch.observe("", true), RevealChange::Ignored);
        assert_eq!(latch.len(), 1);
    }

    #[test]
    fn stagger_steps_by_a_tenth() {
        assert_eq!(stagger_delay(0), "0.0s");
        assert_eq!(stagger_delay(3), "0.3s");
        assert_eq!(stagger_delay(12), "1.2s");
    }
}
