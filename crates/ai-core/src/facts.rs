use std::collections::BTreeMap;

/// A named fact in an agent's planning state.
///
/// The vocabulary is open-ended: it is whatever union of names the actions'
/// preconditions and effects use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Proposition(pub &'static str);

impl Proposition {
    pub fn name(self) -> &'static str {
        self.0
    }
}

/// Proposition -> value map used as planning world-state, goals, preconditions
/// and effects.
///
/// Ordered storage keeps iteration (and therefore planning) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldState {
    facts: BTreeMap<Proposition, i32>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, prop: Proposition, value: i32) -> Self {
        self.facts.insert(prop, value);
        self
    }

    pub fn set(&mut self, prop: Proposition, value: i32) {
        self.facts.insert(prop, value);
    }

    pub fn get(&self, prop: Proposition) -> Option<i32> {
        self.facts.get(&prop).copied()
    }

    pub fn remove(&mut self, prop: Proposition) -> Option<i32> {
        self.facts.remove(&prop)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Proposition, i32)> + '_ {
        self.facts.iter().map(|(p, v)| (*p, *v))
    }

    /// True when every entry of `required` is present here with the same value.
    ///
    /// An empty `required` set is always satisfied.
    pub fn satisfies(&self, required: &WorldState) -> bool {
        required
            .facts
            .iter()
            .all(|(prop, value)| self.facts.get(prop) == Some(value))
    }

    /// Overwrite entries with `effects`. Values replace, they never accumulate.
    pub fn apply(&mut self, effects: &WorldState) {
        for (prop, value) in effects.facts.iter() {
            self.facts.insert(*prop, *value);
        }
    }

    /// Copy of this state with `effects` applied; `self` is untouched.
    pub fn applied(&self, effects: &WorldState) -> WorldState {
        let mut next = self.clone();
        next.apply(effects);
        next
    }
}

impl FromIterator<(Proposition, i32)> for WorldState {
    fn from_iter<I: IntoIterator<Item = (Proposition, i32)>>(iter: I) -> Self {
        Self {
            facts: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(Proposition, i32); N]> for WorldState {
    fn from(entries: [(Proposition, i32); N]) -> Self {
        entries.into_iter().collect()
    }
}
