//! Tie-breaking among participants with equal coefficients.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::config::TieBreakRule;
use crate::models::Participant;

type Comparator = Arc<dyn Fn(&Participant, &Participant) -> Ordering + Send + Sync>;

/// How ties are broken after coefficients are compared.
///
/// `Seeded` uses per-participant keys drawn from the generator passed to
/// the allocator, so equal inputs and equal seeds give equal drafts.
#[derive(Clone, Default)]
pub enum TieBreaker {
    /// Random keys from the injected generator.
    #[default]
    Seeded,
    /// Participant ID, lexicographic.
    ById,
    /// Display name, then ID.
    ByName,
    /// Caller-supplied comparator (`Less` = picked first).
    Custom(Comparator),
}

impl TieBreaker {
    /// Wraps a comparator.
    pub fn custom<F>(compare: F) -> Self
    where
        F: Fn(&Participant, &Participant) -> Ordering + Send + Sync + 'static,
    {
        TieBreaker::Custom(Arc::new(compare))
    }

    /// Orders two tied participants given their random keys.
    pub fn compare(&self, a: &Participant, b: &Participant, key_a: u64, key_b: u64) -> Ordering {
        match self {
            TieBreaker::Seeded => key_a.cmp(&key_b),
            TieBreaker::ById => a.id.cmp(&b.id),
            TieBreaker::ByName => a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)),
            TieBreaker::Custom(f) => f(a, b),
        }
    }
}

impl From<TieBreakRule> for TieBreaker {
    fn from(rule: TieBreakRule) -> Self {
        match rule {
            TieBreakRule::Seeded => TieBreaker::Seeded,
            TieBreakRule::ById => TieBreaker::ById,
            TieBreakRule::ByName => TieBreaker::ByName,
        }
    }
}

impl std::fmt::Debug for TieBreaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TieBreaker::Seeded => f.write_str("Seeded"),
            TieBreaker::ById => f.write_str("ById"),
            TieBreaker::ByName => f.write_str("ByName"),
            TieBreaker::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_uses_keys() {
        let a = Participant::attacker("a");
        let b = Participant::attacker("b");
        assert_eq!(TieBreaker::Seeded.compare(&a, &b, 9, 3), Ordering::Greater);
        assert_eq!(TieBreaker::Seeded.compare(&a, &b, 1, 3), Ordering::Less);
    }

    #[test]
    fn test_by_id_and_name() {
        let a = Participant::attacker("z").with_name("Ana");
        let b = Participant::attacker("a").with_name("Beto");
        assert_eq!(TieBreaker::ById.compare(&a, &b, 0, 0), Ordering::Greater);
        assert_eq!(TieBreaker::ByName.compare(&a, &b, 0, 0), Ordering::Less);
    }

    #[test]
    fn test_custom() {
        let tb = TieBreaker::custom(|a, b| b.stats.wins.cmp(&a.stats.wins));
        let mut a = Participant::attacker("a");
        a.stats.wins = 5;
        let b = Participant::attacker("b");
        assert_eq!(tb.compare(&a, &b, 0, 0), Ordering::Less);
        assert_eq!(format!("{tb:?}"), "Custom(..)");
    }

    #[test]
    fn test_from_rule() {
        assert!(matches!(TieBreaker::from(TieBreakRule::ById), TieBreaker::ById));
        assert!(matches!(TieBreaker::from(TieBreakRule::Seeded), TieBreaker::Seeded));
    }
}
