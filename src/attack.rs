use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::argument::{Argument, ArgumentId};
use crate::error::AbaError;
use crate::framework::{Framework, Preference};
use crate::literal::Literal;

/// Which of the three ABA+ attack definitions (§4.6) an [`Attack`] record
/// witnesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackKind {
    /// `C(a) = claim(X)` for some `a` in `Y`'s support, with no preference
    /// filtering applied. Retained only as a diagnostic; not part of the
    /// ABA+ attack relation itself.
    Standard,
    /// A standard attack that survives the preference filter: no assumption
    /// in the attacker's support is weaker than the assumption attacked.
    Normal,
    /// An attack in the opposite direction, licensed by a weak link in the
    /// defender's support.
    Reverse,
}

/// One witnessed attack between two arguments.
#[derive(Debug, Clone, Serialize)]
pub struct Attack {
    pub kind: AttackKind,
    pub attacker: ArgumentId,
    pub target: ArgumentId,
    /// The assumption in the target's (standard/normal) or attacker's
    /// (reverse) support that is contraried.
    pub via: Literal,
    /// For reverse attacks only: the witness in the defender's support that
    /// is weaker than `via`.
    pub weak_witness: Option<Literal>,
}

/// The three attack sets of §4.6, plus their union (the ABA+ attack
/// relation proper).
pub struct AttackSets {
    pub standard: Vec<Attack>,
    pub normal: Vec<Attack>,
    pub reverse: Vec<Attack>,
}

impl AttackSets {
    /// `Normal ∪ Reverse`, the ABA+ attack relation.
    pub fn aba_plus(&self) -> Vec<&Attack> {
        self.normal.iter().chain(self.reverse.iter()).collect()
    }
}

/// Computes the three attack sets over `arguments` (§4.6).
///
/// `cancelled` is polled once per outer (attacker) iteration; if set, the
/// computation stops and [`AbaError::Cancelled`] is returned.
pub fn compute_attacks(
    framework: &Framework,
    arguments: &[Argument],
    cancelled: &Arc<AtomicBool>,
) -> Result<AttackSets, AbaError> {
    let mut standard = vec![];
    let mut normal = vec![];
    let mut reverse = vec![];

    for (i, x) in arguments.iter().enumerate() {
        if cancelled.load(Ordering::SeqCst) {
            return Err(AbaError::Cancelled);
        }
        let attacker_id = ArgumentId(i);

        for (j, y) in arguments.iter().enumerate() {
            if i == j {
                continue;
            }
            let target_id = ArgumentId(j);

            for a in &y.support {
                if framework.raw_contrary(a) != Some(&x.claim) {
                    continue;
                }
                standard.push(Attack {
                    kind: AttackKind::Standard,
                    attacker: attacker_id,
                    target: target_id,
                    via: a.clone(),
                    weak_witness: None,
                });

                let attacker_is_weaker = x
                    .support
                    .iter()
                    .any(|xi| framework.prefer(xi, a) == Preference::Less);
                if !attacker_is_weaker {
                    normal.push(Attack {
                        kind: AttackKind::Normal,
                        attacker: attacker_id,
                        target: target_id,
                        via: a.clone(),
                        weak_witness: None,
                    });
                }
            }

            for x_assumption in &x.support {
                if framework.raw_contrary(x_assumption) != Some(&y.claim) {
                    continue;
                }
                let mut sorted_support = y.support.clone();
                sorted_support.sort();
                if let Some(weak) = sorted_support
                    .iter()
                    .find(|yp| framework.prefer(yp, x_assumption) == Preference::Less)
                {
                    reverse.push(Attack {
                        kind: AttackKind::Reverse,
                        attacker: attacker_id,
                        target: target_id,
                        via: x_assumption.clone(),
                        weak_witness: Some(weak.clone()),
                    });
                }
            }
        }
    }

    Ok(AttackSets {
        standard,
        normal,
        reverse,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;

    fn lit(s: &str) -> Literal {
        Literal::new(s)
    }

    fn no_cancel() -> Arc<AtomicBool> {
        Arc::new(AtomicBool::new(false))
    }

    #[test]
    fn test_standard_attack_is_detected() {
        let language: HashSet<Literal> = [lit("a"), lit("b"), lit("p")].into_iter().collect();
        let assumptions: HashSet<Literal> = [lit("a"), lit("b")].into_iter().collect();
        let contraries: HashMap<Literal, Literal> =
            [(lit("a"), lit("p")), (lit("b"), lit("p"))].into_iter().collect();
        let fw = Framework::new(language, assumptions, contraries, vec![], HashSet::new())
            .unwrap();
        let arguments = vec![Argument::base(lit("a")), Argument::base(lit("b"))];
        let sets = compute_attacks(&fw, &arguments, &no_cancel()).unwrap();
        // a's claim is a; no argument concludes p here, so no attacks at all:
        // a genuine attack needs contrary(support-member) == attacker's claim.
        assert!(sets.standard.is_empty());
    }

    #[test]
    fn test_normal_attack_filtered_by_preference() {
        // a attacks the argument whose support contains b, since C(b) = a's
        // claim... constructed directly instead via contrary(b) = a.
        let language: HashSet<Literal> = [lit("a"), lit("b")].into_iter().collect();
        let assumptions: HashSet<Literal> = [lit("a"), lit("b")].into_iter().collect();
        let contraries: HashMap<Literal, Literal> =
            [(lit("a"), lit("b")), (lit("b"), lit("a"))].into_iter().collect();
        let preferences: HashSet<(Literal, Literal)> =
            [(lit("b"), lit("a"))].into_iter().collect();
        let fw = Framework::new(language, assumptions, contraries, vec![], preferences)
            .unwrap();
        let arguments = vec![Argument::base(lit("a")), Argument::base(lit("b"))];
        let sets = compute_attacks(&fw, &arguments, &no_cancel()).unwrap();

        // X=a attacks Y=b (contrary(b)=a matches claim(X)=a): a is weaker
        // than b (b > a), so this standard attack is filtered from normal.
        assert!(sets
            .standard
            .iter()
            .any(|att| att.attacker == ArgumentId(0) && att.target == ArgumentId(1)));
        assert!(!sets
            .normal
            .iter()
            .any(|att| att.attacker == ArgumentId(0) && att.target == ArgumentId(1)));

        // X=b attacks Y=a (contrary(a)=b matches claim(X)=b): b is not
        // weaker than a, so this survives into normal.
        assert!(sets
            .normal
            .iter()
            .any(|att| att.attacker == ArgumentId(1) && att.target == ArgumentId(0)));
    }

    #[test]
    fn test_reverse_attack_witnessed_by_weak_assumption() {
        let language: HashSet<Literal> = [lit("a"), lit("b")].into_iter().collect();
        let assumptions: HashSet<Literal> = [lit("a"), lit("b")].into_iter().collect();
        let contraries: HashMap<Literal, Literal> =
            [(lit("a"), lit("b")), (lit("b"), lit("a"))].into_iter().collect();
        let preferences: HashSet<(Literal, Literal)> =
            [(lit("a"), lit("b"))].into_iter().collect();
        let fw = Framework::new(language, assumptions, contraries, vec![], preferences)
            .unwrap();
        let arguments = vec![Argument::base(lit("a")), Argument::base(lit("b"))];
        let sets = compute_attacks(&fw, &arguments, &no_cancel()).unwrap();

        // X=a, Y=b: C(a)=b matches claim(Y)=b, so Y standardly attacks X at
        // a. b < a (a > b), so a reverse attack X -> Y is recorded.
        assert!(sets.reverse.iter().any(|att| {
            att.attacker == ArgumentId(0) && att.target == ArgumentId(1) && att.via == lit("a")
        }));
    }

    #[test]
    fn test_self_attacks_excluded() {
        let language: HashSet<Literal> = [lit("a")].into_iter().collect();
        let assumptions: HashSet<Literal> = [lit("a")].into_iter().collect();
        let contraries: HashMap<Literal, Literal> = [(lit("a"), lit("a"))].into_iter().collect();
        let fw = Framework::new(language, assumptions, contraries, vec![], HashSet::new())
            .unwrap();
        let arguments = vec![Argument::base(lit("a"))];
        let sets = compute_attacks(&fw, &arguments, &no_cancel()).unwrap();
        assert!(sets.standard.is_empty());
        assert!(sets.normal.is_empty());
        assert!(sets.reverse.is_empty());
    }
}
