use serde::Serialize;

use crate::argument::{Argument, ArgumentId};
use crate::attack::{Attack, AttackKind, AttackSets};
use crate::framework::Framework;
use crate::literal::Literal;
use crate::rewrite::{AtomicMetadata, NonCircularMetadata};

/// One entry of the `arguments` list in the report envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ArgumentView {
    pub id: usize,
    pub conclusion: Literal,
    pub support: Vec<Literal>,
}

impl From<(ArgumentId, &Argument)> for ArgumentView {
    fn from((id, arg): (ArgumentId, &Argument)) -> ArgumentView {
        ArgumentView {
            id: id.0,
            conclusion: arg.claim.clone(),
            support: arg.support.clone(),
        }
    }
}

/// Attack counts by kind, plus the size of the ABA+ attack relation proper.
#[derive(Debug, Clone, Serialize, Default)]
pub struct AttackCounts {
    pub standard: usize,
    pub normal: usize,
    pub reverse: usize,
    pub total_aba_plus: usize,
}

/// A single human-readable attack record in the `attack_details` list.
#[derive(Debug, Clone, Serialize)]
pub struct AttackDetail {
    pub description: String,
    pub from: usize,
    pub to: usize,
}

impl AttackDetail {
    fn from_attack(att: &Attack) -> AttackDetail {
        let description = match att.kind {
            AttackKind::Standard => {
                format!("argument {} attacks argument {} via {}", att.attacker.0, att.target.0, att.via)
            }
            AttackKind::Normal => format!(
                "argument {} normally attacks argument {} via {}",
                att.attacker.0, att.target.0, att.via
            ),
            AttackKind::Reverse => format!(
                "argument {} reverse-attacks argument {} via {} (weak: {})",
                att.attacker.0,
                att.target.0,
                att.via,
                att.weak_witness.as_ref().map(Literal::as_str).unwrap_or("?"),
            ),
        };
        AttackDetail {
            description,
            from: att.attacker.0,
            to: att.target.0,
        }
    }
}

/// A read-only summary of a framework's shape, used for `framework_info` and
/// `atomic_framework` in the envelope.
#[derive(Debug, Clone, Serialize)]
pub struct FrameworkView {
    pub language: Vec<Literal>,
    pub assumptions: Vec<Literal>,
    pub rules_count: usize,
    pub preferences_count: usize,
}

impl From<&Framework> for FrameworkView {
    fn from(fw: &Framework) -> FrameworkView {
        FrameworkView {
            language: fw.language().to_vec(),
            assumptions: fw.assumptions().to_vec(),
            rules_count: fw.rules().len(),
            preferences_count: fw.preferences().len(),
        }
    }
}

/// Metadata about whichever rewrite (if any) preceded derivation, reported
/// under `transformation_info`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind")]
pub enum TransformationInfo {
    NonCircular(NonCircularMetadata),
    Atomic(AtomicMetadata),
}

/// The structured result of a pipeline run (§6).
///
/// `success` is always `true` on a `Report` value: a failed run never
/// constructs one, surfacing an [`crate::error::AbaError`] instead (see the
/// CLI adapter, which renders the `{success: false, error}` envelope for
/// that case directly, without a `Report`).
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub success: bool,
    pub is_circular: bool,
    pub circular_dependencies: Vec<Vec<Literal>>,
    pub arguments: Vec<ArgumentView>,
    pub attacks: AttackCounts,
    pub attack_details: Vec<AttackDetail>,
    pub framework_info: FrameworkView,
    pub atomic_framework: Option<FrameworkView>,
    pub transformation_info: Vec<TransformationInfo>,
}

impl Report {
    /// Assembles a full report from a pipeline run's outputs.
    pub fn assemble(
        original: &Framework,
        is_circular: bool,
        circular_dependencies: Vec<Vec<Literal>>,
        atomic_framework: Option<&Framework>,
        transformation_info: Vec<TransformationInfo>,
        arguments: &[Argument],
        attack_sets: &AttackSets,
    ) -> Report {
        let attack_details = attack_sets
            .normal
            .iter()
            .chain(attack_sets.reverse.iter())
            .map(AttackDetail::from_attack)
            .collect();

        Report {
            success: true,
            is_circular,
            circular_dependencies,
            arguments: arguments
                .iter()
                .enumerate()
                .map(|(i, a)| ArgumentView::from((ArgumentId(i), a)))
                .collect(),
            attacks: AttackCounts {
                standard: attack_sets.standard.len(),
                normal: attack_sets.normal.len(),
                reverse: attack_sets.reverse.len(),
                total_aba_plus: attack_sets.normal.len() + attack_sets.reverse.len(),
            },
            attack_details,
            framework_info: FrameworkView::from(original),
            atomic_framework: atomic_framework.map(FrameworkView::from),
            transformation_info,
        }
    }

    /// A report for a framework found to be circular, with no derivation
    /// attempted (§6, `analyze`'s early-exit branch).
    pub fn circular_only(original: &Framework, circular_dependencies: Vec<Vec<Literal>>) -> Report {
        Report {
            success: true,
            is_circular: true,
            circular_dependencies,
            arguments: vec![],
            attacks: AttackCounts::default(),
            attack_details: vec![],
            framework_info: FrameworkView::from(original),
            atomic_framework: None,
            transformation_info: vec![],
        }
    }
}
