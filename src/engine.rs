use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::attack::compute_attacks;
use crate::circularity::CircularityAnalyzer;
use crate::deriver::derive_arguments;
use crate::error::AbaError;
use crate::framework::Framework;
use crate::report::{Report, TransformationInfo};
use crate::rewrite::{atomize, non_circularize};

/// The three operation-surface entry points (§6).
///
/// Each takes ownership of a cancellation flag so a long-running request can
/// be aborted from another thread; a fresh [`Engine`] with a never-set flag
/// is the right default for one-shot CLI use (see [`Engine::new`]).
pub struct Engine {
    cancelled: Arc<AtomicBool>,
}

impl Engine {
    /// An engine with a cancellation flag that is never set.
    pub fn new() -> Engine {
        Engine {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// An engine sharing an externally-owned cancellation flag.
    pub fn with_cancellation(cancelled: Arc<AtomicBool>) -> Engine {
        Engine { cancelled }
    }

    /// Checks circularity first; if the framework is cyclic, returns only
    /// the circularity diagnosis (no derivation is attempted). Otherwise
    /// runs Atomize → Derive → Attacks.
    pub fn analyze(&self, framework: &Framework) -> Result<Report, AbaError> {
        let analyzer = CircularityAnalyzer::build(framework);
        let cycles = analyzer.cycles();
        if !cycles.is_empty() {
            return Ok(Report::circular_only(framework, cycles));
        }

        let (atomic, metadata) = atomize(framework);
        self.derive_and_attack(framework, &atomic, vec![TransformationInfo::Atomic(metadata)])
    }

    /// Forces Atomize → Derive → Attacks regardless of circularity.
    pub fn transform_atomic(&self, framework: &Framework) -> Result<Report, AbaError> {
        let (atomic, metadata) = atomize(framework);
        self.derive_and_attack(framework, &atomic, vec![TransformationInfo::Atomic(metadata)])
    }

    /// Runs NonCircularize → Atomize → Derive → Attacks.
    pub fn transform_non_circular(&self, framework: &Framework) -> Result<Report, AbaError> {
        let (unfolded, nc_metadata) = non_circularize(framework);
        let (atomic, atomic_metadata) = atomize(&unfolded);
        self.derive_and_attack(
            framework,
            &atomic,
            vec![
                TransformationInfo::NonCircular(nc_metadata),
                TransformationInfo::Atomic(atomic_metadata),
            ],
        )
    }

    fn derive_and_attack(
        &self,
        original: &Framework,
        atomic: &Framework,
        transformation_info: Vec<TransformationInfo>,
    ) -> Result<Report, AbaError> {
        let arguments = derive_arguments(atomic, &self.cancelled)?;
        let attack_sets = compute_attacks(atomic, &arguments, &self.cancelled)?;
        Ok(Report::assemble(
            original,
            false,
            vec![],
            Some(atomic),
            transformation_info,
            &arguments,
            &attack_sets,
        ))
    }
}

impl Default for Engine {
    fn default() -> Engine {
        Engine::new()
    }
}
