use std::collections::{BTreeSet, HashMap, HashSet};

use crate::framework::Framework;
use crate::literal::Literal;

/// Detects cyclic rule dependencies in a framework's rule-dependency graph.
///
/// The graph has one node per literal in `L` and an edge `conclusion ->
/// premise` for every (rule, premise) pair, including premises that are
/// themselves assumptions (the non-circular rewrite, C3, is what removes the
/// non-assumption half of these edges; this analyzer reports on the
/// framework as given).
pub struct CircularityAnalyzer<'a> {
    graph: HashMap<&'a Literal, BTreeSet<&'a Literal>>,
}

impl<'a> CircularityAnalyzer<'a> {
    pub fn build(framework: &'a Framework) -> CircularityAnalyzer<'a> {
        let mut graph: HashMap<&Literal, BTreeSet<&Literal>> = HashMap::new();
        for literal in framework.language() {
            graph.entry(literal).or_default();
        }
        for rule in framework.rules() {
            let entry = graph.entry(&rule.conclusion).or_default();
            for premise in &rule.premises {
                entry.insert(premise);
            }
        }
        CircularityAnalyzer { graph }
    }

    /// Whether the framework is circular, i.e. has at least one elementary cycle.
    pub fn is_circular(&self) -> bool {
        !self.cycles().is_empty()
    }

    /// The deduplicated set of elementary cycles, each as a sorted literal tuple.
    ///
    /// Nodes are visited in sorted order and, within a DFS, neighbors are
    /// visited in sorted order, so the result is a deterministic function of
    /// the framework.
    pub fn cycles(&self) -> Vec<Vec<Literal>> {
        let mut nodes: Vec<&Literal> = self.graph.keys().copied().collect();
        nodes.sort();

        let mut cycles: Vec<Vec<Literal>> = vec![];
        let mut signatures: HashSet<Vec<Literal>> = HashSet::new();
        let mut globally_visited: HashSet<&Literal> = HashSet::new();

        for start in &nodes {
            if globally_visited.contains(start) {
                continue;
            }
            let mut path: Vec<&Literal> = vec![];
            let mut on_path: HashSet<&Literal> = HashSet::new();
            self.dfs(
                start,
                &mut path,
                &mut on_path,
                &mut globally_visited,
                &mut cycles,
                &mut signatures,
            );
        }

        cycles
    }

    fn dfs(
        &self,
        node: &'a Literal,
        path: &mut Vec<&'a Literal>,
        on_path: &mut HashSet<&'a Literal>,
        globally_visited: &mut HashSet<&'a Literal>,
        cycles: &mut Vec<Vec<Literal>>,
        signatures: &mut HashSet<Vec<Literal>>,
    ) {
        if on_path.contains(node) {
            let start = path.iter().position(|n| *n == node).unwrap();
            let mut signature: Vec<Literal> = path[start..].iter().map(|l| (*l).clone()).collect();
            signature.sort();
            if signatures.insert(signature.clone()) {
                cycles.push(signature);
            }
            return;
        }
        if globally_visited.contains(node) {
            return;
        }

        globally_visited.insert(node);
        path.push(node);
        on_path.insert(node);

        if let Some(neighbors) = self.graph.get(node) {
            for neighbor in neighbors {
                self.dfs(neighbor, path, on_path, globally_visited, cycles, signatures);
            }
        }

        path.pop();
        on_path.remove(node);
    }
}
