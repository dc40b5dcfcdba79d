use crate::shared::Result;
use crate::vex_generation::domain::ComponentId;
use std::collections::HashSet;

/// DependencyGraphCollector service for resolving reachable components
///
/// Breadth-first traversal over direct-dependency references, starting from
/// the project's own direct dependencies. The collector is a pure state
/// machine: callers read the current `frontier`, look up each frontier
/// component's direct dependencies (possibly concurrently), and feed them
/// back through `advance` in frontier order.
///
/// The persisted graph is expected to be acyclic but is not trusted to be.
/// A visited set keyed by component identity guarantees termination and
/// single visitation.
#[derive(Debug, Clone)]
pub struct DependencyGraphCollector {
    visited: HashSet<ComponentId>,
    reachable: Vec<ComponentId>,
    frontier: Vec<ComponentId>,
    depth: usize,
}

impl DependencyGraphCollector {
    /// Starts a traversal from the project's direct dependencies
    pub fn new(roots: &[ComponentId]) -> Self {
        let mut collector = Self {
            visited: HashSet::new(),
            reachable: Vec::new(),
            frontier: Vec::new(),
            depth: 0,
        };
        collector.frontier = collector.admit(roots.iter().copied());
        collector
    }

    /// Components whose direct dependencies must be looked up next
    pub fn frontier(&self) -> &[ComponentId] {
        &self.frontier
    }

    pub fn is_complete(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Number of completed breadth-first layers
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of distinct components discovered so far
    pub fn discovered_count(&self) -> usize {
        self.reachable.len()
    }

    /// Advances the traversal by one layer.
    ///
    /// `edges[i]` must hold the direct dependencies of `frontier()[i]`.
    ///
    /// # Errors
    /// Returns an error if the number of edge lists does not match the frontier
    pub fn advance(&mut self, edges: Vec<Vec<ComponentId>>) -> Result<()> {
        if edges.len() != self.frontier.len() {
            anyhow::bail!(
                "Dependency lookup returned {} edge list(s) for a frontier of {} component(s)",
                edges.len(),
                self.frontier.len()
            );
        }

        let next = self.admit(edges.into_iter().flatten());
        self.frontier = next;
        self.depth += 1;
        Ok(())
    }

    /// Finishes the traversal, returning reachable components in first-visit order
    pub fn into_reachable(self) -> Vec<ComponentId> {
        self.reachable
    }

    /// Runs a complete traversal against a synchronous lookup
    ///
    /// # Arguments
    /// * `roots` - The project's direct dependencies
    /// * `lookup` - Returns the direct dependencies of a component
    ///
    /// # Returns
    /// Deduplicated reachable components, direct and transitive
    pub fn collect<F>(roots: &[ComponentId], mut lookup: F) -> Result<Vec<ComponentId>>
    where
        F: FnMut(&ComponentId) -> Result<Vec<ComponentId>>,
    {
        let mut collector = Self::new(roots);
        while !collector.is_complete() {
            let edges = collector
                .frontier()
                .iter()
                .map(&mut lookup)
                .collect::<Result<Vec<_>>>()?;
            collector.advance(edges)?;
        }
        Ok(collector.into_reachable())
    }

    /// Marks unseen components as visited and returns them in encounter order
    fn admit(&mut self, candidates: impl IntoIterator<Item = ComponentId>) -> Vec<ComponentId> {
        let mut admitted = Vec::new();
        for candidate in candidates {
            if self.visited.insert(candidate) {
                self.reachable.push(candidate);
                admitted.push(candidate);
            } else {
                tracing::trace!(component = %candidate, "component already visited, skipping");
            }
        }
        admitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use uuid::Uuid;

    fn ids(n: usize) -> Vec<ComponentId> {
        (0..n).map(|_| ComponentId::new(Uuid::new_v4())).collect()
    }

    fn run(
        roots: &[ComponentId],
        graph: &HashMap<ComponentId, Vec<ComponentId>>,
    ) -> Vec<ComponentId> {
        DependencyGraphCollector::collect(roots, |id| {
            Ok(graph.get(id).cloned().unwrap_or_default())
        })
        .unwrap()
    }

    #[test]
    fn test_collect_direct_and_transitive() {
        let c = ids(3);
        let mut graph = HashMap::new();
        graph.insert(c[0], vec![c[1]]);
        graph.insert(c[1], vec![c[2]]);

        let reachable = run(&[c[0]], &graph);

        assert_eq!(reachable, vec![c[0], c[1], c[2]]);
    }

    #[test]
    fn test_collect_empty_roots() {
        let reachable = run(&[], &HashMap::new());
        assert!(reachable.is_empty());
    }

    #[test]
    fn test_collect_deduplicates_diamond() {
        // a -> b, a -> c, b -> d, c -> d
        let c = ids(4);
        let mut graph = HashMap::new();
        graph.insert(c[0], vec![c[1], c[2]]);
        graph.insert(c[1], vec![c[3]]);
        graph.insert(c[2], vec![c[3]]);

        let reachable = run(&[c[0]], &graph);

        assert_eq!(reachable, vec![c[0], c[1], c[2], c[3]]);
    }

    #[test]
    fn test_collect_terminates_on_cycle() {
        let c = ids(3);
        let mut graph = HashMap::new();
        graph.insert(c[0], vec![c[1]]);
        graph.insert(c[1], vec![c[2]]);
        graph.insert(c[2], vec![c[0]]);

        let reachable = run(&[c[0]], &graph);

        assert_eq!(reachable.len(), 3);
        let unique: HashSet<_> = reachable.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_collect_self_loop() {
        let c = ids(1);
        let mut graph = HashMap::new();
        graph.insert(c[0], vec![c[0]]);

        assert_eq!(run(&[c[0]], &graph), vec![c[0]]);
    }

    #[test]
    fn test_collect_duplicate_roots() {
        let c = ids(2);
        let reachable = run(&[c[0], c[1], c[0]], &HashMap::new());
        assert_eq!(reachable, vec![c[0], c[1]]);
    }

    #[test]
    fn test_breadth_first_order() {
        // roots a, b; a -> c; b -> d
        let c = ids(4);
        let mut graph = HashMap::new();
        graph.insert(c[0], vec![c[2]]);
        graph.insert(c[1], vec![c[3]]);

        let reachable = run(&[c[0], c[1]], &graph);

        assert_eq!(reachable, vec![c[0], c[1], c[2], c[3]]);
    }

    #[test]
    fn test_advance_rejects_mismatched_edges() {
        let c = ids(2);
        let mut collector = DependencyGraphCollector::new(&c);
        let result = collector.advance(vec![vec![]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_layer_by_layer_progress() {
        let c = ids(3);
        let mut collector = DependencyGraphCollector::new(&[c[0]]);
        assert_eq!(collector.frontier(), &[c[0]]);
        assert_eq!(collector.depth(), 0);

        collector.advance(vec![vec![c[1], c[2]]]).unwrap();
        assert_eq!(collector.frontier(), &[c[1], c[2]]);
        assert_eq!(collector.discovered_count(), 3);

        collector.advance(vec![vec![c[0]], vec![]]).unwrap();
        assert!(collector.is_complete());
        assert_eq!(collector.depth(), 2);
    }

    #[test]
    fn test_lookup_error_propagates() {
        let c = ids(1);
        let result = DependencyGraphCollector::collect(&c, |_| anyhow::bail!("datastore offline"));
        assert!(result.is_err());
    }
}
