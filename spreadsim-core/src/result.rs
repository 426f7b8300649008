//! Result types for SI diffusion runs.
//!
//! A [`SimulationResult`] is produced once per run and never mutated
//! afterwards. It carries the per-round infection history alongside the
//! derived reach, stall, and half-saturation metrics.

use std::collections::HashSet;
use std::hash::Hash;

/// Outcome of a single [`crate::SiSimulation::run`] invocation.
///
/// `history()[r]` is the number of infected nodes at the end of round `r`,
/// with round `0` holding only the seed.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use spreadsim_core::{AdjacencyList, simulate_si};
///
/// let cycle = AdjacencyList::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])?;
/// let mut rng = SmallRng::seed_from_u64(0);
/// let result = simulate_si(&cycle, &0, 1.0, 5, &mut rng)?;
/// assert_eq!(result.history(), [1, 3, 4]);
/// assert_eq!(result.total_reach(), 4);
/// assert_eq!(result.stall_round(), 3);
/// assert_eq!(result.half_saturation_round(), Some(1));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationResult<N: Eq + Hash> {
    start_node: N,
    node_count: usize,
    history: Vec<usize>,
    stall_round: usize,
    half_saturation_round: Option<usize>,
    infected: HashSet<N>,
}

impl<N: Eq + Hash> SimulationResult<N> {
    pub(crate) fn new(
        start_node: N,
        node_count: usize,
        history: Vec<usize>,
        stall_round: usize,
        infected: HashSet<N>,
    ) -> Self {
        let half_saturation_round = half_saturation_round(&history, node_count);
        Self {
            start_node,
            node_count,
            history,
            stall_round,
            half_saturation_round,
            infected,
        }
    }

    /// Node the outbreak started from.
    #[must_use]
    pub const fn start_node(&self) -> &N {
        &self.start_node
    }

    /// Number of nodes in the graph the run was executed on.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Infected counts at every round boundary, starting with round `0`.
    #[must_use]
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Number of nodes infected when the run terminated.
    #[must_use]
    pub fn total_reach(&self) -> usize {
        self.infected.len()
    }

    /// Round in which no new infection happened.
    ///
    /// When the round cap is exhausted while the infection is still
    /// spreading, this is the last round index (the cap itself).
    #[must_use]
    pub const fn stall_round(&self) -> usize {
        self.stall_round
    }

    /// First round whose infected count reached half the graph, or `None`
    /// when that never happened within the cap.
    #[must_use]
    pub const fn half_saturation_round(&self) -> Option<usize> {
        self.half_saturation_round
    }

    /// Every node infected by the end of the run.
    #[must_use]
    pub const fn infected(&self) -> &HashSet<N> {
        &self.infected
    }

    /// Consumes the result, returning the final infected set.
    #[must_use]
    pub fn into_infected(self) -> HashSet<N> {
        self.infected
    }
}

/// First index whose count is at least `node_count / 2` over the reals.
///
/// `count >= n / 2` is evaluated as `2 * count >= n` so odd node counts are
/// compared exactly.
fn half_saturation_round(history: &[usize], node_count: usize) -> Option<usize> {
    history
        .iter()
        .position(|&count| count.saturating_mul(2) >= node_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::even_exact(&[1, 2, 4], 4, Some(1))]
    #[case::odd_needs_ceiling(&[1, 2, 3, 5], 5, Some(2))]
    #[case::first_round(&[1, 1], 1, Some(0))]
    #[case::single_of_two(&[1], 2, Some(0))]
    #[case::never(&[1, 2, 2], 10, None)]
    fn half_saturation_uses_real_valued_half(
        #[case] history: &[usize],
        #[case] node_count: usize,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(half_saturation_round(history, node_count), expected);
    }

    #[rstest]
    fn accessors_expose_constructor_inputs() {
        let result = SimulationResult::new(7_u32, 10, vec![1, 3, 3], 2, HashSet::from([7, 8, 9]));
        assert_eq!(*result.start_node(), 7);
        assert_eq!(result.node_count(), 10);
        assert_eq!(result.history(), [1, 3, 3]);
        assert_eq!(result.stall_round(), 2);
        assert_eq!(result.total_reach(), 3);
        assert_eq!(result.half_saturation_round(), None);
        assert_eq!(result.into_infected(), HashSet::from([7, 8, 9]));
    }
}
