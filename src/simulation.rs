use crate::error::{Error, Result};
use crate::graph::*;
use log::info;
use rand::Rng;

/// Parameters of the random-walk traffic simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    /// Number of random walks per batch
    pub agents: usize,

    /// Number of transitions per walk
    pub steps: usize,

    /// Upper bound on the number of batches
    pub batches: usize,

    /// L1 drift of the normalized traffic distribution between consecutive
    /// batches below which the simulation terminates early
    pub change_threshold: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            agents: 1000,
            steps: 1000,
            batches: 250,
            change_threshold: 0.001,
        }
    }
}

/// Estimates how often a uniform random walk passes through each vertex of
/// `component` and returns the unnormalized visit count per vertex.
///
/// Per batch, `agents` walks start at uniformly drawn vertices and take
/// `steps` transitions each, picking a uniform out-neighbor at every vertex;
/// each arrival increments the target's count (the start vertex is not
/// counted). After a batch, the counts normalized by all transitions so far
/// are compared against the previous batch; an L1 drift below
/// `change_threshold` stops the simulation before the batch ceiling.
///
/// Fails with [`Error::NotStronglyConnected`] iff a walk reaches a vertex
/// with out-degree 0.
pub fn simulate<G, R>(component: &G, params: &SimulationParams, rng: &mut R) -> Result<Vec<u64>>
where
    G: AdjacencyList,
    R: Rng,
{
    let n = component.len();
    let mut traffic = vec![0u64; n];
    if n == 0 {
        return Ok(traffic);
    }

    // fixed out-neighbor enumeration shared by all walks
    let out_neighbors: Vec<Vec<Node>> = component
        .vertices()
        .map(|u| component.out_neighbors(u).collect())
        .collect();

    let mut previous_normalized = vec![0.0f64; n];

    for batch in 0..params.batches {
        for _ in 0..params.agents {
            let mut current = rng.gen_range(0..n);

            for _ in 0..params.steps {
                let neighbors = &out_neighbors[current];
                let next = match neighbors.len() {
                    0 => return Err(Error::NotStronglyConnected),
                    1 => neighbors[0],
                    degree => neighbors[rng.gen_range(0..degree)],
                };

                traffic[next as usize] += 1;
                current = next as usize;
            }
        }

        let total = ((batch + 1) * params.agents * params.steps) as f64;
        let mut drift = 0.0;
        for (count, previous) in traffic.iter().zip(previous_normalized.iter_mut()) {
            let normalized = *count as f64 / total;
            drift += (normalized - *previous).abs();
            *previous = normalized;
        }

        info!(
            "Processed batch {} of at most {} with normalized traffic drift {:.6} (threshold: {}, agents/batch: {}, steps/agent: {})",
            batch + 1,
            params.batches,
            drift,
            params.change_threshold,
            params.agents,
            params.steps
        );

        if drift < params.change_threshold {
            info!("Traffic converged, terminating early");
            break;
        }
    }

    Ok(traffic)
}
