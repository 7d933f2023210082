use crate::error::Result;
use crate::graph::*;
use crate::simulation::{simulate, SimulationParams};
use log::info;
use rand::Rng;

const VERTEX_PROGRESS_STRIDE: usize = 250;

/// Computes the vertices to cut from a single strongly connected component.
///
/// The component's vertices are reinserted into an initially edgeless copy
/// in order of ascending simulated traffic (ties broken by ascending id),
/// each time together with their edges to already reinserted vertices. An
/// insertion that closes a cycle is rolled back; the rejected vertices form
/// the returned cut. The rebuilt graph is acyclic after every insertion.
pub fn greedy_acyclic_cut<G, R>(
    component: &G,
    params: &SimulationParams,
    rng: &mut R,
) -> Result<Vec<Node>>
where
    G: AdjacencyListIn + GraphNew + GraphEdgeEditing,
    R: Rng,
{
    let traffic = simulate(component, params, rng)?;

    let mut order: Vec<Node> = component.vertices().collect();
    order.sort_unstable_by_key(|&v| (traffic[v as usize], v));

    let mut acyclic = G::new(component.len());
    let mut included = vec![false; component.len()];

    for (progress, &v) in order.iter().enumerate() {
        included[v as usize] = true;

        for u in component.in_neighbors(v) {
            if included[u as usize] {
                acyclic.add_edge(u, v);
            }
        }
        for w in component.out_neighbors(v) {
            if included[w as usize] {
                acyclic.add_edge(v, w);
            }
        }

        if !acyclic.is_acyclic() {
            acyclic.remove_edges_at_node(v);
            included[v as usize] = false;
        }

        if (progress + 1) % VERTEX_PROGRESS_STRIDE == 0 {
            info!("Processed vertex {} of {}", progress + 1, order.len());
        }
    }

    Ok(order
        .into_iter()
        .filter(|&v| !included[v as usize])
        .collect())
}

/// Computes a feedback vertex set of `graph`: a set of node ids whose
/// removal leaves the graph acyclic.
///
/// The graph is split into its strongly connected components; every
/// component containing a cycle is processed by [`greedy_acyclic_cut`] and
/// its rejected vertices are mapped back to ids of `graph`. Vertices of
/// trivial components are never cut. The result is sorted ascending.
pub fn feedback_vertex_set<G, R>(
    graph: &G,
    params: &SimulationParams,
    rng: &mut R,
) -> Result<Vec<Node>>
where
    G: AdjacencyListIn + GraphNew + GraphEdgeEditing,
    R: Rng,
{
    let components = graph.cyclic_scc_subgraphs();
    let total = components.len();

    let mut cut_vertices = Vec::new();
    for (index, (component, mapper)) in components.iter().enumerate() {
        let local_cut = greedy_acyclic_cut(component, params, rng)?;
        cut_vertices.extend(local_cut.iter().map(|&v| mapper.old_id_of(v).unwrap()));

        info!(
            "Processed component {} of {} with n={}, m={}, cut {}",
            index + 1,
            total,
            component.number_of_nodes(),
            component.number_of_edges(),
            local_cut.len()
        );
    }

    cut_vertices.sort_unstable();
    Ok(cut_vertices)
}
