use crate::graph::*;
use rand::Rng;

/// Generates a Gilbert (also, wrongly, known as Erdos-Renyi) digraph:
/// G(n,p) contains n nodes and each of the n² ordered pairs, self-loops
/// included, is an edge independently with probability p
pub fn generate_gnp<G, R>(rng: &mut R, n: Node, p: f64) -> G
where
    R: Rng,
    G: GraphNew + GraphEdgeEditing,
{
    assert!((0.0..=1.0).contains(&p));
    let mut result = G::new(n as usize);

    for u in 0..n {
        for v in 0..n {
            if rng.gen_bool(p) {
                result.add_edge(u, v);
            }
        }
    }

    result
}
