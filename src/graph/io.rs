use super::*;
use crate::error::{Error, Result};
use itertools::Itertools;
use std::io::{BufRead, Write};

pub use cut_set::{try_read_cut_set, try_write_cut_set};
pub use in_list::{InListRead, InListWrite};

/// Inclusive bounds on the vertex count of a decoded graph
pub const MIN_VERTICES: usize = 2;
pub const MAX_VERTICES: usize = 10_000;

/// Upper bound on the number of distinct edges of a decoded graph
pub const MAX_EDGES: usize = 100_000;

/// Consumes the next whitespace-delimited token as an unsigned integer
fn next_number<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<usize> {
    let token = tokens
        .next()
        .ok_or_else(|| Error::InputFormat(format!("missing {}", what)))?;
    token
        .parse()
        .map_err(|_| Error::InputFormat(format!("invalid {}: '{}'", what, token)))
}

/// Fails iff the stream still holds a non-whitespace token
fn expect_end_of_tokens<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<()> {
    match tokens.next() {
        None => Ok(()),
        Some(token) => Err(Error::InputFormat(format!(
            "unexpected trailing data: '{}'",
            token
        ))),
    }
}

pub mod in_list {
    use super::*;

    pub trait InListRead: Sized {
        /// Decodes a graph from the whitespace-delimited in-edge-list format:
        /// the vertex count N, followed by one group per vertex 1..=N holding
        /// its in-degree kᵢ and the kᵢ 1-indexed source numbers. Vertex
        /// number i becomes node id i - 1.
        fn try_read_inlist<T: BufRead>(reader: T) -> Result<Self>;
    }

    pub trait InListWrite {
        /// Encodes the graph in the in-edge-list format, one line per vertex
        /// with ascending source numbers
        fn try_write_inlist<T: Write>(&self, writer: T) -> Result<()>;
    }

    impl<G: GraphNew + GraphEdgeEditing + GraphOrder> InListRead for G {
        fn try_read_inlist<T: BufRead>(mut reader: T) -> Result<Self> {
            let mut buffer = String::new();
            reader.read_to_string(&mut buffer)?;
            let mut tokens = buffer.split_ascii_whitespace();

            let n = next_number(&mut tokens, "number of vertices")?;
            if !(MIN_VERTICES..=MAX_VERTICES).contains(&n) {
                return Err(Error::DomainConstraint {
                    what: "number of vertices",
                    min: MIN_VERTICES,
                    max: MAX_VERTICES,
                    value: n,
                });
            }

            let mut graph = G::new(n);
            for target in 1..=n {
                let in_degree =
                    next_number(&mut tokens, &format!("in-degree of vertex {}", target))?;
                if in_degree > n {
                    return Err(Error::InputFormat(format!(
                        "in-degree {} of vertex {} exceeds the vertex count {}",
                        in_degree, target, n
                    )));
                }

                for _ in 0..in_degree {
                    let source =
                        next_number(&mut tokens, &format!("source of vertex {}", target))?;
                    if source < 1 || source > n {
                        return Err(Error::InputFormat(format!(
                            "source {} of vertex {} is out of range [1, {}]",
                            source, target, n
                        )));
                    }

                    graph.add_edge((source - 1) as Node, (target - 1) as Node);
                }
            }

            expect_end_of_tokens(&mut tokens)?;

            if graph.number_of_edges() > MAX_EDGES {
                return Err(Error::DomainConstraint {
                    what: "number of edges",
                    min: 0,
                    max: MAX_EDGES,
                    value: graph.number_of_edges(),
                });
            }

            Ok(graph)
        }
    }

    impl<G: AdjacencyListIn> InListWrite for G {
        fn try_write_inlist<T: Write>(&self, mut writer: T) -> Result<()> {
            writeln!(writer, "{}", self.number_of_nodes())?;
            for u in self.vertices() {
                let sources = self.in_neighbors(u).map(|v| v + 1).sorted().join(" ");
                if sources.is_empty() {
                    writeln!(writer, "{}", self.in_degree(u))?;
                } else {
                    writeln!(writer, "{} {}", self.in_degree(u), sources)?;
                }
            }
            Ok(())
        }
    }
}

pub mod cut_set {
    use super::*;

    /// Decodes a set of 1-indexed vertex numbers in the `M v₁ … v_M` format
    pub fn try_read_cut_set<T: BufRead>(mut reader: T) -> Result<Vec<usize>> {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer)?;
        let mut tokens = buffer.split_ascii_whitespace();

        let size = next_number(&mut tokens, "size of the vertex set")?;
        if size > MAX_VERTICES {
            return Err(Error::DomainConstraint {
                what: "size of the vertex set",
                min: 0,
                max: MAX_VERTICES,
                value: size,
            });
        }

        let mut vertices = Vec::with_capacity(size);
        for index in 1..=size {
            vertices.push(next_number(
                &mut tokens,
                &format!("vertex {} of the set", index),
            )?);
        }

        expect_end_of_tokens(&mut tokens)?;

        Ok(vertices)
    }

    /// Encodes a set of 1-indexed vertex numbers in the `M v₁ … v_M` format
    pub fn try_write_cut_set<T: Write>(mut writer: T, vertices: &[usize]) -> Result<()> {
        writeln!(writer, "{}", vertices.len())?;
        if !vertices.is_empty() {
            writeln!(writer, "{}", vertices.iter().join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_models::gnp::generate_gnp;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    // 3 -> 1, 5 -> 1, 1 -> 2, 2 -> 3, 1 -> 4, 4 -> 5 as in-edge lists
    const SAMPLE: &str = "5\n2 3 5\n1 1\n1 2\n1 1\n1 4\n";

    fn sample_edges() -> Vec<Edge> {
        vec![(0, 1), (0, 3), (1, 2), (2, 0), (3, 4), (4, 0)]
    }

    #[test]
    fn read_sample_graph() {
        let graph = AdjArrayIn::try_read_inlist(SAMPLE.as_bytes()).unwrap();
        assert_eq!(graph.number_of_nodes(), 5);
        assert_eq!(graph.number_of_edges(), 6);

        let mut edges = graph.edges();
        edges.sort_unstable();
        assert_eq!(edges, sample_edges());
    }

    #[test]
    fn read_is_whitespace_agnostic() {
        let flat = "5 2 3 5 1 1 1 2 1 1 1 4";
        let graph = AdjArrayIn::try_read_inlist(flat.as_bytes()).unwrap();

        let mut edges = graph.edges();
        edges.sort_unstable();
        assert_eq!(edges, sample_edges());
    }

    #[test]
    fn read_dedups_repeated_edges() {
        let graph = AdjArrayIn::try_read_inlist("2\n2 2 2\n1 1\n".as_bytes()).unwrap();
        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.has_edge(1, 0));
        assert!(graph.has_edge(0, 1));
    }

    #[test]
    fn read_accepts_self_loop() {
        let graph = AdjArrayIn::try_read_inlist("2\n1 1\n0\n".as_bytes()).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
        assert!(graph.has_edge(0, 0));
    }

    #[test]
    fn read_broken_inputs() {
        for (buffer, name) in [
            ("", "no vertex count"),
            ("x", "non-numeric vertex count"),
            ("1\n0\n", "too few vertices"),
            ("10001", "too many vertices"),
            ("2\n0", "missing in-degree"),
            ("2\n3 1 1 1\n0\n", "in-degree exceeding vertex count"),
            ("2\n1\n0\n", "missing source"),
            ("2\n1 0\n0\n", "source below range"),
            ("2\n1 3\n0\n", "source above range"),
            ("2\n1 -1\n0\n", "negative source"),
            ("2\n0\n0\nx", "trailing data"),
            ("2\n0\n0\n1", "trailing number"),
        ] {
            assert!(
                AdjArrayIn::try_read_inlist(buffer.as_bytes()).is_err(),
                "error not detected: {}",
                name
            );
        }
    }

    #[test]
    fn read_rejects_edge_overflow() {
        // complete digraph on 400 vertices: 160000 distinct edges
        let n = 400;
        let mut buffer = (1..=n).fold(format!("{}\n", n), |mut buf, _| {
            buf.push_str(&format!("{} {}\n", n, (1..=n).join(" ")));
            buf
        });
        buffer.push('\n');

        let result = AdjArrayIn::try_read_inlist(buffer.as_bytes());
        assert!(matches!(
            result,
            Err(Error::DomainConstraint {
                what: "number of edges",
                ..
            })
        ));
    }

    #[test]
    fn write_sample_graph() {
        let graph = AdjArrayIn::try_read_inlist(SAMPLE.as_bytes()).unwrap();
        let mut buffer = vec![];
        graph.try_write_inlist(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), SAMPLE);
    }

    #[test]
    fn write_isolated_vertex_line() {
        let graph = AdjArrayIn::try_read_inlist("2\n1 2\n0\n".as_bytes()).unwrap();
        let mut buffer = vec![];
        graph.try_write_inlist(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "2\n1 2\n0\n");
    }

    #[test]
    fn test_inlist_round_trip() {
        let mut gen = Pcg64Mcg::seed_from_u64(123);
        for i in 1..20 {
            let graph: AdjArrayIn = generate_gnp(&mut gen, 2 + 3 * i, 0.1);
            let mut buffer = vec![];
            graph.try_write_inlist(&mut buffer).unwrap();
            let read_graph = AdjArrayIn::try_read_inlist(buffer.as_slice()).unwrap();

            assert_eq!(graph.number_of_nodes(), read_graph.number_of_nodes());
            assert_eq!(graph.number_of_edges(), read_graph.number_of_edges());

            let mut edges = graph.edges();
            let mut read_edges = read_graph.edges();
            edges.sort_unstable();
            read_edges.sort_unstable();
            assert_eq!(edges, read_edges);
        }
    }

    #[test]
    fn test_cut_set_round_trip() {
        for set in [vec![], vec![3], vec![3, 5, 4711]] {
            let mut buffer = vec![];
            try_write_cut_set(&mut buffer, &set).unwrap();
            let read_set = try_read_cut_set(buffer.as_slice()).unwrap();
            assert_eq!(set, read_set);
        }
    }

    #[test]
    fn write_empty_cut_set() {
        let mut buffer = vec![];
        try_write_cut_set(&mut buffer, &[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0\n");
    }

    #[test]
    fn read_broken_cut_sets() {
        for (buffer, name) in [
            ("", "no size"),
            ("2\n3", "fewer vertices than announced"),
            ("1\n3 4", "trailing data"),
            ("10001\n", "size beyond the vertex bound"),
        ] {
            assert!(
                try_read_cut_set(buffer.as_bytes()).is_err(),
                "error not detected: {}",
                name
            );
        }
    }
}
