use indexmap::IndexMap;
use tracing::debug;

use super::algos::{bellman_ford, dijkstra, floyd_warshall};
use super::Graph;
use crate::ensure_node;
use crate::error::Result;
use crate::log_cache_stats;

impl<V> Graph<V> {
    fn names(&self) -> Vec<&str> {
        self.nodes.keys().map(String::as_str).collect()
    }

    /// Shortest distance from `from` to `to`.
    ///
    /// Returns the all-pairs table entry when it is current; otherwise runs
    /// Bellman-Ford if the graph has negative edges and Dijkstra if not.
    /// `f64::INFINITY` means unreachable; `None` means a negative cycle is
    /// reachable from `from`, so no finite distance exists.
    pub fn get_min_distance(&self, from: &str, to: &str) -> Result<Option<f64>> {
        ensure_node!(self, from);
        ensure_node!(self, to);

        let cached = self.cache.lookup(from, to);
        log_cache_stats!(self.cache.stats(), "get_min_distance");
        if let Some(distance) = cached {
            return Ok(Some(distance));
        }

        if self.has_negative_edges() {
            self.bellman_ford_distance(from, to)
        } else {
            self.dijkstra_distance(from, to).map(Some)
        }
    }

    /// Dijkstra distance, bypassing the cache. Assumes non-negative weights.
    pub fn dijkstra_distance(&self, from: &str, to: &str) -> Result<f64> {
        ensure_node!(self, from);
        ensure_node!(self, to);

        let distances = dijkstra(&self.storage, self.names(), from);
        Ok(distances.get(to).copied().unwrap_or(f64::INFINITY))
    }

    /// Bellman-Ford distance, bypassing the cache; `None` on a negative cycle
    pub fn bellman_ford_distance(&self, from: &str, to: &str) -> Result<Option<f64>> {
        ensure_node!(self, from);
        ensure_node!(self, to);

        let distances = bellman_ford(&self.storage, &self.names(), from);
        Ok(distances.map(|d| d.get(to).copied().unwrap_or(f64::INFINITY)))
    }

    /// Fill the all-pairs table with Floyd-Warshall, unless it is current
    pub fn calculate_all_distances(&mut self) {
        if self.cache.is_valid() {
            return;
        }

        let names = self.names();
        let table = floyd_warshall(&self.storage, &names);
        let owned = names.into_iter().map(str::to_string).collect();
        self.cache.store(owned, table);
        debug!(nodes = self.nodes.len(), "distance_cache_filled");
    }

    /// Every pairwise distance, computing the table first if needed
    pub fn all_distances(&mut self) -> IndexMap<String, IndexMap<String, f64>> {
        self.calculate_all_distances();
        self.cache
            .rows()
            .into_iter()
            .map(|(from, row)| {
                let row = row
                    .into_iter()
                    .map(|(to, distance)| (to.to_string(), distance))
                    .collect();
                (from.to_string(), row)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{GraphOptions, StorageKind};
    use crate::edge::Edge;
    use crate::graph::{ConnectionDescriptor, Graph};
    use crate::node::NodeDescriptor;

    fn directed(from: &str, to: &str, weight: f64) -> ConnectionDescriptor {
        ConnectionDescriptor::new(from, to, Edge::directed(weight))
    }

    fn graph(names: &[&str], edges: Vec<ConnectionDescriptor>, options: GraphOptions) -> Graph<()> {
        Graph::new(names.iter().map(|n| NodeDescriptor::from(*n)), edges, options).unwrap()
    }

    fn textbook(options: GraphOptions) -> Graph<()> {
        graph(
            &["A", "B", "C", "D", "F"],
            vec![
                directed("A", "B", 7.0),
                directed("A", "C", 3.0),
                directed("A", "D", 4.0),
                directed("C", "B", 12.0),
                directed("C", "D", 5.0),
                directed("C", "F", 2.0),
            ],
            options,
        )
    }

    #[test]
    fn test_dijkstra_dispatch() {
        let g = textbook(GraphOptions::default());
        assert!(!g.has_negative_edges());
        assert_eq!(g.get_min_distance("A", "F").unwrap(), Some(5.0));
        assert_eq!(g.get_min_distance("F", "A").unwrap(), Some(f64::INFINITY));
    }

    #[test]
    fn test_declared_negative_dispatches_to_bellman_ford() {
        let g = textbook(GraphOptions::default().with_negative_edges(true));
        assert!(g.has_negative_edges());
        assert_eq!(g.get_min_distance("A", "F").unwrap(), Some(5.0));
    }

    #[test]
    fn test_negative_cycle_is_none_not_infinity() {
        let g = graph(
            &["X", "Y"],
            vec![directed("X", "Y", -1.0), directed("Y", "X", -1.0)],
            GraphOptions::default(),
        );
        assert!(g.has_negative_edges());
        assert_eq!(g.get_min_distance("X", "Y").unwrap(), None);
    }

    #[test]
    fn test_unknown_endpoint_rejected() {
        let g = textbook(GraphOptions::default());
        assert!(g.get_min_distance("A", "Z").is_err());
        assert!(g.get_min_distance("Z", "A").is_err());
        assert!(g.dijkstra_distance("Z", "A").is_err());
        assert!(g.bellman_ford_distance("A", "Z").is_err());
    }

    #[test]
    fn test_cache_used_after_calculation() {
        let mut g = textbook(GraphOptions::default().with_storage(StorageKind::Matrix));
        g.calculate_all_distances();
        assert!(g.is_distance_cache_valid());

        assert_eq!(g.get_min_distance("A", "F").unwrap(), Some(5.0));
        assert_eq!(g.get_min_distance("A", "A").unwrap(), Some(0.0));
        assert_eq!(g.cache_stats().hits(), 2);
    }

    #[test]
    fn test_uncached_queries_count_as_misses() {
        let mut g = textbook(GraphOptions::default());
        assert_eq!(g.get_min_distance("A", "F").unwrap(), Some(5.0));
        assert_eq!(g.cache_stats().misses(), 1);
        assert_eq!(g.cache_stats().hits(), 0);

        g.calculate_all_distances();
        assert_eq!(g.get_min_distance("A", "F").unwrap(), Some(5.0));
        assert_eq!(g.cache_stats().misses(), 1);
        assert_eq!(g.cache_stats().hits(), 1);
        assert_eq!(g.cache_stats().hit_rate(), 50.0);
    }

    #[test]
    fn test_add_connections_invalidates_cache() {
        let mut g = textbook(GraphOptions::default());
        g.calculate_all_distances();
        assert_eq!(g.get_min_distance("A", "F").unwrap(), Some(5.0));

        g.add_connections(vec![directed("A", "F", 1.0)]).unwrap();
        assert!(!g.is_distance_cache_valid());
        assert_eq!(g.get_min_distance("A", "F").unwrap(), Some(1.0));
    }

    #[test]
    fn test_every_mutation_invalidates_cache() {
        let mut g = textbook(GraphOptions::default());

        g.calculate_all_distances();
        g.add_nodes(vec![NodeDescriptor::from("G")]).unwrap();
        assert!(!g.is_distance_cache_valid());

        g.calculate_all_distances();
        g.remove_nodes(["G"]).unwrap();
        assert!(!g.is_distance_cache_valid());

        g.calculate_all_distances();
        g.remove_connections("C", "F").unwrap();
        assert!(!g.is_distance_cache_valid());
        assert_eq!(g.get_min_distance("A", "F").unwrap(), Some(f64::INFINITY));
    }

    #[test]
    fn test_detected_flag_follows_mutations() {
        let mut g = textbook(GraphOptions::default());
        g.add_connections(vec![directed("F", "D", -2.0)]).unwrap();
        assert!(g.has_negative_edges());
        assert_eq!(g.get_min_distance("A", "D").unwrap(), Some(3.0));

        g.remove_connections("F", "D").unwrap();
        assert!(!g.has_negative_edges());
    }

    #[test]
    fn test_declared_flag_is_kept() {
        let mut g = textbook(GraphOptions::default().with_negative_edges(false));
        g.add_connections(vec![directed("B", "F", 1.0)]).unwrap();
        assert!(!g.has_negative_edges());
    }

    #[test]
    fn test_all_distances_table() {
        let mut g = textbook(GraphOptions::default());
        let table = g.all_distances();

        assert_eq!(table.len(), 5);
        assert_eq!(table["A"]["F"], 5.0);
        assert_eq!(table["A"]["B"], 7.0);
        assert_eq!(table["B"]["A"], f64::INFINITY);
        assert_eq!(table["F"]["F"], 0.0);
        let first_row: Vec<&str> = table["C"].keys().map(String::as_str).collect();
        assert_eq!(first_row, vec!["A", "B", "C", "D", "F"]);
    }

    #[test]
    fn test_algorithms_agree_on_sample() {
        let g = textbook(GraphOptions::default());
        let names: Vec<String> = g.node_names().map(str::to_string).collect();
        for from in &names {
            for to in &names {
                assert_eq!(
                    Some(g.dijkstra_distance(from, to).unwrap()),
                    g.bellman_ford_distance(from, to).unwrap(),
                    "{from} -> {to}"
                );
            }
        }
    }
}
