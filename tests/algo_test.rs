use mention_graph::{EdgeAggregator, EntityCatalog, EntityId, GraphModel, StatisticsEngine};
use mention_graph_algorithms::{connected_components, count_triangles, degrees};

fn id(s: &str) -> EntityId {
    EntityId::new(s)
}

/// Triangle a-b-c, pendant d on c, e isolated
fn graph() -> GraphModel {
    let catalog = EntityCatalog::from_entries([
        ("a", "alpha"),
        ("b", "beta"),
        ("c", "gamma"),
        ("d", "delta"),
        ("e", "epsilon"),
    ])
    .unwrap();

    let mut agg = EdgeAggregator::new();
    agg.absorb(&id("a"), [&id("b"), &id("c")]);
    agg.absorb(&id("b"), [&id("c"), &id("c")]);
    agg.absorb(&id("d"), [&id("c")]);
    GraphModel::from_weights(&catalog, agg.weights()).unwrap()
}

#[test]
fn test_view_feeds_algorithms() {
    let g = graph();
    let view = g.view();

    assert_eq!(degrees(&view), vec![2, 2, 3, 1, 0]);
    assert_eq!(count_triangles(&view), 1);

    let components = connected_components(&view);
    assert_eq!(components.count(), 2);
    let main: Vec<&EntityId> = components.components[0]
        .iter()
        .filter_map(|&n| g.entity_for(n))
        .collect();
    assert_eq!(main, vec![&id("a"), &id("b"), &id("c"), &id("d")]);
}

#[test]
fn test_statistics_agree_with_model() {
    let g = graph();
    let stats = StatisticsEngine::new(&g);

    for rank in stats.degree_ranking() {
        assert_eq!(rank.degree, g.degree(&rank.id).unwrap());
        assert_eq!(rank.strength, g.strength(&rank.id).unwrap());
    }

    let matrix = stats.adjacency_matrix(None);
    for a in g.nodes() {
        for b in g.nodes() {
            assert_eq!(matrix.get(a, b), Some(g.weight(a, b).unwrap()));
        }
    }

    let connectivity = stats.connectivity();
    assert_eq!(connectivity.triangles, 1);
    assert_eq!(connectivity.largest_component, 4);
    assert!((connectivity.density - 4.0 / 10.0).abs() < 1e-12);
}
