use subiso::{
    graph::DiGraph,
    matching::{all_isomorphisms_for_digraphs, CandidateMap},
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn three_cycle() -> DiGraph {
    DiGraph::from(vec![vec![1], vec![2], vec![0]])
}

/// The directed Hajos graph: four 3-cycles sharing vertices.
fn hajos() -> DiGraph {
    DiGraph::from(vec![
        vec![1],
        vec![2, 3],
        vec![0, 4],
        vec![4],
        vec![1, 5],
        vec![2],
    ])
}

#[test]
fn test_single_arc_onto_single_arc() {
    init();
    let graph = DiGraph::from(vec![vec![1], vec![]]);
    assert_eq!(
        all_isomorphisms_for_digraphs(&graph, &graph, None),
        vec![vec![0, 1]]
    );
}

#[test]
fn test_three_cycle_rotations_onto_itself() {
    init();
    let cycle = three_cycle();
    assert_eq!(
        all_isomorphisms_for_digraphs(&cycle, &cycle, None),
        vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]]
    );
}

#[test]
fn test_three_chain_on_ten_chain() {
    init();
    let pattern = DiGraph::from(vec![vec![1], vec![2], vec![]]);
    let target = DiGraph::from(vec![
        vec![1],
        vec![2],
        vec![3],
        vec![4],
        vec![5],
        vec![6],
        vec![7],
        vec![8],
        vec![9],
        vec![],
    ]);
    assert_eq!(
        all_isomorphisms_for_digraphs(&pattern, &target, None),
        (0..8).map(|i| vec![i, i + 1, i + 2]).collect::<Vec<_>>()
    );
}

#[test]
fn test_three_chain_on_ten_cycle_wraps_around() {
    init();
    let pattern = DiGraph::from(vec![vec![1], vec![2], vec![]]);
    let target = DiGraph::from(vec![
        vec![1],
        vec![2],
        vec![3],
        vec![4],
        vec![5],
        vec![6],
        vec![7],
        vec![8],
        vec![9],
        vec![0],
    ]);
    assert_eq!(
        all_isomorphisms_for_digraphs(&pattern, &target, None),
        (0..10)
            .map(|i| vec![i, (i + 1) % 10, (i + 2) % 10])
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_pattern_larger_than_target_is_empty() {
    init();
    let pattern = DiGraph::from(vec![
        vec![1],
        vec![2],
        vec![3],
        vec![4],
        vec![5],
        vec![6],
        vec![7],
        vec![8],
        vec![9],
        vec![0],
    ]);
    let target = DiGraph::from(vec![vec![1], vec![2], vec![]]);
    assert_eq!(
        all_isomorphisms_for_digraphs(&pattern, &target, None),
        Vec::<Vec<usize>>::new()
    );
}

#[test]
fn test_three_cycle_has_twelve_embeddings_into_hajos() {
    init();
    assert_eq!(
        all_isomorphisms_for_digraphs(&three_cycle(), &hajos(), None),
        vec![
            vec![0, 1, 2],
            vec![1, 2, 0],
            vec![1, 2, 4],
            vec![1, 3, 4],
            vec![2, 0, 1],
            vec![2, 4, 1],
            vec![2, 4, 5],
            vec![3, 4, 1],
            vec![4, 1, 2],
            vec![4, 1, 3],
            vec![4, 5, 2],
            vec![5, 2, 4],
        ]
    );
}

#[test]
fn test_seeded_map_restricts_enumeration() {
    init();
    let seed = CandidateMap::from(vec![vec![1], vec![0, 1, 2, 3, 4, 5], vec![0, 1, 2, 3, 4, 5]]);
    assert_eq!(
        all_isomorphisms_for_digraphs(&three_cycle(), &hajos(), Some(seed)),
        vec![vec![1, 2, 0], vec![1, 2, 4], vec![1, 3, 4]]
    );
}

#[test]
fn test_identity_is_always_enumerated() {
    init();
    for graph in [
        DiGraph::from(vec![]),
        DiGraph::from(vec![vec![]]),
        three_cycle(),
        hajos(),
    ]
    .iter()
    {
        let identity: Vec<usize> = (0..graph.order()).collect();
        assert!(all_isomorphisms_for_digraphs(graph, graph, None).contains(&identity));
    }
}
