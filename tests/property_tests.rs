//! Property-based tests using proptest

use linkrank::*;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Random 0/1 adjacency rows with a zero diagonal
fn adjacency_rows(max_n: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    (1..=max_n).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(prop::bool::ANY, n), n).prop_map(|bits| {
            bits.into_iter()
                .enumerate()
                .map(|(i, row)| {
                    row.into_iter()
                        .enumerate()
                        .map(|(j, b)| u8::from(b && i != j))
                        .collect()
                })
                .collect()
        })
    })
}

/// Adjacency rows where every page gets at least one inbound link
fn non_dangling_rows(max_n: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    adjacency_rows(max_n)
        .prop_filter("needs at least two pages", |rows| rows.len() >= 2)
        .prop_map(|mut rows| {
            let n = rows.len();
            // Close a ring so no column is empty.
            for i in 0..n {
                rows[i][(i + 1) % n] = 1;
            }
            rows
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_damped_columns_sum_to_one(rows in non_dangling_rows(12), damping in 0.0f64..0.99) {
        let network = Network::from_adjacency(&rows).unwrap();
        let adjacency = AdjacencyBuilder.build(&network);
        prop_assert!(validate_no_dangling(&adjacency));

        let hyperlink = HyperlinkMatrixBuilder.build(&adjacency);
        let damped = DampingBlender::new(damping).unwrap().blend(&hyperlink);
        for sum in damped.as_matrix().column_sums() {
            prop_assert!((sum - 1.0).abs() < 1e-9, "column sum {}", sum);
        }
    }

    #[test]
    fn test_scores_non_negative_and_normalized(rows in non_dangling_rows(12)) {
        let network = Network::from_adjacency(&rows).unwrap();
        let result = compute_ranking(&network, 0.15, 0.001, 200).unwrap();

        prop_assert!(result.pages().iter().all(|r| r.score >= 0.0));
        let total: f64 = result.pages().iter().map(|r| r.score).sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "total {}", total);
    }

    #[test]
    fn test_random_stochastic_matrix_iteration(
        n in 1usize..10,
        raw in prop::collection::vec(0.0f64..1.0, 100)
    ) {
        // Build a random column-stochastic matrix from the raw weights.
        let mut rows = vec![vec![0.0; n]; n];
        for j in 0..n {
            let column: Vec<f64> = (0..n).map(|i| raw[i * 10 + j] + 1e-3).collect();
            let sum: f64 = column.iter().sum();
            for i in 0..n {
                rows[i][j] = column[i] / sum;
            }
        }
        let matrix = DampedMatrix::from_matrix(DenseMatrix::from_rows(rows).unwrap()).unwrap();

        let result = PowerIterationSolver::new().with_max_iterations(500).solve(&matrix).unwrap();
        prop_assert!(result.scores.iter().all(|&s| s >= 0.0));
        prop_assert!((result.total_mass() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sort_is_stable_and_repeatable(
        levels in prop::collection::vec(0u8..4, 0..40)
    ) {
        // Few distinct values, so ties are common.
        let scores: Vec<f64> = levels.iter().map(|&l| f64::from(l) / 4.0).collect();
        let first = RankSorter.sort(&scores);
        let second = RankSorter.sort(&scores);
        prop_assert_eq!(&first, &second);

        for pair in first.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].index < pair[1].index);
            }
        }
    }

    #[test]
    fn test_adjacency_round_trip(rows in adjacency_rows(10)) {
        let network = Network::from_adjacency(&rows).unwrap();
        let adjacency = AdjacencyBuilder.build(&network);

        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                prop_assert_eq!(adjacency.has_link(i, j), value == 1);
            }
        }
    }

    #[test]
    fn test_empty_and_complete_networks(n in 1usize..12, seed in 0u64..1000) {
        let generator = NetworkGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let empty = AdjacencyBuilder.build(&generator.generate(n, 0, &mut rng).unwrap());
        let complete =
            AdjacencyBuilder.build(&generator.generate(n, n * (n - 1), &mut rng).unwrap());

        for i in 0..n {
            for j in 0..n {
                prop_assert!(!empty.has_link(i, j));
                prop_assert_eq!(complete.has_link(i, j), i != j);
            }
        }
    }

    #[test]
    fn test_generation_respects_invariants(
        n in 1usize..15,
        fill in 0.0f64..=1.0,
        seed in 0u64..1000
    ) {
        let max = n * (n - 1);
        let links = (max as f64 * fill) as usize;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let network = NetworkGenerator::new().generate(n, links, &mut rng).unwrap();

        prop_assert_eq!(network.link_count(), links);
        for page in network.iter() {
            prop_assert!(!page.links_to(page.id()));
            prop_assert!((1..=3).contains(&page.keywords().len()));
        }
    }

    #[test]
    fn test_search_hits_contain_query(
        rows in non_dangling_rows(8),
        query in "[a-z]{1,3}",
        seed in 0u64..100
    ) {
        let n = rows.len();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let keywords = NetworkGenerator::new().generate(n, 0, &mut rng).unwrap();
        let linked = Network::from_adjacency(&rows).unwrap();

        let pages: Vec<Page> = linked
            .iter()
            .zip(keywords.iter())
            .map(|(l, k)| {
                Page::new(l.id())
                    .with_links(l.links().to_vec())
                    .with_keywords(k.keywords().to_vec())
            })
            .collect();
        let network = Network::from_pages(pages).unwrap();

        let result = compute_ranking(&network, 0.15, 0.001, 200).unwrap();
        for hit in search(&result, &network, &query) {
            prop_assert!(hit.keyword.to_lowercase().contains(&query));
        }
    }
}
