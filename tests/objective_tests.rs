//! Unit tests for the objective evaluator.

use hub_location::discount::interhub_cost;
use hub_location::error::HubError;
use hub_location::initial_solution;
use hub_location::objective::{evaluate, evaluate_breakdown, total_cost, HubFlowTable};
use hub_location::problem::Problem;
use hub_location::solution::Assignment;
use hub_location::utils::random_problem;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// All-ones matrix with a zero diagonal.
fn ones(n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { 0.0 } else { 1.0 }).collect())
        .collect()
}

/// Four nodes, hubs 1 and 3, clusters {1, 2} and {3, 4}.
fn create_test_problem() -> (Problem, Assignment) {
    let problem = Problem::new("Ones".to_string(), ones(4), ones(4), 2).unwrap();
    let assignment = Assignment::from_vec(vec![1, 1, 3, 3], 2).unwrap();
    (problem, assignment)
}

/// Straightforward evaluation scanning the flow matrix once per hub pair.
fn reference_cost(problem: &Problem, assignment: &Assignment) -> f64 {
    let n = problem.node_count();
    let hubs_of = assignment.as_slice();
    let mut total = 0.0;

    for i in 0..n {
        for j in 0..n {
            total += problem.flow()[i][j]
                * (problem.cost()[i][hubs_of[i] - 1] + problem.cost()[hubs_of[j] - 1][j]);
        }
    }

    for &k in &assignment.hubs() {
        for &m in &assignment.hubs() {
            if k == m {
                continue;
            }
            let mut flow = 0.0;
            for i in 0..n {
                for j in 0..n {
                    if hubs_of[i] == k && hubs_of[j] == m {
                        flow += problem.flow()[i][j];
                    }
                }
            }
            total += interhub_cost(flow) * problem.cost()[k - 1][m - 1];
        }
    }

    total
}

#[test]
fn test_small_instance_arithmetic() {
    let (problem, assignment) = create_test_problem();

    let breakdown = evaluate_breakdown(&problem, &assignment).unwrap();

    // Nodes 2 and 4 pay a leg of 1 to and from their hub; each appears in
    // three off-diagonal pairs as origin and three as destination.
    assert!((breakdown.access - 12.0).abs() < 1e-9);
    // F(1, 3) = F(3, 1) = 4, below the first breakpoint, at unit cost: the
    // pair (1, 3) costs 4 and the reverse pair (3, 1) another 4.
    assert!((breakdown.transfer - 8.0).abs() < 1e-9);
    assert!((breakdown.total - 20.0).abs() < 1e-9);
    assert_eq!(total_cost(&problem, &assignment).unwrap(), breakdown.total);
}

#[test]
fn test_hub_flow_table() {
    let (problem, assignment) = create_test_problem();

    let table = HubFlowTable::build(problem.flow(), &assignment);

    assert_eq!(table.hubs, vec![1, 3]);
    assert_eq!(table.get(1, 3), 4.0);
    assert_eq!(table.get(3, 1), 4.0);
    assert_eq!(table.get(1, 1), 2.0);
    assert_eq!(table.get(3, 3), 2.0);
    // Not a hub.
    assert_eq!(table.get(2, 3), 0.0);

    let transfers: Vec<(usize, usize, f64)> = table.transfers().collect();
    assert_eq!(transfers, vec![(1, 3, 4.0), (3, 1, 4.0)]);
}

#[test]
fn test_discount_applies_to_aggregated_flow() {
    let flow = vec![vec![0.0, 60_000.0], vec![40_000.0, 0.0]];
    let cost = vec![vec![0.0, 1.0], vec![2.0, 0.0]];
    let problem = Problem::new("Discount".to_string(), flow, cost, 2).unwrap();
    let assignment = Assignment::from_vec(vec![1, 2], 2).unwrap();

    let breakdown = evaluate_breakdown(&problem, &assignment).unwrap();

    assert_eq!(breakdown.access, 0.0);
    // g(60000) * 1 + g(40000) * 2 = 58000 + 80000
    assert!((breakdown.transfer - 138_000.0).abs() < 1e-6);
}

#[test]
fn test_flows_are_aggregated_before_discount() {
    // Two origins in one cluster each ship 30000 to the other cluster: the
    // discount sees 60000, not two separate 30000 flows.
    let mut flow = vec![vec![0.0; 3]; 3];
    flow[0][2] = 30_000.0;
    flow[1][2] = 30_000.0;
    let mut cost = vec![vec![0.0; 3]; 3];
    cost[0][2] = 1.0;
    let problem = Problem::new("Aggregate".to_string(), flow, cost, 2).unwrap();
    let assignment = Assignment::from_vec(vec![1, 1, 3], 2).unwrap();

    let breakdown = evaluate_breakdown(&problem, &assignment).unwrap();

    assert!((breakdown.transfer - interhub_cost(60_000.0)).abs() < 1e-6);
    assert!((breakdown.transfer - 58_000.0).abs() < 1e-6);
}

#[test]
fn test_diagonal_costs_are_charged() {
    let flow = vec![vec![5.0]];
    let cost = vec![vec![2.0]];
    let problem = Problem::new("Single".to_string(), flow, cost, 1).unwrap();
    let assignment = Assignment::from_vec(vec![1], 1).unwrap();

    // 5 * (cost[1][1] + cost[1][1]); no transfer with a single hub.
    let breakdown = evaluate_breakdown(&problem, &assignment).unwrap();
    assert_eq!(breakdown.access, 20.0);
    assert_eq!(breakdown.transfer, 0.0);
}

#[test]
fn test_matches_reference_on_random_instances() {
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let n = 5 + (seed as usize % 10);
        let hubs = 1 + (seed as usize % 4);
        let problem = random_problem("Random", n, hubs, &mut rng).unwrap();
        let assignment = initial_solution(&problem, &mut rng);

        let fast = total_cost(&problem, &assignment).unwrap();
        let slow = reference_cost(&problem, &assignment);

        assert!(fast >= 0.0);
        assert!(
            (fast - slow).abs() <= 1e-9 * slow.max(1.0),
            "seed {}: {} vs {}",
            seed,
            fast,
            slow
        );
    }
}

#[test]
fn test_evaluation_is_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let problem = random_problem("Random", 30, 5, &mut rng).unwrap();
    let assignment = initial_solution(&problem, &mut rng);

    let first = total_cost(&problem, &assignment).unwrap();
    let second = total_cost(&problem, &assignment).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_evaluate_raw_matrices() {
    let (problem, assignment) = create_test_problem();

    let cost = evaluate(problem.flow(), problem.cost(), &assignment).unwrap();

    assert!((cost - 20.0).abs() < 1e-9);
}

#[test]
fn test_evaluate_rejects_dimension_mismatch() {
    let assignment = Assignment::from_vec(vec![1, 1, 3], 2).unwrap();

    let result = evaluate(&ones(3), &ones(4), &assignment);

    assert_eq!(
        result,
        Err(HubError::DimensionMismatch {
            expected: 3,
            found: 4
        })
    );
}

#[test]
fn test_evaluate_rejects_short_assignment() {
    let assignment = Assignment::from_vec(vec![1, 1, 3], 2).unwrap();

    let result = evaluate(&ones(4), &ones(4), &assignment);

    assert_eq!(
        result,
        Err(HubError::DimensionMismatch {
            expected: 4,
            found: 3
        })
    );
}

#[test]
fn test_total_cost_rejects_assignment_of_wrong_size() {
    let problem = Problem::new("Ones".to_string(), ones(4), ones(4), 2).unwrap();
    let assignment = Assignment::from_vec(vec![1, 1, 3], 2).unwrap();

    assert_eq!(
        total_cost(&problem, &assignment),
        Err(HubError::DimensionMismatch {
            expected: 4,
            found: 3
        })
    );
    assert!(evaluate_breakdown(&problem, &assignment).is_err());
}

#[test]
fn test_total_cost_rejects_wrong_hub_count() {
    let problem = Problem::new("Ones".to_string(), ones(4), ones(4), 2).unwrap();
    let assignment = Assignment::from_vec(vec![1, 1, 1, 1], 1).unwrap();

    assert!(matches!(
        total_cost(&problem, &assignment),
        Err(HubError::InvalidAssignment(_))
    ));
}

#[test]
fn test_deserialized_assignment_is_validated() {
    // Node 1 points at node 2, which is allocated to node 3.
    let result = serde_json::from_str::<Assignment>("[2, 3, 3]");
    assert!(result.is_err());

    let result = serde_json::from_str::<Assignment>("[1, 1, 5]");
    assert!(result.is_err());

    let assignment: Assignment = serde_json::from_str("[1, 1, 3, 3]").unwrap();
    let (problem, expected) = create_test_problem();
    assert_eq!(assignment, expected);
    assert!((total_cost(&problem, &assignment).unwrap() - 20.0).abs() < 1e-9);
}
