//! Basic example of using the hub location library.

use clap::Parser;
use hub_location::neighborhood::MoveKind;
use hub_location::objective::evaluate_breakdown;
use hub_location::utils::{format_clusters, random_problem};
use hub_location::{initial_solution, Config, Neighborhood};
use log::info;

/// Build a random instance and propose one neighbor of each kind.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of nodes
    #[arg(long, default_value_t = 25)]
    nodes: usize,
    /// Number of hubs
    #[arg(long, default_value_t = 4)]
    hubs: usize,
    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = Config::new();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut rng = config.rng();

    let problem = random_problem("random", args.nodes, args.hubs, &mut rng)?;
    info!(
        "Generated instance with {} nodes, {} hubs and total flow {:.0}",
        problem.node_count(),
        problem.number_of_hubs(),
        problem.total_flow()
    );

    let initial = initial_solution(&problem, &mut rng);
    let initial_cost = evaluate_breakdown(&problem, &initial)?;
    println!(
        "Initial: access {:.2}, transfer {:.2}, total {:.2}",
        initial_cost.access, initial_cost.transfer, initial_cost.total
    );
    print!("{}", format_clusters(&initial));

    let neighborhood = Neighborhood::from_config(&config, problem.node_count());
    let mut best = (initial_cost.total, initial.clone());

    for kind in MoveKind::ALL {
        let candidate = neighborhood.propose(kind, &initial, &mut rng)?;
        let cost = evaluate_breakdown(&problem, &candidate)?.total;
        println!("Type {} ({}): total {:.2}", kind.number(), kind, cost);

        if cost < best.0 {
            best = (cost, candidate);
        }
    }

    println!("Best cost: {:.2}", best.0);
    println!("{}", serde_json::to_string(&best.1)?);

    Ok(())
}
