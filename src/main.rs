use clap::Parser;
use distdot::command_line_options::CommandLineOptions;
use distdot::error::Result;
use log::error;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use simplelog::TerminalMode;

fn main() {
    let opts = CommandLineOptions::parse();
    initialize_logging(opts.verbosity);
    if let Err(err) = run(&opts) {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn initialize_logging(verbosity: usize) {
    let level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();
}

fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(not(feature = "mpi"))]
fn run(opts: &CommandLineOptions) -> Result<()> {
    use std::thread;

    use distdot::communication::get_local_communicators;
    use distdot::communication::Rank;
    use distdot::communication::WorldSize;
    use distdot::dot::distributed_dot_product;
    use distdot::dot::dot_product;
    use distdot::error::Error;
    use distdot::rand::random_vector;
    use log::debug;

    let num_ranks = WorldSize(opts.ranks);
    if *num_ranks == 0 {
        return Err(Error::InvalidArgument("need at least one rank".into()));
    }
    let mut communicators = get_local_communicators(*num_ranks);
    let threads: Vec<_> = (1..*num_ranks as Rank)
        .map(|rank| {
            let mut communicator = communicators.remove(&rank).unwrap();
            thread::spawn(move || distributed_dot_product(&mut communicator, &[], &[]))
        })
        .collect();
    let mut communicator = communicators.remove(&0).unwrap();
    let mut rng = get_rng(opts.seed);
    let a = random_vector(&mut rng, opts.size);
    let b = random_vector(&mut rng, opts.size);
    let result = distributed_dot_product(&mut communicator, &a, &b)?;
    for thread in threads {
        thread.join().unwrap()?;
    }
    info!(
        "Dot product over {} elements on {} ranks: {}",
        opts.size, *num_ranks, result
    );
    debug!("Serial result: {}", dot_product(&a, &b)?);
    Ok(())
}

#[cfg(feature = "mpi")]
fn run(opts: &CommandLineOptions) -> Result<()> {
    use distdot::communication::MpiWorld;
    use distdot::communication::SizedCommunicator;
    use distdot::communication::WorldRank;
    use distdot::communication::MPI_UNIVERSE;
    use distdot::dot::distributed_dot_product;
    use distdot::rand::random_vector;

    let mut world = MpiWorld::new(0);
    let is_main = WorldRank(world.rank()).is_main();
    let (a, b) = if is_main {
        let mut rng = get_rng(opts.seed);
        (
            random_vector(&mut rng, opts.size),
            random_vector(&mut rng, opts.size),
        )
    } else {
        (vec![], vec![])
    };
    let result = distributed_dot_product(&mut world, &a, &b);
    if let Ok(result) = &result {
        if is_main {
            info!(
                "Dot product over {} elements on {} ranks: {}",
                opts.size,
                world.size(),
                result
            );
        }
    }
    MPI_UNIVERSE.drop();
    result.map(|_| ())
}
