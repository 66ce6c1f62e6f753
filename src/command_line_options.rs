use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct CommandLineOptions {
    /// Length of the two randomly generated input vectors.
    #[clap(long, default_value_t = 1000)]
    pub size: usize,
    /// Number of ranks to run on.
    #[cfg(not(feature = "mpi"))]
    #[clap(long, default_value_t = 4)]
    pub ranks: usize,
    /// Seed for the input vector generator. Random if not given.
    #[clap(long)]
    pub seed: Option<u64>,
    #[clap(short, parse(from_occurrences))]
    pub verbosity: usize,
}
