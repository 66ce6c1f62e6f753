use derive_more::Deref;
use derive_more::DerefMut;

mod collective_communicator;
mod data_by_rank;
mod local;
mod sized_communicator;
mod world_communicator;

#[cfg(feature = "mpi")]
mod mpi_world;

pub use collective_communicator::CollectiveCommunicator;
pub use collective_communicator::SumCommunicator;
pub use data_by_rank::DataByRank;
pub use local::get_local_communicators;
pub use local::LocalCommunicator;
pub use sized_communicator::SizedCommunicator;
pub use world_communicator::WorldCommunicator;

#[cfg(feature = "mpi")]
pub use self::mpi_world::MpiWorld;
#[cfg(feature = "mpi")]
pub use self::mpi_world::MPI_UNIVERSE;

#[cfg(feature = "mpi")]
pub type Rank = mpi::Rank;
#[cfg(not(feature = "mpi"))]
pub type Rank = i32;

/// The rank that owns the full input data and initiates distribution.
pub const MAIN_RANK: Rank = 0;

#[derive(Clone, Copy, PartialEq, Eq, Deref, DerefMut)]
pub struct WorldSize(pub usize);

#[derive(Clone, Copy, PartialEq, Eq, Deref, DerefMut, Hash)]
pub struct WorldRank(pub Rank);

impl WorldRank {
    pub fn is_main(&self) -> bool {
        self.0 == MAIN_RANK
    }
}
