use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::Mutex;

use lazy_static::lazy_static;
use mpi::collective::SystemOperation;
use mpi::environment::Universe;
use mpi::point_to_point::Status;
use mpi::topology::SystemCommunicator;
use mpi::traits::Communicator;
use mpi::traits::CommunicatorCollectives;
use mpi::traits::Destination;
use mpi::traits::Equivalence;
use mpi::traits::Source;
use mpi::Tag;
use mpi::Threading;

use super::collective_communicator::SumCommunicator;
use super::sized_communicator::SizedCommunicator;
use super::world_communicator::WorldCommunicator;
use super::Rank;
use crate::error::Result;

/// A wrapper around universe which contains the universe in an
/// Option. This allows calling .take at program completion so that
/// the Universe is dropped which will call MPI_FINALIZE.  This is
/// necessary because anything in a lazy_static will never be dropped.
pub struct StaticUniverse(Arc<Mutex<Option<Universe>>>);

impl StaticUniverse {
    pub fn world(&self) -> SystemCommunicator {
        self.0.lock().unwrap().as_ref().unwrap().world()
    }

    pub fn drop(&self) {
        let _ = self.0.lock().unwrap().take();
    }
}

lazy_static! {
    pub static ref MPI_UNIVERSE: StaticUniverse = {
        let threading = Threading::Funneled;
        let (universe, threading_initialized) = mpi::initialize_with_threading(threading).unwrap();
        assert_eq!(
            threading, threading_initialized,
            "Could not initialize MPI with funneled threading"
        );
        StaticUniverse(Arc::new(Mutex::new(Some(universe))))
    };
}

#[derive(Clone)]
pub struct MpiWorld<T> {
    world: SystemCommunicator,
    tag: Tag,
    _marker: PhantomData<T>,
}

impl<T> MpiWorld<T> {
    pub fn new(tag: Tag) -> Self {
        let world = MPI_UNIVERSE.world();
        Self {
            world,
            tag,
            _marker: PhantomData,
        }
    }
}

impl<T> WorldCommunicator<T> for MpiWorld<T>
where
    T: Equivalence,
{
    fn send_vec(&mut self, rank: Rank, data: Vec<T>) -> Result<()> {
        let num = data.len();
        let process = self.world.process_at_rank(rank);
        process.send_with_tag(&num, self.tag);
        if num > 0 {
            process.send_with_tag(&data[..], self.tag);
        }
        Ok(())
    }

    fn receive_vec(&mut self, rank: Rank) -> Result<Vec<T>> {
        let process = self.world.process_at_rank(rank);
        let (num_received, _): (usize, Status) = process.receive_with_tag(self.tag);
        if num_received > 0 {
            let (data, _) = process.receive_vec_with_tag(self.tag);
            return Ok(data);
        }
        Ok(vec![])
    }
}

impl<T> SizedCommunicator for MpiWorld<T> {
    fn rank(&self) -> Rank {
        self.world.rank()
    }

    fn size(&self) -> usize {
        self.world.size() as usize
    }
}

impl<T: Equivalence + Clone> SumCommunicator<T> for MpiWorld<T> {
    fn collective_sum(&mut self, send: &T) -> Result<T> {
        let mut result = send.clone();
        self.world
            .all_reduce_into(send, &mut result, SystemOperation::sum());
        Ok(result)
    }
}
