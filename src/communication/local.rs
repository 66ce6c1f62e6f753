use std::iter::Sum;
use std::sync::mpsc::channel;
use std::sync::mpsc::Receiver;
use std::sync::mpsc::Sender;

use super::collective_communicator::SumCommunicator;
use super::sized_communicator::SizedCommunicator;
use super::world_communicator::WorldCommunicator;
use super::CollectiveCommunicator;
use super::DataByRank;
use super::Rank;
use crate::error::Error;
use crate::error::Result;

/// A communicator over in-process mpsc channels, with one thread
/// playing the role of each rank. Used by tests and by the default
/// (non-MPI) binary.
pub struct LocalCommunicator<T> {
    senders: DataByRank<Sender<Vec<T>>>,
    receivers: DataByRank<Receiver<Vec<T>>>,
    rank: Rank,
    size: usize,
}

impl<T> LocalCommunicator<T> {
    pub fn new(
        rank: Rank,
        size: usize,
        senders: DataByRank<Sender<Vec<T>>>,
        receivers: DataByRank<Receiver<Vec<T>>>,
    ) -> Self {
        Self {
            senders,
            receivers,
            rank,
            size,
        }
    }
}

/// Wires up a full mesh of channels between `num_ranks` ranks and
/// returns one communicator per rank, to be moved into its thread.
pub fn get_local_communicators<T>(num_ranks: usize) -> DataByRank<LocalCommunicator<T>> {
    let mut senders_and_receivers: Vec<Vec<_>> = (0..num_ranks)
        .map(|_| {
            (0..num_ranks)
                .map(|_| {
                    let (sender, receiver) = channel();
                    (Some(sender), Some(receiver))
                })
                .collect()
        })
        .collect();
    let mut communicators = DataByRank::empty();
    for rank in 0..num_ranks {
        let mut senders = DataByRank::empty();
        let mut receivers = DataByRank::empty();
        for rank2 in 0..num_ranks {
            if rank == rank2 {
                continue;
            }
            senders.insert(
                rank2 as Rank,
                senders_and_receivers[rank][rank2].0.take().unwrap(),
            );
            receivers.insert(
                rank2 as Rank,
                senders_and_receivers[rank2][rank].1.take().unwrap(),
            );
        }
        communicators.insert(
            rank as Rank,
            LocalCommunicator::new(rank as Rank, num_ranks, senders, receivers),
        );
    }
    communicators
}

impl<T> WorldCommunicator<T> for LocalCommunicator<T> {
    fn send_vec(&mut self, rank: Rank, data: Vec<T>) -> Result<()> {
        let sender = self
            .senders
            .get(&rank)
            .ok_or_else(|| Error::InvalidArgument(format!("no channel to rank {}", rank)))?;
        sender
            .send(data)
            .map_err(|_| Error::CommunicationFailure(format!("rank {} hung up", rank)))
    }

    fn receive_vec(&mut self, rank: Rank) -> Result<Vec<T>> {
        let receiver = self
            .receivers
            .get(&rank)
            .ok_or_else(|| Error::InvalidArgument(format!("no channel to rank {}", rank)))?;
        receiver
            .recv()
            .map_err(|_| Error::CommunicationFailure(format!("rank {} hung up", rank)))
    }
}

impl<T> SizedCommunicator for LocalCommunicator<T> {
    fn rank(&self) -> Rank {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }
}

impl<T: Clone> CollectiveCommunicator<T> for LocalCommunicator<T> {
    fn all_gather(&mut self, data: &T) -> Result<Vec<T>> {
        for rank in self.other_ranks() {
            self.send_vec(rank, vec![data.clone()])?;
        }
        let mut result = vec![];
        for rank in self.all_ranks() {
            if rank == self.rank {
                result.push(data.clone());
            } else {
                let received = self.receive_vec(rank)?;
                debug_assert_eq!(received.len(), 1);
                result.extend(received);
            }
        }
        Ok(result)
    }
}

impl<T: Sum + Clone> SumCommunicator<T> for LocalCommunicator<T> {
    fn collective_sum(&mut self, send: &T) -> Result<T> {
        // We don't care about efficiency in the local communicator
        Ok(self.all_gather(send)?.into_iter().sum())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::get_local_communicators;
    use crate::communication::Rank;
    use crate::communication::SumCommunicator;
    use crate::communication::WorldCommunicator;
    use crate::error::Error;

    #[test]
    fn send_and_receive() {
        let mut communicators = get_local_communicators::<i32>(2);
        let mut communicator1 = communicators.remove(&1).unwrap();
        let mut communicator0 = communicators.remove(&0).unwrap();
        let thread = thread::spawn(move || {
            communicator1.send_vec(0, vec![1, 2, 3]).unwrap();
        });
        assert_eq!(communicator0.receive_vec(1).unwrap(), vec![1, 2, 3]);
        thread.join().unwrap();
    }

    #[test]
    fn collective_sum_over_all_ranks() {
        let num_ranks = 4;
        let mut communicators = get_local_communicators::<i32>(num_ranks);
        let threads: Vec<_> = (0..num_ranks as Rank)
            .map(|rank| {
                let mut communicator = communicators.remove(&rank).unwrap();
                thread::spawn(move || communicator.collective_sum(&(rank + 1)).unwrap())
            })
            .collect();
        for thread in threads {
            assert_eq!(thread.join().unwrap(), 10);
        }
    }

    #[test]
    fn dropped_peer_fails_the_collective() {
        let mut communicators = get_local_communicators::<i32>(2);
        let communicator1 = communicators.remove(&1).unwrap();
        let mut communicator0 = communicators.remove(&0).unwrap();
        drop(communicator1);
        let result = communicator0.collective_sum(&1);
        assert!(matches!(result, Err(Error::CommunicationFailure(_))));
    }
}
