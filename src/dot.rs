use std::ops::Range;

use log::debug;

use crate::communication::Rank;
use crate::communication::SizedCommunicator;
use crate::communication::SumCommunicator;
use crate::communication::WorldCommunicator;
use crate::communication::WorldRank;
use crate::communication::MAIN_RANK;
use crate::error::Error;
use crate::error::Result;

/// Computes the dot product of two equal-length slices.
///
/// Fails with [`Error::InvalidArgument`] when the lengths differ;
/// empty slices yield zero. Arithmetic is plain `i32`, overflow
/// avoidance is the caller's responsibility.
pub fn dot_product(a: &[i32], b: &[i32]) -> Result<i32> {
    if a.len() != b.len() {
        return Err(Error::InvalidArgument(format!(
            "dot product of vectors with lengths {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// The contiguous index range assigned to `rank` when `num_elements`
/// elements are split over `num_ranks` ranks. The first
/// `num_elements % num_ranks` ranks receive one element more than the
/// rest, so the ranges cover `0..num_elements` without gaps or overlap.
pub fn partition(num_elements: usize, num_ranks: usize, rank: Rank) -> Range<usize> {
    let rank = rank as usize;
    let chunk = num_elements / num_ranks;
    let remainder = num_elements % num_ranks;
    let start = rank * chunk + rank.min(remainder);
    let end = start + chunk + usize::from(rank < remainder);
    start..end
}

/// Computes the dot product of two vectors known in full only on the
/// main rank, by scattering matching partitions to every rank,
/// computing the local dot product there and summing the partial
/// results over the communicator.
///
/// This is a collective call: every rank of the communicator has to
/// enter it, and no rank returns before all partial sums have been
/// combined. The result of the reduction is an allreduce, so every
/// rank returns the same value. Inputs passed on other ranks are
/// ignored.
pub fn distributed_dot_product<C>(communicator: &mut C, a: &[i32], b: &[i32]) -> Result<i32>
where
    C: SizedCommunicator + WorldCommunicator<i32> + SumCommunicator<i32>,
{
    let (local_a, local_b) = if WorldRank(communicator.rank()).is_main() {
        if a.len() != b.len() {
            return Err(Error::InvalidArgument(format!(
                "distributed dot product of vectors with lengths {} and {}",
                a.len(),
                b.len()
            )));
        }
        let num_ranks = communicator.size();
        for rank in communicator.other_ranks() {
            let range = partition(a.len(), num_ranks, rank);
            communicator.send_vec(rank, a[range.clone()].to_vec())?;
            communicator.send_vec(rank, b[range].to_vec())?;
        }
        let own = partition(a.len(), num_ranks, communicator.rank());
        (a[own.clone()].to_vec(), b[own].to_vec())
    } else {
        let local_a = communicator.receive_vec(MAIN_RANK)?;
        let local_b = communicator.receive_vec(MAIN_RANK)?;
        (local_a, local_b)
    };
    let partial_sum = dot_product(&local_a, &local_b)?;
    debug!(
        "Rank {}: partial sum over {} elements: {}",
        communicator.rank(),
        local_a.len(),
        partial_sum
    );
    communicator.collective_sum(&partial_sum)
}
