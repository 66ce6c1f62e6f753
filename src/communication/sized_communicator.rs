use super::Rank;

pub trait SizedCommunicator {
    fn size(&self) -> usize;
    fn rank(&self) -> Rank;

    fn all_ranks(&self) -> std::ops::Range<Rank> {
        0..self.size() as Rank
    }

    fn other_ranks(&self) -> Vec<Rank> {
        self.all_ranks().filter(|rank| *rank != self.rank()).collect()
    }
}
