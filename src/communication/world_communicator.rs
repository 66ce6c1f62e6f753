use super::Rank;
use crate::error::Result;

pub trait WorldCommunicator<T> {
    fn send_vec(&mut self, rank: Rank, data: Vec<T>) -> Result<()>;
    fn receive_vec(&mut self, rank: Rank) -> Result<Vec<T>>;
}
