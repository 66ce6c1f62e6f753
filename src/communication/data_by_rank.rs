use std::collections::HashMap;

use super::Rank;

pub struct DataByRank<T>(HashMap<Rank, T>);

impl<T> DataByRank<T> {
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    pub fn get(&self, rank: &Rank) -> Option<&T> {
        self.0.get(rank)
    }

    pub fn insert(&mut self, rank: Rank, data: T) {
        self.0.insert(rank, data);
    }

    pub fn remove(&mut self, rank: &Rank) -> Option<T> {
        self.0.remove(rank)
    }
}
