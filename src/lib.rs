pub mod command_line_options;
pub mod communication;
pub mod dot;
pub mod error;
pub mod rand;

pub mod prelude {
    pub use super::communication::get_local_communicators;
    pub use super::communication::Rank;
    pub use super::communication::SizedCommunicator;
    pub use super::communication::WorldRank;
    pub use super::communication::WorldSize;
    pub use super::dot::distributed_dot_product;
    pub use super::dot::dot_product;
    pub use super::error::Error;
    pub use super::error::Result;
    pub use super::rand::random_vector;
}
