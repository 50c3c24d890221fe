// Traversal kernels

pub mod bfs;
pub mod components;

pub use bfs::breadth_first_search;
pub use components::connected_components;
