// Clustering kernels

pub mod bellman_ford;
pub mod center;
pub mod incidence;
pub mod lloyd;

pub use bellman_ford::{bellman_ford, bellman_ford_balanced};
pub use center::cluster_center;
pub use incidence::cluster_node_incidence;
pub use lloyd::{lloyd_cluster, lloyd_cluster_exact};
