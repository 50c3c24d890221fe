// Maximal independent set kernels

pub mod distance_k;
pub mod parallel;
pub mod serial;

pub use distance_k::{csr_propagate_max, mis_k_parallel};
pub use parallel::mis_parallel;
pub use serial::mis_serial;
