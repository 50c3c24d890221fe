// Vertex coloring kernels

pub mod first_fit;
pub mod mis_peel;
pub mod parallel;

pub use first_fit::vertex_coloring_first_fit;
pub use mis_peel::vertex_coloring_mis;
pub use parallel::{vertex_coloring_jones_plassmann, vertex_coloring_ldf};
