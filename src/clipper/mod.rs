// Clipper module - boolean operations and offsetting on integer polygons

pub mod clipper;
pub mod clipper_base;
pub mod clipper_offset;
pub mod clipper_wrapper;
pub mod enums;
pub mod intersect_node;
pub mod join;
pub mod local_minima;
pub mod out_rec;
pub mod poly_tree;
pub mod scanbeam;
pub mod t_edge;

#[cfg(test)]
pub mod tests;

pub use enums::*;
