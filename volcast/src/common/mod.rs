mod bound_box;
mod ray;

pub use bound_box::{Axis, BoundBox};
pub use ray::Ray;
