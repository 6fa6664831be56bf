pub mod schools;

pub use schools::{SchoolDistanceRow, SchoolRow};
