pub mod breathe;
pub mod ease;
pub mod sequence;
