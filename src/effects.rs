pub mod composite;
pub mod flash;
pub mod grid;
pub mod mosaic;
