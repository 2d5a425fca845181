pub mod camera;
pub mod models;
pub mod selection;
