pub mod camera;
pub mod ray;
pub mod sdf_instance;
