pub mod world;

pub use world::BizdeskWorld;
