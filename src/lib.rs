pub mod compute;
pub mod engine;
pub mod entities;
pub mod error;
pub mod factory;
pub mod input;
pub mod resources;
pub mod sprites;
pub mod surface;
