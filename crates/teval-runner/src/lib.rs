pub mod loader;
pub mod renderer;
