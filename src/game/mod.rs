// Game layer: the runner and the platforms it runs across

pub mod characters;
pub mod world;
