//! CLI command handlers. Each command is in its own file.

mod folders;
mod materials;
mod textures;

pub use folders::run_folders;
pub use materials::run_materials;
pub use textures::run_textures;
