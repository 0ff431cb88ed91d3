pub mod bombs;
pub mod movement;
pub mod render;
pub mod rules;

pub use bombs::*;
pub use movement::*;
pub use render::*;
pub use rules::*;
