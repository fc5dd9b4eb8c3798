//! Console front end: screen-clearing renderer and stdin player.

mod player;
mod renderer;

pub use player::ConsolePlayer;
pub use renderer::ConsoleRenderer;
