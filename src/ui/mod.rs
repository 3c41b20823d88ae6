pub mod background;
pub mod game_common;
pub mod round_scene;
pub mod title_screen;

pub use background::Background;
pub use round_scene::{render_game_over, render_round, Viewport};
pub use title_screen::render_title;
