mod auth_mode;
mod cli_mode;
mod color_mode;
mod discover_mode;
mod input_utils;
mod paths_mode;
mod read_mode;
mod use_color;
mod write_mode;

pub use auth_mode::{login_mode, logout_mode, register_mode};
pub use cli_mode::{CliModeResult, Context};
pub use color_mode::color_mode;
pub use discover_mode::{search_mode, suggestions_mode};
pub use paths_mode::paths_mode;
pub use read_mode::{list_mode, show_mode};
pub use use_color::use_color;
pub use write_mode::{add_mode, delete_mode};
