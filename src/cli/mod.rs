pub mod args;
pub mod command;
pub mod error;
pub mod input;
pub mod menu;
pub mod session;

pub use args::Args;
pub use command::MenuCommand;
pub use error::{CliError, FormatError};
pub use menu::Menu;
pub use session::run_session;
