pub mod command;

pub use command::ViewCommand;
