pub mod export;
pub mod view;

pub use export::ExportUseCase;
pub use view::{Selection, ViewUseCase};
