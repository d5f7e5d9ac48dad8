pub mod interactive;
pub mod record;

pub use interactive::InteractiveUseCase;
pub use record::{RecordOutcome, RecordRequest, RecordUseCase};
