pub mod voyage;
pub mod voyage_manager;

pub use voyage::{CompleteFn, ProgressFn, Voyage, VoyageState};
pub use voyage_manager::{VoyageHandle, VoyageManager};
