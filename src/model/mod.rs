mod event;
mod league;
mod sport;
mod status;

pub use event::*;
pub use league::*;
pub use sport::*;
pub use status::*;
