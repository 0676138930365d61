pub mod calculation;
pub mod chat;
pub mod lesson;

pub use calculation::*;
pub use chat::*;
pub use lesson::*;
