pub mod chat;
pub mod completion;
pub mod event;

pub use chat::{Author, ChatEntry, ChatInput, ChatState};
pub use completion::{CompletionRequest, CompletionResponse};
pub use event::{Event, EventsState};
