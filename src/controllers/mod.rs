pub mod chat;
pub mod events;

pub use chat::ChatController;
pub use events::EventsController;
