pub mod completion;
pub mod event_feed;
pub mod http;

pub use completion::CompletionClient;
pub use event_feed::EventFeedClient;
