pub mod message_response;

pub use message_response::MessageResponse;
