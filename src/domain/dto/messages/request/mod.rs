pub mod create_message;
pub mod update_message;

pub use create_message::CreateMessageRequest;
pub use update_message::UpdateMessageRequest;
