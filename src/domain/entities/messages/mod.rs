//! 쪽지 엔티티 모듈

pub mod message;

pub use message::Message;
