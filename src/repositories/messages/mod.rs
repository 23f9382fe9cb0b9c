pub mod message_repo;
