pub mod person_response;

pub use person_response::{PersonResponse, PersonSummary};
