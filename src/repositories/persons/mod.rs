pub mod person_repo;
