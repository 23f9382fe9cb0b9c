pub mod create_person;
pub mod update_person;
pub mod upload_picture;

pub use create_person::CreatePersonRequest;
pub use update_person::UpdatePersonRequest;
pub use upload_picture::{PictureFormat, PictureUpload};
