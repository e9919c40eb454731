pub mod amplify;
pub mod damping;
pub mod info;
pub mod list;
pub mod output;
pub mod ring;
pub mod stability;
pub mod version;
