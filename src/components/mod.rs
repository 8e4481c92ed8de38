pub mod contact;
pub mod cursor;
pub mod hero;
pub mod navigation;
pub mod projects;
pub mod toast;
