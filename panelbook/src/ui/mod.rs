pub mod gallery;
pub mod menubar;
