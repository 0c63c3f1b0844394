mod form;
mod gallery;
mod not_found;

pub use form::FormScreen;
pub use gallery::GalleryScreen;
pub use not_found::NotFoundScreen;
