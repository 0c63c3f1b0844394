mod field_message;
mod layout;
mod surface_card;
mod theme_card;
mod theme_modal;

pub use field_message::FieldMessage;
pub use layout::Layout;
pub use surface_card::SurfaceCard;
pub use theme_card::ThemeCard;
pub use theme_modal::ThemeModal;
