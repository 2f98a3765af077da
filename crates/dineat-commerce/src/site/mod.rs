//! Page helpers shared by every screen: language preference, the mobile
//! navigation menu, form validation and HTML escaping.

mod html;
mod language;
mod nav;
mod validate;

pub use html::escape_html;
pub use language::{Language, LanguagePreference};
pub use nav::NavMenu;
pub use validate::{
    is_valid_email, is_valid_phone, validate_field, validate_form, FieldError, FieldKind,
    FormField,
};
