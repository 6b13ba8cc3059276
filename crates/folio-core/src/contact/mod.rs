//! Contact form: fields, validation, submission guard and notices.

pub mod form;
pub mod guard;
pub mod notice;

pub use form::{ContactForm, FormField, ValidationError};
pub use guard::ContactController;
pub use notice::{Notice, NoticeSeverity};
