mod cleaner;
mod pretty;

pub use cleaner::{clean_markup, is_noise_attribute, MarkupCleaner};
pub use pretty::{pretty_print, PrettyOptions, PrettyPrinter, INLINE_TAGS};
