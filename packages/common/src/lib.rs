pub mod color;
pub mod declarations;
pub mod value;
pub mod visitor;

pub use color::{is_color_property, normalize_color, rgb_to_hex, COLOR_PROPERTIES};
pub use declarations::{Declaration, Declarations};
pub use value::{escape_whitespace, format_number, parse_number, parse_px, split_components};
pub use visitor::*;
