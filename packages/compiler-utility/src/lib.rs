pub mod compiler;
pub mod palette;
pub mod rules;
pub mod spacing;
pub mod tokens;

pub use compiler::{compile_records, compile_utilities, utility_class_map, UtilityCompiler};
pub use palette::{color_token, palette_name, PALETTE};
pub use rules::{default_registry, RuleRegistry, UtilityRule};
pub use spacing::{quantize_spacing, sized_token};
pub use tokens::TokenList;
