//! CLI Commands
//!
//! All md4sum CLI commands organized as separate modules.

mod check;
mod hash;

pub use check::check_mode;
pub use hash::{hash_files, hash_text, prompt_and_hash};
