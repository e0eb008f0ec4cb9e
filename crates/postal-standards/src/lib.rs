#![deny(unsafe_code)]

pub mod error;
pub mod loaders;
pub mod manifest;
pub mod paths;
pub mod registry;

pub use crate::error::{Result, StandardsError};
pub use crate::loaders::load_rule_table;
pub use crate::paths::{
    STANDARDS_ENV_VAR, bundled_standards_dir, resolve_standards_root, standards_root,
};
pub use crate::registry::{load_default_rule_table, load_rule_table_from};
