//! Built-in lint rules.

pub mod typescript_errors;

pub use typescript_errors::TypeScriptErrorsRule;
