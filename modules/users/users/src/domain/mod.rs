//! Domain layer - business rules for the user lifecycle.
//!
//! ## Layering Rules
//!
//! The domain layer:
//! - **MAY** import: `users_sdk` (contract types)
//! - **MUST NOT** import: `api::*` or `infra::*` (one-way dependency: API/Infra → Domain)
//! - **Defines**: ports (`Clock`, `RegistryClient`) and repository traits implemented by `infra`

pub mod error;
pub mod ports;
pub mod repos;
pub mod service;

/// Mask a birth number for logs, keeping only the last four characters.
#[must_use]
pub fn mask_birth_number(birth_number: &str) -> String {
    let chars: Vec<char> = birth_number.chars().collect();
    let visible = chars.len().min(4);
    let hidden = chars.len() - visible;
    let mut masked = "*".repeat(hidden);
    masked.extend(&chars[hidden..]);
    masked
}
