// Adapters layer: concrete implementations of the domain ports.

pub mod ai_service;
pub mod memory;
pub mod openai;
