//! Concrete completion client backends.

pub mod gemini;
