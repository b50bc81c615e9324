//! Event types.
//!
//! Submodules:
//! - [`input`] – key down/up and quit events fed to the render loop
pub mod input;
