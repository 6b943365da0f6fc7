//! Page state for the portfolio site
//!
//! Everything here is independent of the browser:
//! - theme resolution against a preference store
//! - navigation menu/dropdown state and scroll spy
//! - project filtering and alternating layout
//! - typing effect sequencing and the staged init plan
//!
//! The `portfolio-ui` crate renders these states onto the real DOM.

pub mod animation;
pub mod config;
pub mod error;
pub mod filter;
pub mod init;
pub mod nav;
pub mod theme;

pub use config::PageConfig;
pub use error::{PageError, Result};
