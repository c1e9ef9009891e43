//! fitroom-io: Browser I/O and Dioxus component library.
//!
//! Handles uploaded-photo decoding into data URLs, analytics events,
//! and provides the reusable UI components for the fitting room page.

pub mod analytics;
pub mod components;
pub mod encode;

pub use components::{
    Button, ButtonSize, ButtonVariant, ModelGrid, PhotoUpload, PreviewPanel, ProductGrid, TabBar,
};
pub use encode::UploadError;
