//! Dioxus UI components for fitroom.
//!
//! Provides the stateless button, source-selection tab bar, model and
//! product picker grids, photo upload panel, and the preview panel.

mod button;
mod model_grid;
mod preview;
mod product_grid;
mod tabs;
mod upload;

pub use button::Button;
pub use button::ButtonSize;
pub use button::ButtonVariant;
pub use model_grid::ModelGrid;
pub use preview::PreviewPanel;
pub use product_grid::ProductGrid;
pub use tabs::TabBar;
pub use upload::PhotoUpload;
