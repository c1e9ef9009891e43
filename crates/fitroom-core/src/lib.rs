//! fitroom-core: catalog data and the selection state machine (sans-IO).
//!
//! Holds the static model/product catalogs, the [`SelectionState`]
//! record with its transition functions, and the pure view-model
//! derivation. No browser APIs, no rendering — everything here is
//! unit-testable on any target.

pub mod catalog;
pub mod selection;
pub mod view;

pub use catalog::{Category, FitModel, ModelId, Price, Product, ProductId};
pub use selection::{SelectionState, Tab};
pub use view::{PageView, PreviewContent, derive_page};
