//! UI Components
//!
//! Leptos components making up the page.

pub mod header;
pub mod loading;
pub mod location_form;
pub mod location_list;
pub mod map_surface;

pub use header::Header;
pub use loading::Loading;
pub use location_form::AddLocationForm;
pub use location_list::LocationList;
pub use map_surface::MapSurface;
