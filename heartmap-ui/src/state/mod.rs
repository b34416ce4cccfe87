//! State Management

pub mod global;

pub use global::{provide_page_state, PageState};
