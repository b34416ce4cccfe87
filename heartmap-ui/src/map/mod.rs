//! Kakao Maps integration
//!
//! [`KakaoProvider`] implements the core `MapProvider` trait over the Kakao
//! Maps JavaScript SDK. [`MapBinding`] ties any provider to the page's
//! location signal.

mod binding;
mod kakao;
mod overlay;
mod sdk;

pub use binding::MapBinding;
pub use kakao::KakaoProvider;
