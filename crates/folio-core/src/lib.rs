//! Platform-neutral core of the folio front-end.
//!
//! Nothing here touches the DOM. The web crate owns one instance of each
//! engine, feeds it events and frame ticks, and applies what comes back.

pub mod catalog;
pub mod constants;
pub mod contact;
pub mod counter;
pub mod easing;
pub mod gallery;
pub mod intro;
pub mod nav;
pub mod particles;
pub mod pointer;
pub mod theme;
pub mod timing;
pub mod tween;
pub mod visibility;

pub use catalog::*;
pub use gallery::*;
pub use pointer::*;
pub use timing::*;
