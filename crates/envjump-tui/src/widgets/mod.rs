//! Popup widgets

pub mod environment_list;
pub mod modal_overlay;
pub mod toast;

pub use environment_list::EnvironmentList;
pub use toast::ToastStack;
