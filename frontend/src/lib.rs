//! Wellness journey frontend: theme gallery, survey form, per-target storage.

pub mod app;
pub mod context;
pub mod platform;
pub mod screens;
pub mod theme;
pub mod view;
pub mod widgets;
