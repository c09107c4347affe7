//! CLI commands for gradebook

pub mod calc;
pub mod dispatch;
pub mod emails;
pub mod helpers;
pub mod names;
pub mod new;
pub mod unscored;
pub mod validate;
