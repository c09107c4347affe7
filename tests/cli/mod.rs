
mod calc;
mod emails;
mod misc;
mod names;
mod unscored;
mod validate;
