pub mod check;
pub mod live;
pub mod misc;
pub mod rules;
