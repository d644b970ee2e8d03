//! Fixed stroke style applied to every exported drawing

pub const FILL: &str = "none";
pub const STROKE: &str = "black";
pub const STROKE_WIDTH: f64 = 60.0;
pub const STROKE_LINECAP: &str = "round";
