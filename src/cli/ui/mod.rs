pub mod meter;

pub use meter::{meter_caption, render_meter, value_banner, METER_WIDTH};
