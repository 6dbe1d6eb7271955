pub mod carriers;
pub mod duration;
pub mod model;

pub use carriers::carrier_name;
pub use duration::format_duration;
