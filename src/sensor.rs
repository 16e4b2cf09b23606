mod capability;
mod device;
mod reading;

pub use capability::*;
pub use device::*;
pub use reading::*;
