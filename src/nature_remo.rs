mod client;
mod device;
mod reading;

pub use client::*;
pub use device::*;
pub use reading::*;
