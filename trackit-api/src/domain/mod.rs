pub mod access;
pub mod role;
pub mod session;
pub mod shipping;

pub use access::*;
pub use role::*;
pub use session::*;
pub use shipping::*;
