pub mod attendance;
pub mod projection;

pub use attendance::Standing;
pub use projection::ValidationError;
