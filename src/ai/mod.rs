pub mod local;
pub mod topics;

pub use local::LocalStylist;
pub use topics::Topic;
