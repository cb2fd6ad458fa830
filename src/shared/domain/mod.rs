pub mod pagination;
pub mod region;

pub use pagination::{PageRequest, PageResult};
pub use region::{Region, UnknownRegion};
