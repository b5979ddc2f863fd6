pub mod guard;
pub mod response;

pub use guard::{guard_middleware, RequestContext};
pub use response::{PageResponse, PageResult};
