mod countdown;
mod deeplink;
mod lifecycle;
mod schema;

pub use countdown::*;
pub use deeplink::*;
pub use lifecycle::*;
pub use schema::*;
