pub mod api;
pub mod envelope;
pub mod error;
pub mod types;

pub use api::NewsApi;
pub use envelope::{Envelope, Status};
pub use error::Error;
pub use types::{Article, ArticleId};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::api::NewsApi;
    pub use crate::envelope::{Envelope, Status};
    pub use crate::types::{Article, ArticleId};
    pub use crate::{Error, Result};
}
