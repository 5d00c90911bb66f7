mod article;
mod category;
mod driver;
mod list;
mod search;

pub use article::ArticleFeed;
pub use category::CategoryFeed;
pub use list::ListFeed;
pub use search::{SearchFeed, MIN_SEARCH_LEN, SEARCH_DEBOUNCE};

pub mod prelude {
    pub use crate::{ArticleFeed, CategoryFeed, ListFeed, SearchFeed};
    pub use mp_core::{Article, ArticleId, Envelope, Status};
}
