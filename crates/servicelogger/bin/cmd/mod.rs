pub(crate) mod browser;
pub(crate) mod config;
pub(crate) mod list;
pub(crate) mod post;
pub(crate) mod search;

pub use list::ListArgs;
pub use post::PostArgs;
pub use search::SearchArgs;
