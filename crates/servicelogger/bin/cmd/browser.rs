pub(crate) mod app;
pub(crate) mod detail;
pub(crate) mod item;
pub(crate) mod layout;
pub(crate) mod list;
pub(crate) mod view;

pub(crate) use app::browse;
