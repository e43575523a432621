mod documents;
mod page;
mod tabs;

pub use page::ProductViewPage;
