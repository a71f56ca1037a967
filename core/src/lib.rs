pub mod index;
pub mod moosify;
pub mod paths;
pub mod persist;
pub mod search;
pub mod tokenizer;
pub mod window;

pub use index::{CatalogEntry, InvertedIndex};
pub use paths::DataPaths;
pub use search::{query_tokens, rank, search, QueryError, SearchResult};
