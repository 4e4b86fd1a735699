pub mod dictionary;
pub mod error;
pub mod language;
pub mod link_index;
pub mod lookup;
pub mod preprocess;
pub mod types;


pub use dictionary::{DictionarySource, Transport};
pub use error::{LookupError, ParseError, TransportError};
pub use link_index::{LinkIndex, LinkIndexHandle};
pub use lookup::Aggregator;
