//! Dictionary lookups
//!
//! The game only needs one question answered: is this string a real word in the
//! configured language? Anything that can answer it implements `DictionaryOracle`.

mod oracle;
mod word_list;

pub use oracle::{DictionaryOracle, Language};
pub use word_list::WordListDictionary;
