pub mod sentences;
pub mod stopwords;
