use thiserror::Error;

#[derive(Error, Debug)]
pub enum JavaParseError {
    #[error("Failed to load Java grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("Parser produced no syntax tree")]
    NoTree,
    /// 1-based position of the first erroneous or missing node.
    #[error("Syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },
}

pub type Result<T> = std::result::Result<T, JavaParseError>;
