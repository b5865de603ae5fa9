use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("File is empty or invalid.")]
    EmptyInput,

    #[error("Could not find the \"{0}\" in the report.")]
    StructuralNotFound(String),

    #[error(
        "Missing required {column} column. Looked for: {}. Found headers: [{}]",
        .aliases.join(", "),
        .found.join(", ")
    )]
    MissingColumn {
        column: String,
        aliases: Vec<String>,
        found: Vec<String>,
    },

    #[error("No valid trades found. Please check file format and content.")]
    NoValidTrades,
}
