use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    HtmlParse(String),
    MissingCell(String),
}

impl Error {
    pub fn html_parse_error(msg: &str) -> Self {
        Self::HtmlParse(msg.to_string())
    }
    pub fn missing_cell_error(msg: &str) -> Self {
        Self::MissingCell(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "HTML Parse Error: {msg}"),
            Self::MissingCell(msg) => write!(f, "Missing Cell: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
