use thiserror::Error;

#[derive(Error, Debug)]
pub enum FivecolorError {
    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("ページ取得エラー: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("ページ取得に失敗しました (HTTP {0})")]
    HttpStatus(reqwest::StatusCode),

    #[error("色札の見出しが1つも見つかりませんでした")]
    NoColorSections,
}

pub type Result<T> = std::result::Result<T, FivecolorError>;
