//! 参照ページの取得

use crate::error::{FivecolorError, Result};
use std::time::Duration;

/// URLをGETして本文を返す
///
/// タイムアウト付きの単発リクエスト。リトライはしない。
/// 2xx以外のステータスは致命的エラー扱い。
pub async fn fetch_page(url: &str, timeout: Duration) -> Result<String> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(FivecolorError::HttpStatus(response.status()));
    }

    Ok(response.text().await?)
}
