use url::Url;

pub fn validate_url(url: &str) -> anyhow::Result<Url> {
    Url::parse(url).map_err(|e| anyhow::anyhow!("invalid URL: {}", e))
}

pub fn validate_api_token(token: &str) -> anyhow::Result<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(anyhow::anyhow!("invalid API token: blank"));
    }
    Ok(trimmed.to_string())
}
