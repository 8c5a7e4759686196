use crate::common::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    1. 지정된 경로의 TOML 파일을 문자열로 읽어온다
    2. `toml::from_str()`을 사용하여 TOML 문자열을 제네릭 타입 T로 파싱
    3. 파일 읽기나 파싱 실패 시 어떤 파일이 문제인지 포함한 오류를 반환

    # Type Parameters
    * `T` - `DeserializeOwned` 트레이트를 구현한 구조체 타입

    # Arguments
    * `file_path` - 읽을 TOML 파일의 절대 경로 또는 상대 경로

    # Returns
    * `Result<T, anyhow::Error>` - 성공 시 파싱된 구조체, 실패 시 오류

    # Examples
    ```rust
    let config: TotalConfig = read_toml_from_file("config/server_config.toml")?;
    ```
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path).with_context(|| {
        format!("[read_toml_from_file] Failed to read '{}'", file_path)
    })?;

    let toml: T = toml::from_str(&toml_content)
        .with_context(|| format!("[read_toml_from_file] Failed to parse '{}'", file_path))?;

    Ok(toml)
}

#[doc = r#"
    파일명의 확장자로 MIME 타입을 추정하는 함수.
    확장자가 없거나 알 수 없는 경우 `application/octet-stream` 을 반환한다.
"#]
pub fn detect_mime_type(filename: &str) -> &'static str {
    let extension: String = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "eps" => "application/postscript",
        "pdf" => "application/pdf",
        "txt" | "log" => "text/plain",
        "csv" => "text/csv",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        name: String,
        size: u32,
    }

    #[test]
    fn test_detect_mime_type() {
        assert_eq!(detect_mime_type("netother.png"), "image/png");
        assert_eq!(detect_mime_type("/tmp/graph.PNG"), "image/png");
        assert_eq!(detect_mime_type("graph.jpeg"), "image/jpeg");
        assert_eq!(detect_mime_type("graph.svg"), "image/svg+xml");
        assert_eq!(detect_mime_type("graph"), "application/octet-stream");
        assert_eq!(detect_mime_type("graph.rrd"), "application/octet-stream");
    }

    #[test]
    fn test_read_toml_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.toml");
        std::fs::write(&path, "name = \"eth0\"\nsize = 3\n").unwrap();

        let sample: Sample = read_toml_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(sample.name, "eth0");
        assert_eq!(sample.size, 3);
    }

    #[test]
    fn test_read_toml_from_missing_file() {
        let err = read_toml_from_file::<Sample>("/nonexistent/sample.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/sample.toml"));
    }
}
