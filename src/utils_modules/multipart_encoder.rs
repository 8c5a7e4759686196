use crate::common::*;

use crate::errors::report_error::*;

const CRLF: &[u8] = b"\r\n";

/* RFC 2046 limit for a boundary parameter */
const MAX_BOUNDARY_LEN: usize = 70;

/* A fresh 128-bit boundary colliding with content is practically impossible, but bounded anyway. */
const BOUNDARY_ATTEMPTS: usize = 3;

#[doc = "A single named `multipart/form-data` part borrowing its content."]
#[derive(Debug, Clone)]
pub struct FormPart<'a> {
    name: String,
    filename: Option<&'a str>,
    content_type: Option<&'a str>,
    content: &'a [u8],
}

impl<'a> FormPart<'a> {
    #[doc = "Plain field part: only a `Content-Disposition` header with the field name."]
    pub fn text(name: &str, content: &'a str) -> Self {
        FormPart {
            name: name.to_string(),
            filename: None,
            content_type: None,
            content: content.as_bytes(),
        }
    }

    #[doc = "File part: `Content-Disposition` with name and filename, plus `Content-Type`."]
    pub fn file(name: String, filename: &'a str, content_type: &'a str, content: &'a [u8]) -> Self {
        FormPart {
            name,
            filename: Some(filename),
            content_type: Some(content_type),
            content,
        }
    }
}

#[derive(Debug, Getters)]
#[getset(get = "pub")]
pub struct MultipartBody {
    boundary: String,
    bytes: Vec<u8>,
}

impl MultipartBody {
    #[doc = "Value of the request's `Content-Type` header for this body."]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[doc = "Random 128-bit boundary rendered as 32 lowercase hex digits."]
pub fn generate_boundary() -> String {
    let mut rng: StdRng = StdRng::from_entropy();
    format!("{:032x}", rng.gen::<u128>())
}

#[doc = r#"
    Encodes the parts with a freshly generated boundary.

    The boundary is regenerated when it collides with any part's content; after
    a bounded number of attempts the encoding fails with `EncodingError`.
"#]
pub fn encode_multipart(parts: &[FormPart<'_>]) -> Result<MultipartBody, ReportError> {
    for attempt in 1..=BOUNDARY_ATTEMPTS {
        let boundary: String = generate_boundary();

        if parts.iter().any(|part| collides(part.content, &boundary)) {
            warn!(
                "[multipart_encoder->encode_multipart] boundary collision on attempt {}, regenerating",
                attempt
            );
            continue;
        }

        return encode_with_boundary(parts, &boundary);
    }

    Err(ReportError::EncodingError(format!(
        "could not find a collision-free boundary after {} attempts",
        BOUNDARY_ATTEMPTS
    )))
}

#[doc = r#"
    Frames the parts with the given boundary:

    ```text
    --<boundary>\r\n
    Content-Disposition: form-data; name="<name>"[; filename="<filename>"]\r\n
    [Content-Type: <type>\r\n]
    \r\n
    <content>\r\n
    ...
    --<boundary>--\r\n
    ```
"#]
pub fn encode_with_boundary(
    parts: &[FormPart<'_>],
    boundary: &str,
) -> Result<MultipartBody, ReportError> {
    validate_boundary(boundary)?;

    let delimiter: Vec<u8> = format!("--{}", boundary).into_bytes();
    let capacity: usize = parts
        .iter()
        .map(|part| part.content.len() + delimiter.len() + 256)
        .sum::<usize>()
        + delimiter.len()
        + 4;

    let mut bytes: Vec<u8> = Vec::with_capacity(capacity);

    for part in parts {
        if collides(part.content, boundary) {
            return Err(ReportError::EncodingError(format!(
                "content of part '{}' contains the boundary",
                part.name
            )));
        }

        bytes.extend_from_slice(&delimiter);
        bytes.extend_from_slice(CRLF);

        let mut disposition: String = format!(
            "Content-Disposition: form-data; name=\"{}\"",
            escape_quoted(&part.name)
        );
        if let Some(filename) = part.filename {
            disposition.push_str(&format!("; filename=\"{}\"", escape_quoted(filename)));
        }
        bytes.extend_from_slice(disposition.as_bytes());
        bytes.extend_from_slice(CRLF);

        if let Some(content_type) = part.content_type {
            bytes.extend_from_slice(format!("Content-Type: {}", strip_crlf(content_type)).as_bytes());
            bytes.extend_from_slice(CRLF);
        }

        bytes.extend_from_slice(CRLF);
        bytes.extend_from_slice(part.content);
        bytes.extend_from_slice(CRLF);
    }

    bytes.extend_from_slice(&delimiter);
    bytes.extend_from_slice(b"--");
    bytes.extend_from_slice(CRLF);

    Ok(MultipartBody {
        boundary: boundary.to_string(),
        bytes,
    })
}

fn validate_boundary(boundary: &str) -> Result<(), ReportError> {
    let valid: bool = !boundary.is_empty()
        && boundary.len() <= MAX_BOUNDARY_LEN
        && boundary
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"'()+_,-./:=?".contains(&b));

    if valid {
        Ok(())
    } else {
        Err(ReportError::EncodingError(format!(
            "invalid multipart boundary '{}'",
            boundary
        )))
    }
}

fn collides(content: &[u8], boundary: &str) -> bool {
    let needle: Vec<u8> = format!("--{}", boundary).into_bytes();
    content.windows(needle.len()).any(|window| window == needle.as_slice())
}

#[doc = "Header parameter values are quoted: `\"`, CR and LF are percent-encoded."]
fn escape_quoted(value: &str) -> String {
    value
        .replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn strip_crlf(value: &str) -> String {
    value.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

#[cfg(test)]
#[derive(Debug)]
pub(crate) struct ParsedPart {
    pub headers: String,
    pub content: Vec<u8>,
}

#[cfg(test)]
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/* Strict multipart/form-data reader used by the tests: panics on any framing error. */
#[cfg(test)]
pub(crate) fn parse_multipart(body: &[u8], boundary: &str) -> Vec<ParsedPart> {
    let opener: String = format!("--{}\r\n", boundary);
    let delimiter: String = format!("\r\n--{}", boundary);
    let closing: String = format!("--{}--\r\n", boundary);

    assert!(body.starts_with(opener.as_bytes()), "body must open with the boundary");
    assert!(body.ends_with(closing.as_bytes()), "body must end with the closing boundary");

    let mut parts: Vec<ParsedPart> = Vec::new();
    let mut rest: &[u8] = &body[opener.len()..];

    loop {
        let end: usize = find(rest, delimiter.as_bytes()).expect("unterminated part");
        let raw: &[u8] = &rest[..end];
        let header_end: usize = find(raw, b"\r\n\r\n").expect("missing blank line after headers");

        parts.push(ParsedPart {
            headers: String::from_utf8(raw[..header_end].to_vec()).expect("non-utf8 headers"),
            content: raw[header_end + 4..].to_vec(),
        });

        rest = &rest[end + delimiter.len()..];
        if rest == b"--\r\n" {
            break;
        }
        assert!(rest.starts_with(CRLF), "boundary line must end with CRLF");
        rest = &rest[CRLF.len()..];
    }

    parts
}
