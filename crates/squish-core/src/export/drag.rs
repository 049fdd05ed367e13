use std::path::Path;

use crate::error::Result;

/// MIME type drop targets expect for a list of file URIs.
pub const URI_LIST_MIME: &str = "text/uri-list";

/// What a drop target receives when the compressed image is dragged out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragPayload {
    pub uri: String,
    pub mime: &'static str,
}

impl DragPayload {
    pub fn for_file(path: &Path) -> Result<Self> {
        let absolute = std::path::absolute(path)?;
        Ok(Self {
            uri: file_uri(&absolute),
            mime: URI_LIST_MIME,
        })
    }
}

/// `file://` URI for an absolute path, percent-encoding everything outside the
/// unreserved set.
pub fn file_uri(path: &Path) -> String {
    let raw = path.to_string_lossy().replace('\\', "/");
    let mut uri = String::from("file://");
    if !raw.starts_with('/') {
        uri.push('/');
    }
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' | b':' => {
                uri.push(byte as char)
            }
            _ => uri.push_str(&format!("%{byte:02X}")),
        }
    }
    uri
}
