//! Auto-update descriptor generation.
//!
//! Emits the small `gupdate` XML document that update clients poll: one
//! `app` element keyed by the derived identity, carrying an
//! `updatecheck` directive with the absolute download URL and version.

use crate::error::{PackError, Result};
use crate::identity::Identity;

/// Render the update descriptor document.
///
/// # Errors
///
/// Returns [`PackError::Validation`] if `codebase` or `version` is empty.
pub fn build_descriptor(identity: &Identity, codebase: &str, version: &str) -> Result<String> {
    if codebase.is_empty() {
        return Err(PackError::Validation("update descriptor requires a codebase".into()));
    }
    if version.is_empty() {
        return Err(PackError::Validation("update descriptor requires a version".into()));
    }

    Ok(format!(
        "<?xml version='1.0' encoding='UTF-8'?>\n\
         <gupdate xmlns='http://www.google.com/update2/response' protocol='2.0'>\n\
         \x20 <app appid='{appid}'>\n\
         \x20   <updatecheck codebase='{codebase}' version='{version}' />\n\
         \x20 </app>\n\
         </gupdate>",
        appid = identity.as_str(),
        codebase = escape_attr(codebase),
        version = escape_attr(version),
    ))
}

/// Escape a value for use inside a single-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Final path segment of a URL (the update descriptor's file name).
pub fn url_basename(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Everything before the final path segment, without the trailing slash.
pub fn url_dirname(url: &str) -> &str {
    match url.rfind('/') {
        Some(idx) => &url[..idx],
        None => "",
    }
}

/// Join a download-location prefix and a file name with exactly one `/`.
pub fn join_url(prefix: &str, file: &str) -> String {
    format!("{}/{file}", prefix.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::derive_identity;

    #[test]
    fn descriptor_document_shape() {
        let id = derive_identity(b"key").unwrap();
        let xml =
            build_descriptor(&id, "https://example.com/update/ext.crx", "2.0.0").unwrap();

        assert!(xml.starts_with("<?xml version='1.0' encoding='UTF-8'?>\n"));
        assert!(xml.contains(&format!("<app appid='{id}'>")));
        assert!(xml.contains(
            "<updatecheck codebase='https://example.com/update/ext.crx' version='2.0.0' />"
        ));
        assert!(xml.ends_with("</gupdate>"));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let id = derive_identity(b"key").unwrap();
        let xml = build_descriptor(&id, "https://example.com/a?b=1&c=2", "1.0").unwrap();
        assert!(xml.contains("codebase='https://example.com/a?b=1&amp;c=2'"));
    }

    #[test]
    fn empty_fields_fail_validation() {
        let id = derive_identity(b"key").unwrap();
        assert!(matches!(
            build_descriptor(&id, "", "1.0").unwrap_err(),
            PackError::Validation(_)
        ));
        assert!(matches!(
            build_descriptor(&id, "https://example.com/x.crx", "").unwrap_err(),
            PackError::Validation(_)
        ));
    }

    #[test]
    fn url_helpers() {
        let url = "https://example.com/update/upd.xml";
        assert_eq!(url_basename(url), "upd.xml");
        assert_eq!(url_dirname(url), "https://example.com/update");
        assert_eq!(join_url("https://example.com/update", "ext.crx"), "https://example.com/update/ext.crx");
        assert_eq!(join_url("https://example.com/update/", "ext.crx"), "https://example.com/update/ext.crx");
    }
}
