//! Built-in HTML views shared by the guards

/// A rendered HTML fragment or page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Html(String);

impl Html {
    /// Wrap markup that is already trusted
    pub fn from_trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Escape text for safe interpolation into markup
    pub fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    /// The "Access Denied" page with a link back to `home_path`
    pub fn access_denied(home_path: &str) -> Self {
        Self(format!(
            r#"<!DOCTYPE html>
<html><head><title>Access Denied</title></head>
<body>
<main class="access-denied">
<h1>Access Denied</h1>
<p>You don't have permission to access this page.</p>
<a href="{}">Go to Dashboard</a>
</main>
</body></html>"#,
            Self::escape(home_path)
        ))
    }

    /// Blocking spinner shown while the session is being resolved
    pub fn loading() -> Self {
        Self(
            concat!(
                r#"<div class="loading" role="status" aria-busy="true">"#,
                r#"<span class="spinner"></span></div>"#,
            )
            .to_string(),
        )
    }

    /// Fallback body for redirect responses
    pub fn redirecting(location: &str) -> Self {
        let location = Self::escape(location);
        Self(format!(
            r#"<!DOCTYPE html>
<html><head><meta http-equiv="refresh" content="0;url={location}"></head>
<body><p>Redirecting to <a href="{location}">{location}</a>...</p></body></html>"#
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Html {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Html> for String {
    fn from(html: Html) -> Self {
        html.0
    }
}
