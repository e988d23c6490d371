use std::borrow::Cow;

const MAX_API_ERROR_CHARS: usize = 200;

const REDACTED: &str = "[REDACTED]";

/// JSON string keys whose value may echo a credential. The value runs to the
/// closing unescaped quote.
const QUOTED_MARKERS: [&str; 6] = [
    "\"token\":\"",
    "\"token\": \"",
    "\"senha\":\"",
    "\"senha\": \"",
    "\"x-api-key\":\"",
    "\"x-api-key\": \"",
];

/// Query-string and header forms. The value runs to whitespace or `&`.
const BARE_MARKERS: [&str; 5] = ["x-api-key: ", "X-Api-Key: ", "token=", "senha=", "api_key="];

fn quoted_end(input: &str, from: usize) -> usize {
    let mut escaped = false;
    for (i, c) in input[from..].char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return from + i,
            _ => {}
        }
    }
    input.len()
}

fn bare_end(input: &str, from: usize) -> usize {
    input[from..]
        .char_indices()
        .find(|&(_, c)| c.is_whitespace() || c == '&')
        .map_or(input.len(), |(i, _)| from + i)
}

fn redact_after(scrubbed: &mut String, marker: &str, value_end: fn(&str, usize) -> usize) {
    let mut search_from = 0;
    while let Some(rel) = scrubbed[search_from..].find(marker) {
        let value_start = search_from + rel + marker.len();
        let end = value_end(scrubbed, value_start);

        // Bare marker without a value.
        if end == value_start {
            search_from = value_start;
            continue;
        }

        scrubbed.replace_range(value_start..end, REDACTED);
        search_from = value_start + REDACTED.len();
    }
}

/// Redact token and password values from text quoted in error messages.
pub fn scrub_secret_patterns(input: &str) -> Cow<'_, str> {
    let mut markers = QUOTED_MARKERS.iter().chain(BARE_MARKERS.iter());
    if !markers.any(|marker| input.contains(marker)) {
        return Cow::Borrowed(input);
    }

    let mut scrubbed = input.to_string();
    for marker in QUOTED_MARKERS {
        redact_after(&mut scrubbed, marker, quoted_end);
    }
    for marker in BARE_MARKERS {
        redact_after(&mut scrubbed, marker, bare_end);
    }
    Cow::Owned(scrubbed)
}

/// Scrub secrets and truncate an error body to a loggable length.
pub fn sanitize_api_error(input: &str) -> String {
    let scrubbed = scrub_secret_patterns(input);

    if scrubbed.chars().count() <= MAX_API_ERROR_CHARS {
        return scrubbed.into_owned();
    }

    let scrubbed = scrubbed.as_ref();
    let mut end = MAX_API_ERROR_CHARS;
    while end > 0 && !scrubbed.is_char_boundary(end) {
        end -= 1;
    }

    format!("{}...", &scrubbed[..end])
}

/// Status code and sanitized body of a failed response.
pub async fn error_parts(response: reqwest::Response) -> (u16, String) {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read error body>".to_string());
    let body = body.trim();
    let message = if body.is_empty() {
        "<empty body>".to_string()
    } else {
        sanitize_api_error(body)
    };
    (status, message)
}
