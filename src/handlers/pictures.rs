use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use url::Url;

use crate::{GateError, router::GateState};

/// Percent-encoded path of the picture route for `name`.
pub fn picture_path(name: &str) -> Option<String> {
    let mut url = Url::parse("http://localhost/pictures/").ok()?;
    url.path_segments_mut().ok()?.pop_if_empty().push(name);
    Some(url.path().to_string())
}

/// GET /pictures/{name} -> raw picture bytes.
pub async fn picture_handler(
    State(state): State<GateState>,
    Path(name): Path<String>,
) -> Result<Response, GateError> {
    let Some(data) = state
        .pictures
        .get_by_name(&name)
        .await?
        .and_then(|pic| pic.data)
    else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    Ok(([(header::CONTENT_TYPE, sniff_content_type(&data))], data).into_response())
}

fn sniff_content_type(data: &[u8]) -> &'static str {
    match data {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::{picture_path, sniff_content_type};

    #[test]
    fn picture_path_encodes_segment() {
        assert_eq!(picture_path("sunset").as_deref(), Some("/pictures/sunset"));
        assert_eq!(
            picture_path("my pic#1").as_deref(),
            Some("/pictures/my%20pic%231")
        );
        assert_eq!(
            picture_path("a/b?c%").as_deref(),
            Some("/pictures/a%2Fb%3Fc%25")
        );
    }

    #[test]
    fn sniffs_common_formats() {
        assert_eq!(sniff_content_type(b"\x89PNG\r\n\x1a\n"), "image/png");
        assert_eq!(sniff_content_type(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(sniff_content_type(b"GIF89a"), "image/gif");
        assert_eq!(sniff_content_type(b"RIFF\0\0\0\0WEBPVP8 "), "image/webp");
        assert_eq!(sniff_content_type(b"RIFF\0\0\0\0WAVE"), "application/octet-stream");
        assert_eq!(sniff_content_type(b""), "application/octet-stream");
    }
}
