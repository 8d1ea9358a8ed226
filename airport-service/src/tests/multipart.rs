use axum_core::body::Body;
use http::{Method, Request, header::CONTENT_TYPE};

pub const BOUNDARY: &str = "airport-service-test-boundary";
pub const UPLOAD_URI: &str = "http://airports.test/update_airport_image";

/// One part of a hand-built `multipart/form-data` body.
#[derive(Debug, Clone, Copy)]
pub enum Part<'a> {
    Text {
        name: &'a str,
        value: &'a str,
    },
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        body: &'a [u8],
    },
}

#[must_use]
pub fn body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut out = Vec::new();
    for part in parts {
        out.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text { name, value } => {
                out.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                    )
                    .as_bytes(),
                );
                out.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                content_type,
                body,
            } => {
                out.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; \
                         filename=\"{file_name}\"\r\nContent-Type: \
                         {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                out.extend_from_slice(body);
            }
        }
        out.extend_from_slice(b"\r\n");
    }
    out.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    out
}

/// `POST /update_airport_image` carrying `parts`.
#[must_use]
pub fn request(parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(UPLOAD_URI)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body(parts)))
        .expect("valid request")
}

/// The usual two-field upload.
#[must_use]
pub fn upload<'a>(
    airport_name: &'a str,
    file_name: &'a str,
    image: &'a [u8],
) -> Request<Body> {
    request(&[
        Part::Text {
            name: "airport_name",
            value: airport_name,
        },
        Part::File {
            name: "airport_img",
            file_name,
            content_type: "image/jpeg",
            body: image,
        },
    ])
}
