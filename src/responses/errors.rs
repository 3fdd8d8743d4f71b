use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

pub use crate::errors::ResultResp;

/// Convert a ServerError into a proper HTML error page
pub fn html_error_response(err: ServerError) -> Response {
    let status = match err {
        ServerError::NotFound => 404,
        ServerError::BadRequest(_) => 400,
        ServerError::MethodNotAllowed => 405,
        ServerError::InternalError => 500,
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, &err.to_string()).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
