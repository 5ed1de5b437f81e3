use actix_web::HttpResponse;
use actix_web::http::header;

pub mod listing;

/// `303 See Other` pointing at `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
