use actix_cors::Cors;

/// CORS policy for the API: any origin, method and request header.
pub fn open_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
