use actix_cors::Cors;
use actix_web::http::header;

/// Origins used when `ALLOWED_ORIGINS` yields nothing usable.
const FALLBACK_ORIGINS: &[&str] = &["http://localhost:3000"];

/// Keep http(s) origins; drop blanks and the literal "null".
pub fn effective_origins(configured: &[String]) -> Vec<String> {
    let valid: Vec<String> = configured
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if valid.is_empty() {
        FALLBACK_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        valid
    }
}

/// CORS for the API: explicit origins, the verbs the routes use, bearer auth headers.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .max_age(3600);

    for origin in effective_origins(allowed_origins) {
        cors = cors.allowed_origin(&origin);
    }

    cors
}
