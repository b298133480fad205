use actix_web::middleware::DefaultHeaders;
use actix_web::HttpResponse;

/// Permissive CORS headers carried by every `/send-review-email` response.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add((
            "Access-Control-Allow-Headers",
            "authorization, x-client-info, apikey, content-type",
        ))
}

/// Pre-flight answer; the body is never read.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}
