use actix_web::{App, HttpResponse, HttpServer, web};

/// A page that passes every SEO rule: 45-char title, 200-char description,
/// one H1, no images, canonical, all three OG tags and one JSON-LD block.
#[allow(dead_code)]
pub fn complete_seo_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Handmade Leather Goods and Accessories Online</title>
    <meta name="description" content="{}">
    <link rel="canonical" href="https://example.com/">
    <meta property="og:title" content="Leather goods">
    <meta property="og:description" content="Handmade leather goods">
    <meta property="og:image" content="https://example.com/og.png">
    <script type="application/ld+json">{{"@type": "Organization"}}</script>
</head>
<body>
    <h1>Leather Goods</h1>
</body>
</html>"#,
        "d".repeat(200)
    )
}

/// A page with nothing an auditor looks for.
#[allow(dead_code)]
pub fn bare_page() -> String {
    "<html><head></head><body><p>Hello</p></body></html>".to_string()
}

/// A fully tagged storefront: GTM, GA4, Google Ads, a pixel firing three
/// events, a viewport and a consent banner.
#[allow(dead_code)]
pub fn tracked_shop_page() -> String {
    r#"<html>
<head>
    <title>Demo Store</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <script src="https://cdn.shopify.com/s/files/theme.min.js"></script>
    <script async src="https://www.googletagmanager.com/gtm.js?id=GTM-ABC123"></script>
    <script>
        gtag('config', 'G-XYZ7890');
        gtag('config', 'AW-12345');
        fbq('init', '1234567890');
        fbq('track', 'Purchase');
        fbq('track', 'AddToCart');
        fbq('track', "ViewContent");
    </script>
</head>
<body>
    <h1>Demo Store</h1>
    <div class="cookie-banner">We use cookies</div>
</body>
</html>"#
        .to_string()
}

/// Starts a site serving the fixture pages on an ephemeral port and returns its base URL.
#[allow(dead_code)]
pub async fn get_test_server_url() -> String {
    let http_server = HttpServer::new(|| {
        App::new()
            .route(
                "/complete",
                web::get().to(|| async {
                    HttpResponse::Ok()
                        .content_type("text/html")
                        .body(complete_seo_page())
                }),
            )
            .route(
                "/bare",
                web::get().to(|| async {
                    HttpResponse::Ok().content_type("text/html").body(bare_page())
                }),
            )
            .route(
                "/shop",
                web::get().to(|| async {
                    HttpResponse::Ok()
                        .content_type("text/html")
                        .body(tracked_shop_page())
                }),
            )
            .route(
                "/not-found",
                web::get().to(|| async { HttpResponse::NotFound().body("Not Found") }),
            )
            .route(
                "/server-error",
                web::get().to(|| async { HttpResponse::InternalServerError().body("Error") }),
            )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind test server");

    let addr = http_server
        .addrs()
        .first()
        .cloned()
        .expect("No address bound");
    let url = format!("http://{}", addr);

    let app_server = http_server.run();

    tokio::spawn(async move {
        if let Err(e) = app_server.await {
            eprintln!("Test server error: {}", e);
        }
    });

    url
}

/// A URL nothing listens on.
#[allow(dead_code)]
pub fn unreachable_url() -> String {
    "http://127.0.0.1:1/".to_string()
}
