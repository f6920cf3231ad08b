use allrecipes_scrape::{
    handle, is_valid_recipe, scrape_recipe, FieldValue, RecordBuilder, Request, ResponseData,
    ScrapeError, Scraper, ScraperConfig,
};

const FULL_PAGE: &str = include_str!("fixtures/allrecipes_full.html");
const NO_TIMING_PAGE: &str = include_str!("fixtures/allrecipes_no_timing.html");

fn serve(body: &str) -> (mockito::ServerGuard, mockito::Mock, String) {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/recipe/20144/banana-bread")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(body)
        .create();
    let url = format!("{}/recipe/20144/banana-bread", server.url());
    (server, mock, url)
}

#[test]
fn test_full_page_builds_valid_record() {
    let record = RecordBuilder::new()
        .unwrap()
        .build_from_markup(FULL_PAGE)
        .unwrap();

    assert_eq!(record.title.as_deref(), Some("Classic Banana Bread"));
    assert_eq!(
        record.thumbnail.as_deref(),
        Some("https://cdn.example.com/banana-bread-750.jpg")
    );
    assert_eq!(record.get("prep time"), Some(FieldValue::Text("15 mins")));
    assert_eq!(record.get("cook time"), Some(FieldValue::Text("1 hr")));
    assert_eq!(record.get("total time"), Some(FieldValue::Text("1 hr 15 mins")));
    assert_eq!(record.get("servings"), Some(FieldValue::Text("10")));
    assert_eq!(
        record.ingredients,
        Some(vec![
            "2 cups all-purpose flour".to_string(),
            "3 ripe bananas, mashed".to_string(),
            "2 eggs, beaten".to_string(),
        ])
    );
    assert_eq!(
        record.directions.as_deref(),
        Some("Preheat the oven to 350 degrees F.Combine flour and bananas.Bake for 60 minutes.")
    );
    assert!(is_valid_recipe(&record));
}

#[test]
fn test_record_keys_follow_page_order() {
    let record = RecordBuilder::new()
        .unwrap()
        .build_from_markup(FULL_PAGE)
        .unwrap();

    assert_eq!(
        record.keys(),
        vec![
            "title",
            "thumbnail",
            "prep time",
            "cook time",
            "total time",
            "servings",
            "ingredients",
            "directions"
        ]
    );
}

#[test]
fn test_handler_returns_record_for_full_page() {
    let (_server, mock, url) = serve(FULL_PAGE);
    let config = ScraperConfig::default();
    let scraper = Scraper::from_config(&config).unwrap();

    let response = handle(&Request::for_url(url.clone()), &scraper, &config);
    mock.assert();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.param1.as_deref(), Some(url.as_str()));
    let json = serde_json::to_value(&response).unwrap();
    assert!(json["data"].get("error").is_none());
    assert_eq!(json["data"]["title"], "Classic Banana Bread");
    assert_eq!(json["data"]["cook time"], "1 hr");
    assert_eq!(json["body"], "\"Hello from Lambda!\"");
}

#[test]
fn test_handler_rejects_page_without_timing() {
    let (_server, _mock, url) = serve(NO_TIMING_PAGE);
    let config = ScraperConfig::default();
    let scraper = Scraper::from_config(&config).unwrap();

    let response = handle(&Request::for_url(url.clone()), &scraper, &config);

    assert_eq!(response.status_code, 200);
    assert_eq!(response.data, ResponseData::error());
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(
        json["data"],
        serde_json::json!({"error": "error getting recipe data"})
    );
    assert_eq!(json["param1"], url);
}

#[test]
fn test_http_error_status_is_fetch_failure() {
    let mut server = mockito::Server::new();
    let _m = server.mock("GET", "/missing").with_status(404).create();
    let url = format!("{}/missing", server.url());

    let scraper = Scraper::from_config(&ScraperConfig::default()).unwrap();
    let err = scraper.scrape_page(&url).unwrap_err();
    assert!(matches!(err, ScrapeError::HttpStatus { status: 404, .. }));

    let response = handle(&Request::for_url(url), &scraper, &ScraperConfig::default());
    assert!(response.data.is_error());
}

#[test]
fn test_unreachable_host_is_fetch_failure() {
    let scraper = Scraper::from_config(&ScraperConfig {
        timeout: 2,
        ..ScraperConfig::default()
    })
    .unwrap();
    let err = scraper.scrape_page("http://127.0.0.1:1/recipe").unwrap_err();
    assert!(matches!(err, ScrapeError::Fetch(_)));
}

#[test]
fn test_pipeline_is_idempotent() {
    let (_server, _mock, url) = serve(FULL_PAGE);
    let scraper = Scraper::from_config(&ScraperConfig::default()).unwrap();

    let first = serde_json::to_string(&scraper.scrape_page(&url).unwrap()).unwrap();
    let second = serde_json::to_string(&scraper.scrape_page(&url).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_whitespace_only_ingredient_still_validates() {
    let page = r#"
        <h1 class="article-heading">Plain Toast</h1>
        <div class="article-content">
          <div class="img-placeholder"><img data-src="https://i/x.jpg" width="640"></div>
          <div class="mm-recipes-details">
            <div class="mm-recipes-details__label">Cook Time:</div>
            <div class="mm-recipes-details__value">2 mins</div>
          </div>
          <ul><li class="mm-recipes-structured-ingredients__list-item">   </li></ul>
          <p class="comp mntl-sc-block mntl-sc-block-html">Toast the bread.</p>
        </div>"#;

    let record = RecordBuilder::new().unwrap().build_from_markup(page).unwrap();
    assert_eq!(record.ingredients, Some(vec![String::new()]));
    assert!(is_valid_recipe(&record));
}

#[test]
fn test_scrape_recipe_with_default_settings() {
    let (_server, mock, url) = serve(FULL_PAGE);

    let record = scrape_recipe(&url).unwrap();
    mock.assert();
    assert_eq!(record.title.as_deref(), Some("Classic Banana Bread"));
    assert!(is_valid_recipe(&record));
}
