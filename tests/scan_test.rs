use stream_cards::{dom, scan_document, MediaType, PlatformResolver, Registry};

const PRIME_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<head><title>Prime Video: Home</title></head>
<body>
  <section class="carousel">
    <div class="av-card-container">
      <div class="av-card-image"><img src="boys.jpg"></div>
      <span data-automation-id="title">The Boys</span>
    </div>
    <div class="av-card-container">
      <div class="av-card-image"><img src="reacher.jpg"></div>
      <span class="av-card-title" title="Reacher"></span>
    </div>
    <div class="tst-hover-container">
      <div class="tst-packshot-image"></div>
    </div>
  </section>
</body>
</html>
"#;

#[test]
fn scan_prime_page() {
    let registry = Registry::builtin();
    let resolver = PlatformResolver::new(&registry);
    let Some(resolved) = resolver.resolve_url("https://www.primevideo.com/storefront/home") else {
        panic!("primevideo.com should resolve");
    };

    let doc = dom::parse(PRIME_PAGE);
    let cards = scan_document(&doc, resolved.profile);

    let titles: Vec<Option<&str>> = cards
        .iter()
        .map(|c| c.title.as_ref().map(|t| t.title.as_str()))
        .collect();
    assert_eq!(titles, vec![Some("The Boys"), Some("Reacher"), None]);
    assert!(cards.iter().all(|c| c.image_container.is_some()));
    assert!(cards.iter().filter_map(|c| c.title.as_ref()).all(|t| t.media_type.is_none()));
}

#[test]
fn scan_hotstar_page_with_duplicate_labels() {
    let registry = Registry::builtin();
    let Some(hotstar) = registry.get("hotstar") else {
        panic!("hotstar profile missing");
    };
    let doc = dom::parse(
        r#"
        <div class="tray-vertical-card">
            <a aria-label="Shogun, Show">
                <div data-testid="hs-image"><img alt="shogun, show"></div>
            </a>
        </div>
        <div class="tray-vertical-card">
            <div class="image-container"><img alt="Hotstar logo"></div>
        </div>
    "#,
    );

    let cards = scan_document(&doc, hotstar);
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].title.as_ref().map(|t| t.title.as_str()), Some("Shogun"));
    assert_eq!(cards[0].title.as_ref().and_then(|t| t.media_type), Some(MediaType::TvSeries));
    assert!(cards[1].title.is_none());
    assert!(cards[1].image_container.is_some());
}

#[test]
fn scan_malformed_html_does_not_panic() {
    let registry = Registry::builtin();
    for html in ["", "<div class=\"slider-item", "<a aria-label=\"x\"<<>>", "&amp text &lt;"] {
        let doc = dom::parse(html);
        for profile in &registry {
            let cards = scan_document(&doc, profile);
            assert!(cards.iter().all(|c| c.title.as_ref().is_none_or(|t| !t.title.is_empty())));
        }
    }
}
