use std::io::Write;

use stream_cards::{dom, extractor::SeparatorLabel, Error, ExtractionResult, Extractor, Registry};

const USER_REGISTRY: &str = r#"
{
  "platforms": [
    {
      "key": "crunchyroll",
      "name": "Crunchyroll",
      "hostnames": ["crunchyroll.com"],
      "card_selectors": [".browse-card"],
      "title_selectors": ["h4", "a[title]"],
      "image_container_selectors": ["picture"],
      "badge_id": "platform-badge-crunchyroll",
      "extractor": { "strategy": "text_or_title" }
    },
    {
      "key": "netflix",
      "name": "Netflix",
      "hostnames": ["netflix.com"],
      "title_selectors": ["a[aria-label]"],
      "extractor": { "strategy": "separator_label", "separator": "|" }
    }
  ]
}
"#;

#[test]
fn user_profiles_load_from_json() {
    let registry = match Registry::from_json(USER_REGISTRY) {
        Ok(registry) => registry,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(registry.len(), 2);
    let Some(crunchyroll) = registry.get("crunchyroll") else {
        panic!("crunchyroll profile missing");
    };
    assert_eq!(crunchyroll.badge_id, "platform-badge-crunchyroll");

    let doc = dom::parse(r#"<div class="browse-card"><a title="Frieren"></a><h4></h4></div>"#);
    let card = doc.select(".browse-card");
    assert_eq!(crunchyroll.extract_card_title(&card), Some(ExtractionResult::untyped("Frieren")));
}

#[test]
fn omitted_fields_take_defaults() {
    let registry = match Registry::from_json(USER_REGISTRY) {
        Ok(registry) => registry,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    let Some(netflix) = registry.get("netflix") else {
        panic!("netflix profile missing");
    };

    assert!(netflix.card_selectors.is_empty());
    assert!(netflix.badge_id.is_empty());
    assert_eq!(
        netflix.extractor,
        Extractor::SeparatorLabel(SeparatorLabel {
            separator: '|',
            ..SeparatorLabel::default()
        })
    );
}

#[test]
fn merged_user_profile_replaces_builtin_behavior() {
    let mut registry = Registry::builtin();
    let user = match Registry::from_json(USER_REGISTRY) {
        Ok(registry) => registry,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    registry.merge_user(user);

    assert_eq!(
        registry.keys().collect::<Vec<_>>(),
        vec!["hotstar", "netflix", "prime", "crunchyroll"]
    );

    let Some(resolved) = stream_cards::resolve(&registry, "www.netflix.com") else {
        panic!("netflix should resolve");
    };
    let doc = dom::parse(r#"<div class="card"><a aria-label="Dark | 2017"></a></div>"#);
    let card = doc.select(".card");
    assert_eq!(
        resolved.profile.extract_card_title(&card),
        Some(ExtractionResult::untyped("Dark"))
    );
}

#[test]
fn invalid_configurations_are_rejected() {
    let duplicate = r#"{"platforms": [
        {"key": "a", "name": "A", "hostnames": ["a.com"]},
        {"key": "a", "name": "A2", "hostnames": ["a2.com"]}
    ]}"#;
    assert!(matches!(Registry::from_json(duplicate), Err(Error::DuplicateKey(_))));

    let no_hosts = r#"{"platforms": [{"key": "a", "name": "A", "hostnames": []}]}"#;
    assert!(matches!(Registry::from_json(no_hosts), Err(Error::MissingHostnames(_))));

    let bad_selector = r#"{"platforms": [
        {"key": "a", "name": "A", "hostnames": ["a.com"],
         "extractor": {"strategy": "attribute_scan", "candidates": ["img[[alt]]"]}}
    ]}"#;
    assert!(matches!(Registry::from_json(bad_selector), Err(Error::InvalidSelector { .. })));

    assert!(matches!(Registry::from_json("{"), Err(Error::Json(_))));
    assert!(matches!(
        Registry::from_json(r#"{"platforms": [{"key": "a"}]}"#),
        Err(Error::Json(_))
    ));
}

#[test]
fn registry_file_round_trip_through_disk() {
    let path = std::env::temp_dir().join(format!("stream-cards-registry-{}.json", std::process::id()));
    let written = std::fs::File::create(&path).and_then(|mut file| file.write_all(USER_REGISTRY.as_bytes()));
    if let Err(err) = written {
        panic!("failed to write temp registry: {err}");
    }

    let loaded = Registry::from_json_file(&path);
    let _ = std::fs::remove_file(&path);

    match loaded {
        Ok(registry) => assert_eq!(registry.len(), 2),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn missing_registry_file_is_io_error() {
    let result = Registry::from_json_file("/nonexistent/stream-cards/registry.json");
    assert!(matches!(result, Err(Error::Io(_))));
}
