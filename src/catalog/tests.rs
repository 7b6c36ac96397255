use super::*;

fn song(title: &str) -> Song {
    Song {
        title: title.into(),
        duration: 120,
        audio_src: format!("/assets/music/{title}.mp3"),
    }
}

fn album(slug: &str, songs: Vec<Song>) -> Album {
    Album {
        slug: slug.into(),
        title: slug.to_uppercase(),
        artist: "Someone".into(),
        release_info: "2016 Label".into(),
        album_cover: None,
        songs,
    }
}

#[test]
fn bundled_catalog_loads() {
    let catalog = StaticCatalog::bundled().expect("bundled catalog is valid");
    assert!(!catalog.albums().is_empty());
    for album in catalog.albums() {
        assert!(!album.songs.is_empty());
    }
}

#[test]
fn find_by_slug_returns_matching_album() {
    let catalog =
        StaticCatalog::from_albums(vec![album("a", vec![song("one")]), album("b", vec![song("two")])])
            .unwrap();
    let found = catalog.find_by_slug("b").unwrap();
    assert_eq!(found.songs[0].title, "two");
}

#[test]
fn unknown_slug_is_not_found() {
    let catalog = StaticCatalog::from_albums(vec![album("a", vec![song("one")])]).unwrap();
    match catalog.find_by_slug("missing") {
        Err(CatalogError::NotFound(slug)) => assert_eq!(slug, "missing"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn rejects_duplicate_slugs() {
    let result = StaticCatalog::from_albums(vec![
        album("same", vec![song("one")]),
        album("same", vec![song("two")]),
    ]);
    assert!(matches!(result, Err(CatalogError::DuplicateSlug(slug)) if slug == "same"));
}

#[test]
fn rejects_album_without_songs() {
    let result = StaticCatalog::from_albums(vec![album("empty", Vec::new())]);
    assert!(matches!(result, Err(CatalogError::EmptyAlbum(_))));
}

#[test]
fn rejects_blank_slug() {
    let result = StaticCatalog::from_albums(vec![album("  ", vec![song("one")])]);
    assert!(matches!(result, Err(CatalogError::MissingSlug { .. })));
}

#[test]
fn parses_camel_case_fields() {
    let json = r#"[{
        "slug": "x",
        "title": "X",
        "artist": "Y",
        "releaseInfo": "1999",
        "albumCover": "/cover.png",
        "songs": [{ "title": "s", "duration": 61, "audioSrc": "/s.mp3" }]
    }]"#;
    let catalog = StaticCatalog::from_json(json).unwrap();
    let album = catalog.find_by_slug("x").unwrap();
    assert_eq!(album.release_info, "1999");
    assert_eq!(album.album_cover.as_deref(), Some("/cover.png"));
    assert_eq!(album.songs[0].audio_src, "/s.mp3");
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        StaticCatalog::from_json("{ not json"),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn format_duration_pads_seconds() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(65), "1:05");
    assert_eq!(format_duration(161), "2:41");
}
