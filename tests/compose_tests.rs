use async_trait::async_trait;
use quakemap::{
    data::feed::QuakeFeed, rendering::scene::Scene, AccessToken, FeedSource, LatLng,
    LeafletDocument, MapComposer, MapError, QuakeMapConfig, Result, SceneRecorder,
    StaticFeedSource,
};

/// End-to-end tests: feed snapshot in, recorded scene and HTML page out
#[cfg(test)]
mod compose_tests {
    use super::*;

    const FEED: &str = r#"{
        "type": "FeatureCollection",
        "metadata": {"title": "USGS Magnitude 1.0+ Earthquakes, Past Day", "count": 3},
        "features": [
            {
                "type": "Feature",
                "id": "shallow",
                "properties": {"mag": 6.0, "place": "10km N of Somewhere", "time": 1562383193040},
                "geometry": {"type": "Point", "coordinates": [-122.5, 37.7, 10.0]}
            },
            {
                "type": "Feature",
                "id": "intermediate",
                "properties": {"mag": 5.0, "place": "Offshore", "time": 1562383193040},
                "geometry": {"type": "Point", "coordinates": [140.1, 35.2, 100.0]}
            },
            {
                "type": "Feature",
                "id": "deep",
                "properties": {"mag": 4.0, "place": "Fiji region", "time": 1562383193040},
                "geometry": {"type": "Point", "coordinates": [178.0, -17.9, 400.0]}
            }
        ]
    }"#;

    struct FailingSource;

    #[async_trait]
    impl FeedSource for FailingSource {
        async fn fetch(&self) -> Result<QuakeFeed> {
            Err(MapError::Feed("HTTP 503".to_string()))
        }

        fn describe(&self) -> String {
            "failing source".to_string()
        }
    }

    fn composer(body: &str) -> MapComposer<StaticFeedSource> {
        MapComposer::new(
            StaticFeedSource::new(body),
            AccessToken::new("pk.test-token").unwrap(),
            QuakeMapConfig::default(),
        )
    }

    async fn render(body: &str) -> Scene {
        let mut recorder = SceneRecorder::new();
        composer(body).render(&mut recorder).await.unwrap();
        recorder.into_scene()
    }

    /// Radius follows magnitude, color follows depth
    #[tokio::test]
    async fn test_markers_styled_by_magnitude_and_depth() {
        let scene = render(FEED).await;
        let markers = &scene.group("earthquakes").unwrap().markers;
        assert_eq!(markers.len(), 3);

        let styled: Vec<(&str, f64, &str)> = markers
            .iter()
            .map(|m| (m.id.as_str(), m.options.radius, m.options.fill_color.as_str()))
            .collect();
        assert_eq!(
            styled,
            vec![
                ("shallow", 18.0, "#E74C3C"),
                ("intermediate", 15.0, "#F4D03F"),
                ("deep", 12.0, "#239B56"),
            ]
        );
        for marker in markers {
            assert_eq!(marker.options.color, marker.options.fill_color);
            assert_eq!(marker.options.fill_opacity, 0.8);
        }
    }

    /// Feed positions are `[lng, lat, depth]`; markers sit at `(lat, lng)`
    #[tokio::test]
    async fn test_coordinates_are_swapped() {
        let scene = render(FEED).await;
        let first = &scene.group("earthquakes").unwrap().markers[0];
        assert_eq!(first.position, LatLng::new(37.7, -122.5));
    }

    #[tokio::test]
    async fn test_popup_content() {
        let scene = render(FEED).await;
        let popup = scene.group("earthquakes").unwrap().markers[0]
            .popup
            .clone()
            .unwrap();
        assert_eq!(
            popup.content,
            "<h3> 10km N of Somewhere</h3><hr>\n<p>Magnitude: 6</p>\n<p>Depth: 10</p>"
        );
        assert_eq!(popup.time, Some(1562383193040));
    }

    /// Street tiles and the quake overlay are on; dark tiles wait in the control
    #[tokio::test]
    async fn test_default_view_and_layers() {
        let scene = render(FEED).await;

        let map = scene.map.as_ref().unwrap();
        assert_eq!(map.container, "map");
        assert_eq!(map.options.center, LatLng::new(37.09, -95.71));
        assert_eq!(map.options.zoom, 5.0);

        assert!(scene.tile_layer("streetmap").unwrap().visible);
        assert!(!scene.tile_layer("darkmap").unwrap().visible);
        assert!(scene.group("earthquakes").unwrap().visible);

        let street = scene.tile_layer("streetmap").unwrap();
        assert_eq!(street.options["id"], "mapbox/streets-v11");
        assert_eq!(street.options["accessToken"], "pk.test-token");
        assert_eq!(street.options["maxZoom"], 18);
        assert_eq!(scene.tile_layer("darkmap").unwrap().options["id"], "dark-v10");

        let control = scene.control.as_ref().unwrap();
        let bases: Vec<&str> = control.base_layers().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(bases, vec!["Street Map", "Dark Map"]);
        assert_eq!(control.overlays()[0].label, "Earthquakes");
        assert!(!control.is_collapsed());
    }

    #[tokio::test]
    async fn test_empty_feed() {
        let scene = render(r#"{"type": "FeatureCollection", "features": []}"#).await;
        assert!(scene.group("earthquakes").unwrap().markers.is_empty());
        assert!(scene.control.is_some());
    }

    /// Rendering the same map twice leaves one copy of everything
    #[tokio::test]
    async fn test_render_is_idempotent() {
        let map = composer(FEED).compose().await.unwrap();
        let mut recorder = SceneRecorder::new();
        map.render(&mut recorder).unwrap();
        let first = recorder.scene().clone();
        map.render(&mut recorder).unwrap();

        assert_eq!(recorder.scene().marker_count(), 3);
        assert_eq!(recorder.scene().tile_layers.len(), 2);
        assert_eq!(recorder.scene(), &first);
    }

    /// A broken feature is dropped without losing its neighbours
    #[tokio::test]
    async fn test_bad_feature_is_skipped() {
        let body = r#"{
            "features": [
                "not a feature",
                {
                    "id": "partial",
                    "properties": {"mag": 2.0},
                    "geometry": {"coordinates": [10.0, 20.0]}
                },
                {
                    "properties": {"mag": 3.0, "place": "Anywhere", "time": 0},
                    "geometry": {"coordinates": [1.0, 2.0, 5.0]}
                }
            ]
        }"#;
        let scene = render(body).await;
        let markers = &scene.group("earthquakes").unwrap().markers;

        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].id, "partial");
        // missing depth is treated as shallow
        assert_eq!(markers[0].options.fill_color, "#E74C3C");
        assert_eq!(markers[1].id, "quake-1");
    }

    #[tokio::test]
    async fn test_malformed_feed_fails() {
        let mut recorder = SceneRecorder::new();
        let result = composer("<html>502 Bad Gateway</html>").render(&mut recorder).await;
        assert!(matches!(result, Err(MapError::Feed(_))));
        assert!(recorder.scene().map.is_none());
    }

    #[tokio::test]
    async fn test_failing_source_renders_nothing() {
        let composer = MapComposer::new(
            FailingSource,
            AccessToken::new("pk.test-token").unwrap(),
            QuakeMapConfig::default(),
        );
        let mut recorder = SceneRecorder::new();
        let err = match composer.render(&mut recorder).await {
            Ok(_) => panic!("render should fail when the feed does"),
            Err(e) => e,
        };

        assert!(err.to_string().contains("HTTP 503"));
        assert_eq!(recorder.scene().marker_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let mut config = QuakeMapConfig::default();
        config.view.zoom = 30.0;
        let composer = MapComposer::new(
            StaticFeedSource::new(FEED),
            AccessToken::new("pk.test-token").unwrap(),
            config,
        );
        assert!(matches!(composer.compose().await, Err(MapError::Config(_))));
    }

    #[tokio::test]
    async fn test_snapshot_file_to_html() {
        let dir = tempfile::tempdir().unwrap();
        let feed_path = dir.path().join("all_day.geojson");
        std::fs::write(&feed_path, FEED).unwrap();

        let composer = MapComposer::new(
            StaticFeedSource::from_file(&feed_path),
            AccessToken::new("pk.test-token").unwrap(),
            QuakeMapConfig::default(),
        );
        let mut recorder = SceneRecorder::new();
        composer.render(&mut recorder).await.unwrap();

        let page_path = dir.path().join("index.html");
        LeafletDocument::new("Earthquakes", recorder.into_scene())
            .write_to(&page_path)
            .unwrap();

        let html = std::fs::read_to_string(&page_path).unwrap();
        assert!(html.contains("<title>Earthquakes</title>"));
        assert!(html.contains("Fiji region"));
        assert!(html.contains("<\\/h3>"));
        assert!(!html.contains("</h3>"));
        assert!(html.contains(r#""time":1562383193040"#));
        assert!(!html.contains("GMT"));
    }
}
