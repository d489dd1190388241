#[cfg(test)]
mod tests {
    use std::path::Path;

    use test_case::test_case;

    use lid::config::LidConfig;
    use lid::io;
    use lid::io::svg_export::polygon_to_svg;
    use polydec::decomp::DecompRing;

    #[test_case("../assets/square.txt"; "square")]
    #[test_case("../assets/comb.txt"; "comb")]
    #[test_case("../assets/star.txt"; "star")]
    fn decimate_and_restore_asset(path: &str) {
        let points = io::read_points(Path::new(path)).unwrap();
        let mut ring = DecompRing::new(points.clone()).unwrap();

        for target_percent in [75, 50, 25, 100] {
            ring.set_to_size(target_percent).unwrap();
        }

        assert_eq!(ring.n_live(), points.len());
    }

    #[test_case("../assets/comb.txt", 50; "comb at half resolution")]
    #[test_case("../assets/star.txt", 25; "star at quarter resolution")]
    fn decimated_asset_renders_to_svg(path: &str, target_percent: u64) {
        let points = io::read_points(Path::new(path)).unwrap();
        let mut ring = DecompRing::new(points).unwrap();
        ring.set_to_size(target_percent).unwrap();

        let config = LidConfig::default();
        let rendered = polygon_to_svg(&ring.to_polygon(), config.svg_draw_options).to_string();

        assert!(rendered.contains("<path"));
        assert!(rendered.contains("viewBox"));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = LidConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: LidConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.target_percent, config.target_percent);
        assert_eq!(parsed.svg_draw_options, config.svg_draw_options);
    }
}
