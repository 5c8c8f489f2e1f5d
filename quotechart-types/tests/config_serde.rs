use std::time::Duration;

use quotechart_types::{
    AggregationConfig, CacheConfig, ChartConfig, ChartError, Color, Granularity, Palette,
};

#[test]
fn chart_config_roundtrip_preserves_fields() {
    let cfg = ChartConfig {
        aggregation: AggregationConfig {
            daily_points: 10,
            palette: Palette::new(vec![Color::rgb(1, 2, 3)]),
            ..AggregationConfig::default()
        },
        refresh_interval: Duration::from_secs(15),
        fetch_intraday: false,
        cache: Some(CacheConfig {
            capacity: 8,
            ttl: Duration::from_millis(250),
        }),
    };
    let json = serde_json::to_string(&cfg).expect("serialize config");
    let de: ChartConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(de, cfg);
}

#[test]
fn default_windows_match_provider_cadence() {
    let cfg = AggregationConfig::default();
    assert_eq!(cfg.intraday_points, 78);
    assert_eq!(cfg.daily_points, 30);
    assert_eq!(cfg.week_size, 7);
    assert_eq!(cfg.weeks, 12);
    assert!(cfg.validate().is_ok());
}

#[test]
fn zero_window_is_rejected() {
    let cfg = AggregationConfig {
        week_size: 0,
        ..AggregationConfig::default()
    };
    let err = cfg.validate().expect_err("zero week size");
    assert!(matches!(err, ChartError::InvalidConfig(ref m) if m.contains("week_size")));
}

#[test]
fn empty_palette_is_rejected() {
    let cfg = AggregationConfig {
        palette: Palette::new(vec![]),
        ..AggregationConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(ChartError::InvalidConfig(_))));
}

#[test]
fn palette_wraps_by_index() {
    let p = Palette::default();
    assert_eq!(p.color_for(0), Some(Color::rgb(75, 192, 192)));
    assert_eq!(p.color_for(p.len()), p.color_for(0));
    assert_eq!(p.color_for(p.len() + 2), p.color_for(2));
    assert_eq!(Palette::new(vec![]).color_for(3), None);
}

#[test]
fn color_css_strings() {
    let c = Color::rgb(75, 192, 192);
    assert_eq!(c.border(), "rgba(75,192,192,1)");
    assert_eq!(c.background(), "rgba(75,192,192,0.2)");
}

#[test]
fn granularity_parses_and_serializes_lowercase() {
    for g in Granularity::ALL {
        assert_eq!(g.as_str().parse::<Granularity>().expect("parse"), g);
        let json = serde_json::to_string(&g).expect("serialize");
        assert_eq!(json, format!("\"{}\"", g.as_str()));
    }
    assert_eq!(" Weekly ".parse::<Granularity>().expect("parse"), Granularity::Weekly);
    assert!("monthly".parse::<Granularity>().is_err());
    assert_eq!(Granularity::default(), Granularity::Daily);
}
