use car_listing_chart::charts::{
    ChartConfigurator, ConfigureError, SurfaceHost, SurfaceSpec, CHART_TITLE,
};
use car_listing_chart::data::ListingRecord;

const SURFACE: &str = "price-by-year";

fn host() -> SurfaceHost {
    SurfaceHost::new([SurfaceSpec::window(SURFACE, 800.0, 600.0)])
}

#[test]
fn out_of_range_year_stays_in_dataset_but_not_in_view() {
    let mut host = host();
    ChartConfigurator::configure(
        &mut host,
        SURFACE,
        r#"[{"year":2010,"price":5000},{"year":1985,"price":2000}]"#,
    )
    .expect("configure");

    let chart = host.surface(SURFACE).and_then(|s| s.chart()).expect("mounted");
    assert_eq!(
        chart.dataset,
        vec![ListingRecord::new(2010, 5000.0), ListingRecord::new(1985, 2000.0)]
    );
    assert_eq!(chart.visible_points(), vec![[2010.0, 5000.0]]);
    assert_eq!(chart.plotted_points().len(), 2);
}

#[test]
fn empty_dataset_gives_titled_chart_without_legend() {
    let mut host = host();
    ChartConfigurator::configure(&mut host, SURFACE, "[]").expect("configure");

    let chart = host.surface(SURFACE).and_then(|s| s.chart()).expect("mounted");
    assert!(chart.plotted_points().is_empty());
    assert_eq!(chart.title, CHART_TITLE);
    assert!(!chart.show_legend);
}

#[test]
fn malformed_data_fails_and_mounts_nothing() {
    let mut host = host();
    let err = ChartConfigurator::configure(&mut host, SURFACE, "not json at all").unwrap_err();

    assert!(matches!(err, ConfigureError::DataFormat(_)));
    assert!(host.surface(SURFACE).unwrap().chart().is_none());
}

#[test]
fn missing_surface_is_reported() {
    let mut host = host();
    let err = ChartConfigurator::configure(&mut host, "nowhere", "[]").unwrap_err();

    assert!(matches!(err, ConfigureError::SurfaceNotFound(ref id) if id == "nowhere"));
    assert!(host.surface(SURFACE).unwrap().chart().is_none());
}

#[test]
fn data_errors_are_reported_before_surface_errors() {
    let mut host = host();
    let err = ChartConfigurator::configure(&mut host, "nowhere", "{").unwrap_err();
    assert!(matches!(err, ConfigureError::DataFormat(_)));
}

#[test]
fn renderer_json_keeps_out_of_range_records() {
    let mut host = host();
    ChartConfigurator::configure_records(
        &mut host,
        SURFACE,
        vec![ListingRecord::new(1970, 900.0), ListingRecord::new(2030, 90000.0)],
    )
    .expect("configure");

    let chart = host.surface(SURFACE).and_then(|s| s.chart()).expect("mounted");
    let config = chart.to_renderer_config();
    assert_eq!(config.data.datasets.len(), 1);
    assert_eq!(config.data.datasets[0].data.len(), 2);
    assert!(chart.visible_points().is_empty());
}
