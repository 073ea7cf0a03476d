use car_listing_chart::charts::{ChartConfigurator, SurfaceHost, SurfaceSpec};
use image::GenericImageView;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "car_listing_chart_{}_{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn present_writes_mounted_image_surface() {
    let dir = scratch_dir("present");
    let path = dir.join("charts/price_by_year.png");

    let mut host = SurfaceHost::new([SurfaceSpec::image("snapshot", &path, 640, 480)]);
    ChartConfigurator::configure(
        &mut host,
        "snapshot",
        r#"[{"year":2010,"price":5000},{"year":1985,"price":2000}]"#,
    )
    .expect("configure");
    host.present().expect("present");

    let img = image::open(&path).expect("decode written png");
    assert_eq!((img.width(), img.height()), (640, 480));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unmounted_image_surface_is_not_written() {
    let dir = scratch_dir("unmounted");
    let path = dir.join("never.png");

    let host = SurfaceHost::new([SurfaceSpec::image("snapshot", &path, 320, 240)]);
    host.present().expect("present");

    assert!(!path.exists());
    let _ = std::fs::remove_dir_all(&dir);
}
