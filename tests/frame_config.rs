mod common;

use geoframe::batch::{ecef2geodetic_batch, geodetic2ecef_batch, Samples};
use geoframe::ellipsoid::EllipsoidSpec;
use geoframe::{AngleUnit, EarthRotationModel, Ellipsoid, FrameConfig, GeoFrame, GeoFrameError};

use crate::common::assert_triple_close;

#[test]
fn test_config_from_json() {
    let config: FrameConfig = serde_json::from_str(
        r#"{ "ellipsoid": "GRS80", "angle_unit": "degrees", "rotation_model": "vallado" }"#,
    )
    .unwrap();
    assert_eq!(config.ellipsoid, EllipsoidSpec::Named("GRS80".to_string()));

    let frame = GeoFrame::from_config(&config).unwrap();
    assert_eq!(frame.ellipsoid(), &Ellipsoid::from_name("grs80").unwrap());
    assert_eq!(frame.rotation_model(), EarthRotationModel::Vallado);
}

#[test]
fn test_config_rejects_unknown_values() {
    let unit: Result<FrameConfig, _> = serde_json::from_str(r#"{ "angle_unit": "gradians" }"#);
    assert!(unit.is_err());

    let config: FrameConfig =
        serde_json::from_str(r#"{ "ellipsoid": { "semimajor_axis": 1.0, "semiminor_axis": 2.0 } }"#)
            .unwrap();
    assert!(matches!(
        GeoFrame::from_config(&config),
        Err(GeoFrameError::InvalidEllipsoid(_))
    ));
}

#[test]
fn test_frame_json_round_trip() {
    let frame = GeoFrame::new("bessel")
        .unwrap()
        .with_angle_unit(AngleUnit::Radians)
        .with_rotation_model(EarthRotationModel::Vallado);

    let json = serde_json::to_string(&frame).unwrap();
    let back: GeoFrame = serde_json::from_str(&json).unwrap();
    assert_eq!(back, frame);

    let custom = frame.with_ellipsoid(Ellipsoid::new(6_400_000.0, 6_350_000.0).unwrap());
    let json = serde_json::to_value(custom).unwrap();
    assert_eq!(json["ellipsoid"]["semimajor_axis"], 6_400_000.0);
}

#[test]
fn test_frames_are_shareable_across_threads() {
    let frame = GeoFrame::default();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || frame.geodetic2ecef(10.0 * i as f64, 20.0, 0.0).unwrap())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let xyz = handle.join().unwrap();
        let expected = frame.geodetic2ecef(10.0 * i as f64, 20.0, 0.0).unwrap();
        assert_triple_close(xyz, expected, 1e-15);
    }
}

#[test]
fn test_batch_round_trip() {
    let ell = Ellipsoid::default();
    let lats = vec![-45.0, 0.0, 45.0, 89.0];
    let lons = vec![-120.0, 0.0, 60.0, 179.0];

    let ecef = geodetic2ecef_batch(
        Samples::from(&lats),
        Samples::from(&lons),
        Samples::One(250.0),
        &ell,
        AngleUnit::Degrees,
    )
    .unwrap();

    let xs: Vec<f64> = ecef.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = ecef.iter().map(|p| p.1).collect();
    let zs: Vec<f64> = ecef.iter().map(|p| p.2).collect();

    let geodetic = ecef2geodetic_batch(
        Samples::from(&xs),
        Samples::from(&ys),
        Samples::from(&zs),
        &ell,
        AngleUnit::Degrees,
    )
    .unwrap();

    for ((lat, lon), (lat2, lon2, alt2)) in lats.iter().zip(&lons).zip(geodetic) {
        assert!((lat2 - lat).abs() < 1e-9);
        assert!((lon2 - lon).abs() < 1e-9);
        assert!((alt2 - 250.0).abs() < 1e-6);
    }
}
