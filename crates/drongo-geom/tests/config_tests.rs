use drongo_geom::{Bounds3, Ray, Vector3};
use serde::Deserialize;

#[derive(Deserialize)]
struct PickConfig {
    region: Bounds3,
    probe: Ray,
}

#[test]
fn value_types_load_from_toml() {
    let cfg: PickConfig = toml::from_str(
        r#"
[region]
min = { x = -1.0, y = 0.0, z = -1.0 }
max = { x = 1.0, y = 2.0, z = 1.0 }

[probe]
o = { x = 0.0, y = 1.0, z = 5.0 }
d = { x = 0.0, y = 0.0, z = -1.0 }
max = 100.0
"#,
    )
    .unwrap();

    assert_eq!(cfg.region.min, Vector3::new(-1.0, 0.0, -1.0));
    assert_eq!(cfg.region.max, Vector3::new(1.0, 2.0, 1.0));
    assert_eq!(cfg.probe.time, 0.0);
    assert_eq!(cfg.probe.max, Some(100.0));
    assert!(cfg.region.inside(cfg.probe.point_at(5.0)));
}

#[test]
fn bounds_serialize_as_min_max_tables() {
    let b = Bounds3::new(Vector3::ZERO, Vector3::ONE);
    let text = toml::to_string(&b).unwrap();
    assert!(text.contains("[min]"), "{text}");
    assert!(text.contains("[max]"), "{text}");
}
