#![cfg(feature = "serde")]

use ai_nav::{FrontierPatrol, HexPathfinder, PathfinderConfig};

#[test]
fn pathfinder_config_roundtrips_via_serde() {
    let patrol = FrontierPatrol::new(
        HexPathfinder::new(PathfinderConfig { threat_factor: 3.5 }),
        12.0,
    );
    let json = serde_json::to_string(&patrol).expect("serialize patrol");
    let back: FrontierPatrol = serde_json::from_str(&json).expect("deserialize patrol");
    assert_eq!(back, patrol);

    let partial: PathfinderConfig = serde_json::from_str("{}").expect("defaults");
    assert_eq!(partial, PathfinderConfig::default());
}
