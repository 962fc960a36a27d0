use crate::ascii_map::parse_grid;
use crate::config::{CityGenConfig, ClassificationMode, ZoningThresholds, ZoningWeights};
use crate::districts::*;
use crate::grid::DistrictId;
use crate::layers::CityLayers;
use crate::sim_rng::SimRng;

fn all_sufficient() -> Sufficiency {
    Sufficiency {
        water: true,
        electricity: true,
        satisfaction: true,
        low_pollution: true,
        density: true,
        road_access: true,
        security: true,
    }
}

// -------------------------------------------------------------------------
// Discovery
// -------------------------------------------------------------------------

#[test]
fn test_zoning_code_round_trip() {
    for zoning in [
        Zoning::Empty,
        Zoning::Residential,
        Zoning::Commercial,
        Zoning::Industrial,
    ] {
        assert_eq!(Zoning::from_code(zoning.code()), zoning);
    }
    assert_eq!(Zoning::from_code(-1), Zoning::Empty);
}

#[test]
fn test_collect_districts_sorted_by_id() {
    let grid = parse_grid("22#1\n22#1\n##+#\n33#1").unwrap();
    let districts = collect_districts(&grid);
    let ids: Vec<DistrictId> = districts.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![DistrictId(1), DistrictId(2), DistrictId(3)]);
    assert_eq!(districts[0].cells, vec![3, 7, 15]);
    assert_eq!(districts[1].cells, vec![0, 1, 4, 5]);
    assert!(districts.iter().all(|d| d.zoning == Zoning::Empty));
}

// -------------------------------------------------------------------------
// Fractions and thresholds
// -------------------------------------------------------------------------

#[test]
fn test_fractions_normalize_by_count() {
    let mut layers = CityLayers::uniform(2, 0);
    layers.water.values = vec![100, 50, 0, 100];
    let f = district_fractions(&[0, 1], &layers);
    assert!((f.water - 0.75).abs() < 1e-6);
    assert_eq!(f.security, 0.0);
}

#[test]
fn test_fractions_of_empty_district_are_zero() {
    let layers = CityLayers::uniform(2, 100);
    assert_eq!(district_fractions(&[], &layers), LayerFractions::default());
}

#[test]
fn test_pollution_threshold_is_inverted() {
    let thresholds = ZoningThresholds::default();
    let mut f = LayerFractions {
        pollution: 0.49,
        ..LayerFractions::default()
    };
    assert!(sufficiency(&f, &thresholds).low_pollution);
    f.pollution = 0.5;
    assert!(!sufficiency(&f, &thresholds).low_pollution);
}

#[test]
fn test_qualification_sets() {
    assert_eq!(
        available_zonings(&all_sufficient()),
        vec![Zoning::Residential, Zoning::Commercial, Zoning::Industrial]
    );

    let no_density = Sufficiency {
        density: false,
        ..all_sufficient()
    };
    assert_eq!(
        available_zonings(&no_density),
        vec![Zoning::Residential, Zoning::Industrial]
    );

    let polluted = Sufficiency {
        low_pollution: false,
        ..all_sufficient()
    };
    assert_eq!(available_zonings(&polluted), vec![Zoning::Commercial]);

    let dry = Sufficiency {
        water: false,
        ..all_sufficient()
    };
    assert!(available_zonings(&dry).is_empty());
}

// -------------------------------------------------------------------------
// Classification
// -------------------------------------------------------------------------

#[test]
fn test_classify_unqualified_district_is_unzoned() {
    let grid = parse_grid("11\n11").unwrap();
    let mut districts = collect_districts(&grid);
    let layers = CityLayers::uniform(2, 0);
    let config = CityGenConfig::default();
    classify_districts(&mut districts, &layers, &config, &mut SimRng::default());
    assert_eq!(districts[0].zoning, Zoning::Empty);
    assert!(districts[0].available.is_empty());
}

#[test]
fn test_classify_picks_from_available() {
    let grid = parse_grid("11\n11").unwrap();
    let mut districts = collect_districts(&grid);
    let mut layers = CityLayers::uniform(2, 60);
    layers.pollution = crate::layers::LayerGrid::new(2, 0);
    let config = CityGenConfig::default();
    classify_districts(&mut districts, &layers, &config, &mut SimRng::default());
    let d = &districts[0];
    assert_eq!(d.available.len(), 3);
    assert!(d.available.contains(&d.zoning));
    for kind in crate::layers::LayerKind::ALL {
        let v = d.fractions.get(kind);
        assert!((0.0..=1.0).contains(&v));
    }
}

#[test]
fn test_weighted_mode_ignores_layers() {
    let grid = parse_grid("11\n11").unwrap();
    let mut districts = collect_districts(&grid);
    let layers = CityLayers::uniform(2, 0);
    let config = CityGenConfig {
        classification: ClassificationMode::Weighted,
        weights: ZoningWeights {
            residential: 0.0,
            commercial: 0.0,
            industrial: 1.0,
        },
        ..CityGenConfig::default()
    };
    classify_districts(&mut districts, &layers, &config, &mut SimRng::default());
    assert_eq!(districts[0].zoning, Zoning::Industrial);
}

#[test]
fn test_weighted_all_zero_is_empty() {
    let weights = ZoningWeights {
        residential: 0.0,
        commercial: 0.0,
        industrial: 0.0,
    };
    assert_eq!(pick_weighted(&weights, &mut SimRng::default()), Zoning::Empty);
}

#[test]
fn test_weighted_distribution_roughly_follows_weights() {
    let weights = ZoningWeights::default();
    let mut rng = SimRng::from_seed_u64(77);
    let mut residential = 0;
    for _ in 0..2000 {
        if pick_weighted(&weights, &mut rng) == Zoning::Residential {
            residential += 1;
        }
    }
    // Expect about half.
    assert!((800..1200).contains(&residential), "got {residential}");
}
