//! Property tests for the tape sizing calculation.

use proptest::prelude::*;
use vhb_core::calculations::tape_sizing::{
    compute, compute_with_rules, DesignRules, LoadConfig, PanelConfig, WidthRounding,
};

fn panel(width_m: f64, height_m: f64, thickness_mm: f64) -> PanelConfig {
    PanelConfig {
        label: "prop".to_string(),
        width_m,
        height_m,
        thickness_mm,
        ..PanelConfig::default()
    }
}

proptest! {
    #[test]
    fn final_width_never_below_minimum_or_requirement(
        width_m in 0.2f64..4.0,
        height_m in 0.2f64..4.0,
        thickness_mm in 3.0f64..25.0,
        pressure in 0.0f64..600.0,
        blocks in any::<bool>(),
        thermal in proptest::option::of(0.0f64..120.0),
    ) {
        let load = LoadConfig {
            wind_pressure_kgf_m2: pressure,
            uses_setting_blocks: blocks,
            thermal_delta_c: thermal,
            ..LoadConfig::default()
        };
        let result = compute(&panel(width_m, height_m, thickness_mm), &load)
            .expect("valid inputs must size");

        prop_assert!(result.final_width_mm >= 15.0);
        prop_assert!(result.final_width_mm >= result.required_width_mm());
        prop_assert!(result.final_width_mm - result.required_width_mm() < 1.0);
        prop_assert_eq!(result.final_width_mm, result.final_width_mm.trunc());
        prop_assert!(result.wind_utilization() <= 1.0);
    }

    #[test]
    fn final_width_is_monotone_in_pressure(
        width_m in 0.2f64..4.0,
        height_m in 0.2f64..4.0,
        low in 0.0f64..500.0,
        extra in 0.0f64..500.0,
    ) {
        let p = panel(width_m, height_m, 6.0);
        let at = |pressure: f64| {
            let load = LoadConfig {
                wind_pressure_kgf_m2: pressure,
                ..LoadConfig::default()
            };
            compute(&p, &load).expect("valid inputs must size")
        };
        let a = at(low);
        let b = at(low + extra);

        prop_assert!(b.wind_required_width_mm >= a.wind_required_width_mm);
        prop_assert!(b.final_width_mm >= a.final_width_mm);
    }

    #[test]
    fn dead_load_only_matters_without_setting_blocks(
        thickness_mm in 3.0f64..25.0,
        extra_mm in 0.0f64..25.0,
    ) {
        let thin = panel(1.2, 2.4, thickness_mm);
        let thick = panel(1.2, 2.4, thickness_mm + extra_mm);

        let blocks = LoadConfig::default();
        let a = compute(&thin, &blocks).expect("valid inputs must size");
        let b = compute(&thick, &blocks).expect("valid inputs must size");
        prop_assert_eq!(a.weight_required_width_mm, 0.0);
        prop_assert_eq!(a.final_width_mm, b.final_width_mm);

        let no_blocks = LoadConfig {
            uses_setting_blocks: false,
            ..LoadConfig::default()
        };
        let a = compute(&thin, &no_blocks).expect("valid inputs must size");
        let b = compute(&thick, &no_blocks).expect("valid inputs must size");
        prop_assert!(b.weight_required_width_mm >= a.weight_required_width_mm);
        prop_assert!(b.final_width_mm >= a.final_width_mm);
    }

    #[test]
    fn multiple_of_five_rounding_is_coarser(
        pressure in 0.0f64..600.0,
        width_m in 0.2f64..4.0,
    ) {
        let p = panel(width_m, 2.4, 6.0);
        let load = LoadConfig {
            wind_pressure_kgf_m2: pressure,
            ..LoadConfig::default()
        };
        let fine = compute(&p, &load).expect("valid inputs must size");
        let rules = DesignRules {
            rounding: WidthRounding::NextMultipleOf5,
            ..DesignRules::default()
        };
        let coarse = compute_with_rules(&p, &load, &rules).expect("valid inputs must size");

        prop_assert_eq!(coarse.final_width_mm % 5.0, 0.0);
        prop_assert!(coarse.final_width_mm >= fine.final_width_mm);
        prop_assert_eq!(coarse.governing_criterion, fine.governing_criterion);
    }

    #[test]
    fn sizing_is_deterministic(
        pressure in 0.0f64..600.0,
        thermal in proptest::option::of(0.0f64..120.0),
    ) {
        let load = LoadConfig {
            wind_pressure_kgf_m2: pressure,
            thermal_delta_c: thermal,
            ..LoadConfig::default()
        };
        let p = PanelConfig::default();
        prop_assert_eq!(compute(&p, &load), compute(&p, &load));
    }

    #[test]
    fn non_positive_dimensions_are_rejected(width_m in -10.0f64..=0.0) {
        let err = compute(&panel(width_m, 2.4, 6.0), &LoadConfig::default()).unwrap_err();
        prop_assert_eq!(err.error_code(), "INVALID_INPUT");
        prop_assert_eq!(err.field(), Some("width_m"));
    }
}
