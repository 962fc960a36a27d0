use bevy::log::LogPlugin;
use bevy::prelude::*;

use citygen::ascii_map::build_detail_map;
use citygen::{CityGenConfig, CityGenPlugin, CityLayoutState};
use rendering::{LayoutRenderer, RenderingPlugin};

/// Path of an optional JSON config overriding the defaults.
const CONFIG_ENV: &str = "CITYGEN_CONFIG";

/// Grids up to this size are printed with row and column labels.
const DETAIL_MAP_MAX: usize = 64;

fn load_config() -> CityGenConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return CityGenConfig::default();
    };
    let parsed = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|text| CityGenConfig::from_json_str(&text).map_err(|e| e.to_string()));
    match parsed {
        Ok(config) => {
            info!("Loaded config from {path}");
            config
        }
        Err(e) => {
            error!("Could not load {path}: {e}; using defaults");
            CityGenConfig::default()
        }
    }
}

fn main() {
    let config = load_config();
    App::new()
        .add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(config)
        .add_plugins((CityGenPlugin, RenderingPlugin))
        .add_systems(Update, print_layout_and_exit)
        .run();
}

fn print_layout_and_exit(
    state: Option<Res<CityLayoutState>>,
    renderer: Res<LayoutRenderer>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(state) = state else {
        error!("No layout was generated");
        exit.send(AppExit::error());
        return;
    };

    match state.grid_json() {
        Ok(json) => println!("{json}"),
        Err(e) => error!("Grid export failed: {e}"),
    }
    if state.size() <= DETAIL_MAP_MAX {
        println!("{}", build_detail_map(&state.grid));
    } else {
        println!("{}", state.ascii());
    }

    let lit = renderer
        .visuals(&state)
        .iter()
        .filter(|v| v.emphasis > 0.0)
        .count();
    let r = state.report;
    info!(
        "{} districts, {} lots ({} discarded), {} road segments, {} of {} cells drawn",
        r.districts,
        r.lots,
        r.lots_discarded,
        r.road_segments,
        lit,
        state.size() * state.size()
    );
    exit.send(AppExit::Success);
}
