//! Bevy integration: config and RNG resources, the generated layout as a
//! resource, and an event to request a fresh layout.

use bevy::prelude::*;

use crate::config::CityGenConfig;
use crate::pipeline::{CityLayoutState, PipelineReport};
use crate::sim_rng::SimRng;
use crate::state_hash::{compute_layout_hash, LayoutHash};

/// Request a new layout. `seed` overrides `CityGenConfig::rng_seed`.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RegenerateCity {
    pub seed: Option<u64>,
}

/// Sent after every successful generation.
#[derive(Event, Debug, Clone, Copy)]
pub struct CityGenerated {
    pub seed: u64,
    pub hash: u64,
    pub report: PipelineReport,
}

fn run_generation(
    commands: &mut Commands,
    config: &CityGenConfig,
    seed: u64,
    rng: &mut SimRng,
    layout_hash: &mut LayoutHash,
    generated: &mut EventWriter<CityGenerated>,
) {
    *rng = SimRng::from_seed_u64(seed);
    match CityLayoutState::generate(config, rng) {
        Ok(state) => {
            layout_hash.generation += 1;
            layout_hash.hash = compute_layout_hash(&state);
            generated.send(CityGenerated {
                seed,
                hash: layout_hash.hash,
                report: state.report,
            });
            commands.insert_resource(state);
        }
        Err(e) => error!("City generation failed: {e}"),
    }
}

fn generate_initial_layout(
    mut commands: Commands,
    config: Res<CityGenConfig>,
    mut rng: ResMut<SimRng>,
    mut layout_hash: ResMut<LayoutHash>,
    mut generated: EventWriter<CityGenerated>,
) {
    run_generation(
        &mut commands,
        &config,
        config.rng_seed,
        &mut rng,
        &mut layout_hash,
        &mut generated,
    );
}

fn handle_regenerate(
    mut commands: Commands,
    mut events: EventReader<RegenerateCity>,
    config: Res<CityGenConfig>,
    mut rng: ResMut<SimRng>,
    mut layout_hash: ResMut<LayoutHash>,
    mut generated: EventWriter<CityGenerated>,
) {
    // Only the newest request matters within one frame.
    let Some(ev) = events.read().last().copied() else {
        return;
    };
    let seed = ev.seed.unwrap_or(config.rng_seed);
    info!("Regenerating city with seed {seed}");
    run_generation(
        &mut commands,
        &config,
        seed,
        &mut rng,
        &mut layout_hash,
        &mut generated,
    );
}

// =============================================================================
// Plugin
// =============================================================================

pub struct CityGenPlugin;

impl Plugin for CityGenPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CityGenConfig>()
            .init_resource::<SimRng>()
            .init_resource::<LayoutHash>()
            .add_event::<RegenerateCity>()
            .add_event::<CityGenerated>()
            .add_systems(Startup, generate_initial_layout)
            .add_systems(Update, handle_regenerate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(config: CityGenConfig) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(config);
        app.add_plugins(CityGenPlugin);
        app
    }

    fn small_config() -> CityGenConfig {
        let mut config = CityGenConfig {
            grid_size: 16,
            ..CityGenConfig::default()
        };
        config.seeding.district_count = 3;
        config.seeding.min_seed_distance = 4;
        config.water_seeds.count = 1;
        config
    }

    #[test]
    fn test_startup_generates_layout() {
        let mut app = test_app(small_config());
        app.update();
        let state = app.world().get_resource::<CityLayoutState>();
        assert!(state.is_some());
        assert_eq!(state.map(|s| s.size()), Some(16));
        assert_eq!(app.world().resource::<LayoutHash>().generation, 1);
    }

    #[test]
    fn test_plugin_keeps_inserted_config() {
        let app = test_app(small_config());
        assert_eq!(app.world().resource::<CityGenConfig>().grid_size, 16);
    }

    #[test]
    fn test_regenerate_event_rebuilds_layout() {
        let mut app = test_app(small_config());
        app.update();
        let first = app.world().resource::<LayoutHash>().hash;

        app.world_mut().send_event(RegenerateCity { seed: Some(42) });
        app.update();
        let hash = *app.world().resource::<LayoutHash>();
        assert_eq!(hash.generation, 2);
        // Default rng_seed is 42, so the same layout comes back.
        assert_eq!(hash.hash, first);
    }

    #[test]
    fn test_invalid_config_generates_nothing() {
        let mut config = small_config();
        config.growth.growth_probability = 2.0;
        let mut app = test_app(config);
        app.update();
        assert!(app.world().get_resource::<CityLayoutState>().is_none());
        assert_eq!(app.world().resource::<LayoutHash>().generation, 0);
    }
}
