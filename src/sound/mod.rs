//! Sound domain: playing fire-and-forget sound cues.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::SoundCue;

#[derive(Resource, Debug, Default)]
pub struct SoundLibrary {
    pub jump: Handle<AudioSource>,
    pub death: Handle<AudioSource>,
}

impl SoundLibrary {
    pub fn handle(&self, cue: SoundCue) -> &Handle<AudioSource> {
        match cue {
            SoundCue::Jump => &self.jump,
            SoundCue::Death => &self.death,
        }
    }
}

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundLibrary>()
            .add_systems(Startup, load_sounds)
            .add_systems(Update, play_sound_cues);
    }
}

fn load_sounds(asset_server: Res<AssetServer>, mut library: ResMut<SoundLibrary>) {
    library.jump = asset_server.load("sounds/jump.ogg");
    library.death = asset_server.load("sounds/death.ogg");
    debug!("Sound library loading");
}

fn play_sound_cues(
    mut commands: Commands,
    mut cues: MessageReader<SoundCue>,
    library: Res<SoundLibrary>,
) {
    for cue in cues.read() {
        debug!("Playing {:?}", cue);
        commands.spawn((
            AudioPlayer::new(library.handle(*cue).clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}
