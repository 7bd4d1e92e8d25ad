//! Debug overlay for fast iteration: position, momentum, and the collision
//! flags from the latest resolver pass. Toggled with F3.

use bevy::prelude::*;

use crate::movement::{LastCollision, Momentum, Player, PlayerStatus};
use crate::physics::PhysicsBody;

#[derive(Resource, Debug, Default)]
struct DebugState {
    visible: bool,
}

#[derive(Component)]
struct DebugOverlayText;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, setup_overlay)
            .add_systems(Update, (toggle_overlay, update_overlay));
    }
}

fn setup_overlay(mut commands: Commands) {
    commands.spawn((
        DebugOverlayText,
        Text::new(""),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
    ));
}

fn toggle_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.visible = !state.visible;
    }
}

fn update_overlay(
    state: Res<DebugState>,
    players: Query<(&PhysicsBody, &Momentum, &PlayerStatus, &LastCollision), With<Player>>,
    mut texts: Query<&mut Text, With<DebugOverlayText>>,
) {
    for mut text in &mut texts {
        if !state.visible {
            text.0.clear();
            continue;
        }
        for (body, momentum, status, last) in &players {
            text.0 = format!(
                "pos {:.1},{:.1}\nmomentum {:.2},{:.2}\njumps {} air {} dead {}\nflags {:?}",
                body.pos().x,
                body.pos().y,
                momentum.0.x,
                momentum.0.y,
                status.jumps,
                status.air_time,
                status.dead,
                last.0,
            );
        }
    }
}
