use bevy::prelude::*;

use crate::domain::assets::MenuAssets;
use crate::domain::shell::{MenuController, Screen, ShellConfig};

/// Horizontal offset of every label, as a percentage of window width.
pub const LABEL_LEFT_PERCENT: f32 = 40.0;
/// Vertical offset of the first label, as a percentage of window height.
pub const LABEL_TOP_PERCENT: f32 = 30.0;
pub const LABEL_SPACING_PERCENT: f32 = 10.0;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLabel {
    pub index: usize,
}

pub fn label_top_percent(index: usize) -> f32 {
    LABEL_TOP_PERCENT + index as f32 * LABEL_SPACING_PERCENT
}

pub fn label_color(config: &ShellConfig, index: usize, selection: usize) -> Color {
    if index == selection {
        config.highlight_color
    } else {
        config.text_color
    }
}

pub fn spawn_menu(
    mut commands: Commands,
    controller: Res<MenuController>,
    config: Res<ShellConfig>,
    assets: Res<MenuAssets>,
) {
    commands.spawn((Camera2dBundle::default(), StateScoped(Screen::Menu)));

    commands
        .spawn((
            ImageBundle {
                style: Style {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                image: UiImage::new(assets.background.clone()),
                ..default()
            },
            StateScoped(Screen::Menu),
        ))
        .with_children(|parent| {
            for (index, item) in controller.items().iter().enumerate() {
                parent.spawn((
                    TextBundle::from_section(
                        item.label(),
                        TextStyle {
                            font: assets.font.clone(),
                            font_size: config.font_size,
                            color: label_color(&config, index, controller.selection()),
                        },
                    )
                    .with_style(Style {
                        position_type: PositionType::Absolute,
                        left: Val::Percent(LABEL_LEFT_PERCENT),
                        top: Val::Percent(label_top_percent(index)),
                        ..default()
                    }),
                    MenuLabel { index },
                ));
            }
        });
}

pub fn highlight_selection(
    controller: Res<MenuController>,
    config: Res<ShellConfig>,
    mut labels: Query<(&MenuLabel, &mut Text)>,
) {
    for (label, mut text) in &mut labels {
        let color = label_color(&config, label.index, controller.selection());
        for section in &mut text.sections {
            section.style.color = color;
        }
    }
}
