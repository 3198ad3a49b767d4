use horas_widget::{render, AmbientFlags, PersistedSnapshot, WidgetTemplate};

use crate::config::HorasConfig;

/// One placed widget. Instances share the snapshot but are rendered and
/// committed independently; `template` is the last committed render.
#[derive(Debug, Clone)]
pub struct WidgetInstance {
    pub id: String,
    pub template: Option<WidgetTemplate>,
}

pub struct App {
    pub running: bool,
    pub instances: Vec<WidgetInstance>,
    pub snapshot: PersistedSnapshot,
    pub ambient: AmbientFlags,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: &HorasConfig) -> Self {
        Self {
            running: true,
            instances: config
                .instances
                .iter()
                .map(|id| WidgetInstance {
                    id: id.clone(),
                    template: None,
                })
                .collect(),
            snapshot: PersistedSnapshot::default(),
            ambient: AmbientFlags {
                dark_mode: config.dark_mode,
            },
            status_message: None,
        }
    }

    /// Re-render every instance from a fresh snapshot, in instance order.
    /// The snapshot is read-only during the pass and instances share no
    /// mutable state, so one instance can never block the rest.
    pub fn refresh(&mut self, snapshot: PersistedSnapshot) {
        self.snapshot = snapshot;
        for instance in &mut self.instances {
            instance.template = Some(render(&self.snapshot, self.ambient));
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horas_widget::BackgroundToken;

    fn two_instance_config() -> HorasConfig {
        HorasConfig {
            instances: vec!["left".to_string(), "right".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn refresh_commits_every_instance() {
        let mut app = App::new(&two_instance_config());
        assert!(app.instances.iter().all(|i| i.template.is_none()));

        app.refresh(PersistedSnapshot::default());
        assert!(app.instances.iter().all(|i| i.template.is_some()));
    }

    #[test]
    fn instances_render_identically_from_a_shared_snapshot() {
        let mut app = App::new(&two_instance_config());
        app.refresh(PersistedSnapshot {
            theme: horas_widget::Theme::Dark,
            ..Default::default()
        });
        let left = app.instances[0].template.clone().unwrap();
        let right = app.instances[1].template.clone().unwrap();
        assert_eq!(left, right);
        assert_eq!(left.background, BackgroundToken::Dark);
    }
}
