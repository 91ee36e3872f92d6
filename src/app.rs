use std::error::Error;
use std::f32::consts::TAU;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use raylib::prelude::*;

use isopix_render_raylib::RaylibSurface;
use isopix_scene::{Scene, ShadowMode, ViewConfig, load_scene_from_path, render_frame};

use crate::demo::demo_scene;
use crate::query::{self, QueryParams};

/// View settings given on the command line; re-applied after every reload.
#[derive(Clone, Debug, Default)]
pub struct ViewOverrides {
    pub params: QueryParams,
    pub rotation: Option<f32>,
    pub shadow_mode: Option<ShadowMode>,
    pub debug: bool,
}

impl ViewOverrides {
    pub fn apply(&self, view: &mut ViewConfig) {
        if !self.params.is_empty() {
            log::debug!("applying {} view parameter(s)", self.params.len());
        }
        for key in ["rotation", "shadow"] {
            if self.params.get_all(key).len() > 1 {
                log::warn!("parameter {} given more than once; using the first", key);
            }
        }
        for e in query::apply_view_overrides(&self.params, view) {
            log::warn!("ignoring parameter {}", e);
        }
        if let Some(r) = self.rotation {
            view.rotation = r;
        }
        if let Some(m) = self.shadow_mode {
            view.shadow_mode = m;
        }
        if self.debug {
            view.debug = true;
        }
    }
}

/// Loads the scene at `path` (or the demo scene) with overrides applied.
pub fn build_scene(
    path: Option<&PathBuf>,
    overrides: &ViewOverrides,
) -> Result<Scene, Box<dyn Error>> {
    let mut scene = match path {
        Some(p) => load_scene_from_path(p)?,
        None => demo_scene(ViewConfig::default()),
    };
    let mut view = scene.view().clone();
    overrides.apply(&mut view);
    scene.set_view(view);
    Ok(scene)
}

pub struct App {
    pub scene: Scene,
    scene_path: Option<PathBuf>,
    overrides: ViewOverrides,
    pub auto_spin: bool,
    // radians per second
    spin_speed: f32,
    reload_rx: Option<Receiver<()>>,
}

impl App {
    pub fn new(
        scene: Scene,
        scene_path: Option<PathBuf>,
        overrides: ViewOverrides,
        reload_rx: Option<Receiver<()>>,
    ) -> Self {
        Self {
            scene,
            scene_path,
            overrides,
            auto_spin: false,
            spin_speed: TAU / 8.0,
            reload_rx,
        }
    }

    pub fn step(&mut self, rl: &mut RaylibHandle) {
        let dt = rl.get_frame_time();

        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            self.auto_spin = !self.auto_spin;
            log::debug!("auto spin {}", self.auto_spin);
        }
        let mut delta = 0.0;
        if self.auto_spin {
            delta += self.spin_speed * dt;
        }
        if rl.is_key_down(KeyboardKey::KEY_RIGHT) {
            delta += self.spin_speed * dt;
        }
        if rl.is_key_down(KeyboardKey::KEY_LEFT) {
            delta -= self.spin_speed * dt;
        }
        if delta != 0.0 {
            self.scene.rotate_by(delta);
        }

        if rl.is_key_pressed(KeyboardKey::KEY_S) {
            let next = self.scene.shadow_mode().next();
            self.scene.set_shadow_mode(next);
            log::info!("shadow mode: {}", next.as_str());
        }
        if rl.is_key_pressed(KeyboardKey::KEY_D) {
            let on = !self.scene.view().debug;
            self.scene.set_debug(on);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_EQUAL) {
            self.zoom(1.25);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_MINUS) {
            self.zoom(0.8);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_P) {
            let url = query::generate_url("isopix", &query::view_params(self.scene.view()));
            log::info!("current parameters: {}", url);
        }

        let mut reload = rl.is_key_pressed(KeyboardKey::KEY_R);
        if let Some(rx) = &self.reload_rx {
            // collapse bursts of file events into one reload
            reload |= rx.try_iter().count() > 0;
        }
        if reload {
            self.reload();
        }
    }

    fn zoom(&mut self, factor: f32) {
        let mut view = self.scene.view().clone();
        view.cube_size = (view.cube_size * factor).clamp(4.0, 200.0);
        self.scene.set_view(view);
    }

    /// Re-reads the scene file, keeping the current rotation. A failed load
    /// leaves the current scene in place.
    pub fn reload(&mut self) {
        let Some(path) = self.scene_path.as_ref() else {
            log::info!("no scene file to reload (demo scene)");
            return;
        };
        let rotation = self.scene.rotation();
        match build_scene(Some(path), &self.overrides) {
            Ok(mut scene) => {
                scene.set_rotation(rotation);
                log::info!("scene reloaded from {} ({} cube(s))", path.display(), scene.len());
                self.scene = scene;
            }
            Err(e) => log::warn!("scene reload failed for {}: {}", path.display(), e),
        }
    }

    pub fn render(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::BLACK);
        let stats = {
            let mut surface = RaylibSurface::new(&mut d);
            render_frame(&mut self.scene, &mut surface)
        };
        let hud = format!(
            "rot {:.2}  octant {:?}  shadows {} ({} shaded)  cubes {}",
            self.scene.rotation(),
            self.scene.octant(),
            self.scene.shadow_mode().as_str(),
            stats.shaded_cubes,
            stats.cubes,
        );
        let h = d.get_screen_height();
        d.draw_text(&hud, 12, h - 48, 16, Color::LIGHTGRAY);
        d.draw_text(
            "arrows rotate  space spin  S shadows  D debug  +/- zoom  R reload  P params",
            12,
            h - 26,
            14,
            Color::GRAY,
        );
        d.draw_fps(12, 12);
    }
}
