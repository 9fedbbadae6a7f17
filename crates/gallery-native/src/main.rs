//! Native desktop host: owns the window and the event loop, forwards input to
//! the gallery core and drives its per-frame tick. The window title mirrors
//! the gallery state; drawing is left to a renderer fed by `node_instances()`.

use gallery_core::constants::CLICK_MAX_DRAG_PX;
use gallery_core::{command_for_key, reference_catalog, Gallery, GalleryConfig, ViewMode};
use glam::Vec2;
use instant::Instant;
use winit::{
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

#[derive(Default, Clone, Copy)]
struct PointerState {
    pos: Option<Vec2>,
    down: bool,
    drag_px: f32,
}

struct Host {
    gallery: Gallery,
    pointer: PointerState,
    viewport: Vec2,
    last_preload: Option<String>,
}

impl Host {
    fn new(gallery: Gallery, width: u32, height: u32) -> Self {
        let mut host = Self {
            gallery,
            pointer: PointerState::default(),
            viewport: Vec2::ONE,
            last_preload: None,
        };
        host.resize(width, height);
        host
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = Vec2::new(width as f32, height as f32);
        self.gallery.set_viewport(self.viewport.x, self.viewport.y);
    }

    fn cursor_moved(&mut self, pos: Vec2, now: Instant) {
        if let Some(prev) = self.pointer.pos {
            let d = pos - prev;
            self.gallery.pointer_moved(d.x, d.y, now);
            if self.pointer.down {
                self.pointer.drag_px += d.length();
                self.gallery.orbit_mut().rotate(d.x, d.y, self.viewport.y);
            }
        }
        self.pointer.pos = Some(pos);
        if !self.pointer.down {
            let hit = self.gallery.pick(self.viewport, pos);
            self.gallery.set_hovered(hit);
        }
    }

    fn cursor_left(&mut self) {
        self.pointer.pos = None;
        self.gallery.set_hovered(None);
    }

    fn left_button(&mut self, state: ElementState, now: Instant) {
        match state {
            ElementState::Pressed => {
                self.pointer.down = true;
                self.pointer.drag_px = 0.0;
                self.gallery.orbit_interaction_start(now);
            }
            ElementState::Released => {
                self.pointer.down = false;
                self.gallery.orbit_interaction_end(now);
                if self.pointer.drag_px > CLICK_MAX_DRAG_PX {
                    return;
                }
                let Some(pos) = self.pointer.pos else {
                    return;
                };
                if let Some(i) = self.gallery.pick(self.viewport, pos) {
                    log::info!("[click] item {}", i);
                    self.gallery.select(i, now);
                }
            }
        }
    }

    fn key(&mut self, name: &str, now: Instant) {
        if let Some(cmd) = command_for_key(name) {
            log::debug!("[keys] {} -> {:?}", name, cmd);
            self.gallery.command(cmd, now);
        }
    }

    fn frame(&mut self, now: Instant) {
        if let Some(done) = self.gallery.frame(now) {
            log::info!(
                "[frame] transition {:?} done, mode={:?}",
                done.direction,
                self.gallery.mode()
            );
        }
        // no asset loader on this host; surface each new request once
        let pending = self.gallery.preload().pending_request();
        if let Some((id, url)) = pending {
            if self.last_preload.as_deref() != Some(id) {
                log::info!("[preload] requested {} ({})", id, url);
            }
        }
        self.last_preload = pending.map(|(id, _)| id.to_owned());
    }

    fn title(&self) -> String {
        let selected = self
            .gallery
            .selected_item()
            .map(|m| m.title.as_str())
            .unwrap_or("-");
        let mode = match self.gallery.mode() {
            ViewMode::Overview => "overview",
            ViewMode::Transitioning => "transitioning",
            ViewMode::Focused => "focused",
        };
        format!(
            "Orbit Gallery | {} | {} | {} | formation {:.0}%",
            self.gallery.layout().label(),
            mode,
            selected,
            self.gallery.formation_progress() * 100.0
        )
    }
}

fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Named(NamedKey::Escape) => Some("Escape"),
        Key::Named(NamedKey::ArrowRight) => Some("ArrowRight"),
        Key::Named(NamedKey::ArrowLeft) => Some("ArrowLeft"),
        Key::Character(s) => Some(s.as_str()),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let gallery = Gallery::new(reference_catalog(), GalleryConfig::default(), Instant::now())?;
    log::info!(
        "[scene] {} items, {} guide segments, {} connections",
        gallery.items().len(),
        gallery.guide_segments().len(),
        gallery.connection_segments().len()
    );

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Orbit Gallery (native)")
        .build(&event_loop)?;
    let size = window.inner_size();
    let mut host = Host::new(gallery, size.width, size.height);
    let mut last_title = String::new();
    log::info!("gallery-native starting");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => host.resize(size.width, size.height),
            WindowEvent::CursorMoved { position, .. } => {
                let pos = Vec2::new(position.x as f32, position.y as f32);
                host.cursor_moved(pos, Instant::now());
            }
            WindowEvent::CursorLeft { .. } => host.cursor_left(),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => host.left_button(state, Instant::now()),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if let Some(name) = key_name(&event.logical_key) {
                    host.key(name, Instant::now());
                }
            }
            WindowEvent::RedrawRequested => {
                host.frame(Instant::now());
                let title = host.title();
                if title != last_title {
                    window.set_title(&title);
                    last_title = title;
                }
            }
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
