// src/main.rs
use nannou::prelude::*;
use std::sync::mpsc;
use std::time::Instant;

use shipvis::{
    animation::{VoyageHandle, VoyageManager},
    config::{Config, StyleConfig},
    models::Fleet,
    views::{ClickMarkerLayer, FleetView, MapView, VoyageNotice},
};

struct Model {
    // Core components:
    fleet_view: FleetView,
    click_markers: ClickMarkerLayer,
    map: MapView,

    // Voyage animation
    voyages: VoyageManager,
    voyage_handles: Vec<(usize, VoyageHandle)>,
    notice_tx: mpsc::Sender<VoyageNotice>,
    notice_rx: mpsc::Receiver<VoyageNotice>,

    // Style
    style: StyleConfig,
    graticule_spacing: f32,

    // Overlay toggles
    show_labels: bool,
    debug_flag: bool,

    // FPS
    last_update: Instant,
    fps: f32,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Load the fleet and build its view state
    let fleet = Fleet::load(config.resolve_fleet_path()).expect("Failed to load fleet file");
    let fleet_view = FleetView::new(&fleet).expect("Fleet contains an invalid ship path");

    // Create window
    app.new_window()
        .title("shipvis 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .build()
        .unwrap();

    // Center the chart on the first ship's departure point
    let center = fleet_view
        .paths()
        .first()
        .expect("Fleet file lists no ships")
        .first();
    let map = MapView::new(center, config.map.pixels_per_degree);

    // Start one voyage per ship
    let (notice_tx, notice_rx) = mpsc::channel();
    let mut voyages = VoyageManager::new(config.animation.tick_interval, config.animation.step);
    let voyage_handles = launch_voyages(&fleet_view, &mut voyages, &notice_tx);

    Model {
        fleet_view,
        click_markers: ClickMarkerLayer::new(),
        map,

        voyages,
        voyage_handles,
        notice_tx,
        notice_rx,

        style: config.style,
        graticule_spacing: config.map.graticule_spacing,

        show_labels: false,
        debug_flag: false,

        last_update: Instant::now(),
        fps: 0.0,
    }
}

fn launch_voyages(
    fleet_view: &FleetView,
    voyages: &mut VoyageManager,
    notice_tx: &mpsc::Sender<VoyageNotice>,
) -> Vec<(usize, VoyageHandle)> {
    fleet_view
        .paths()
        .iter()
        .enumerate()
        .map(|(ship, path)| {
            let progress_tx = notice_tx.clone();
            let complete_tx = notice_tx.clone();
            let handle = voyages.start(
                path.clone(),
                Box::new(move |state, position| {
                    let _ = progress_tx.send(VoyageNotice::Progress {
                        ship,
                        state: *state,
                        position,
                    });
                }),
                Box::new(move || {
                    let _ = complete_tx.send(VoyageNotice::Arrived { ship });
                }),
            );
            (ship, handle)
        })
        .collect()
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / duration.as_secs_f32();
    }

    /*********************  Main update method for voyages *******************/
    model.voyages.update_all(duration.as_secs_f32());
    /*************************************************************************/

    // Apply whatever the animators reported this frame
    while let Ok(notice) = model.notice_rx.try_recv() {
        model.fleet_view.apply(notice);
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // restart every voyage from its departure point
        Key::Space => {
            model.voyages.cancel_all();
            model.fleet_view.reset();
            model.voyage_handles =
                launch_voyages(&model.fleet_view, &mut model.voyages, &model.notice_tx);
            println!("Restarted {} voyages", model.voyage_handles.len());
        }
        // halt the most recently launched voyage that is still underway
        Key::S => {
            while let Some((ship, handle)) = model.voyage_handles.pop() {
                if model.voyages.is_active(handle) {
                    model.voyages.stop(handle);
                    let name = model.fleet_view.ship_name(ship).unwrap_or("unknown ship");
                    println!("Halted voyage of {}", name);
                    break;
                }
            }
        }
        Key::C => {
            model.click_markers.clear();
            println!("Cleared annotation pins");
        }
        Key::L => {
            model.show_labels = !model.show_labels;
        }
        Key::D => {
            model.debug_flag = !model.debug_flag;
        }
        _ => {}
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }

    let position = model.map.unproject(app.mouse.position());
    let number = model.click_markers.add(position);
    println!(
        "Dropped pin {} at {:.4}, {:.4}",
        number, position.lng, position.lat
    );
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(rgb(0.04, 0.1, 0.17));

    model
        .map
        .draw_graticule(&draw, app.window_rect(), model.graticule_spacing);
    model
        .fleet_view
        .draw(&draw, &model.map, &model.style, model.show_labels);
    model.click_markers.draw(&draw, &model.map, &model.style);

    if model.debug_flag {
        // Draw (+,+) axes
        draw.line()
            .points(pt2(0.0, 0.0), pt2(50.0, 0.0))
            .color(RED)
            .stroke_weight(1.0);
        draw.line()
            .points(pt2(0.0, 0.0), pt2(0.0, 50.0))
            .color(BLUE)
            .stroke_weight(1.0);

        // Visualize FPS (Optional)
        let bounds = app.window_rect();
        draw.text(&format!("FPS: {:.1}", model.fps))
            .x_y(bounds.right() - 80.0, bounds.top() - 30.0)
            .color(RED);
    }

    draw.to_frame(app, &frame).unwrap();
}
