// File: crates/window-demo/src/main.rs
// Summary: Minimal windowed viewer that blits trend-core's surface to a window via winit + softbuffer.
// Keys: 1/2/3 select the short/medium/full range, T toggles the theme, Esc quits.

use std::cell::Cell;
use std::num::NonZeroU32;
use std::rc::Rc;

use trend_core::format;
use trend_core::types::{HEIGHT, WIDTH};
use trend_core::{
    ChartConfig, ChartController, Dataset, RangeKey, SeriesDefinition, SurfaceHost,
};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, TouchPhase, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Surface host backed by the winit window: logical size plus the window's
/// scale factor as the device pixel ratio.
struct WindowHost {
    size: Cell<(f32, f32)>,
    ratio: Cell<f32>,
}

impl WindowHost {
    fn new(width: f32, height: f32, ratio: f32) -> Self {
        Self { size: Cell::new((width, height)), ratio: Cell::new(ratio) }
    }

    fn set_physical(&self, width: u32, height: u32) {
        let r = self.ratio.get();
        self.size.set((width as f32 / r, height as f32 / r));
    }
}

impl SurfaceHost for WindowHost {
    fn displayed_size(&self) -> (f32, f32) {
        self.size.get()
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.ratio.get()
    }
}

fn main() {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Trendline — Window Demo")
        .with_inner_size(LogicalSize::new(WIDTH as f64, HEIGHT as f64))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut frame_surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let ratio = window.scale_factor() as f32;
    let physical = window.inner_size();
    let host = Rc::new(WindowHost::new(
        physical.width as f32 / ratio,
        physical.height as f32 / ratio,
        ratio,
    ));

    let mut chart = ChartController::new(ChartConfig::new(Some(host.clone()), sample_series()));
    let mut dark = true;
    chart.redraw().expect("initial redraw");
    window.set_title(&title_for(&chart, dark));

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    host.set_physical(new_size.width, new_size.height);
                    chart.on_resize().ok();
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged { scale_factor, new_inner_size } => {
                    host.ratio.set(scale_factor as f32);
                    host.set_physical(new_inner_size.width, new_inner_size.height);
                    chart.on_resize().ok();
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let r = host.device_pixel_ratio();
                    chart.on_pointer_move(position.x as f32 / r, position.y as f32 / r);
                    window.set_title(&title_for(&chart, dark));
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    chart.on_pointer_leave();
                    window.set_title(&title_for(&chart, dark));
                    window.request_redraw();
                }
                WindowEvent::Touch(touch) => {
                    let r = host.device_pixel_ratio();
                    match touch.phase {
                        TouchPhase::Started | TouchPhase::Moved => {
                            chart.on_touch_start(&[(
                                touch.location.x as f32 / r,
                                touch.location.y as f32 / r,
                            )]);
                        }
                        TouchPhase::Ended | TouchPhase::Cancelled => chart.on_touch_end(),
                    }
                    window.set_title(&title_for(&chart, dark));
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state != ElementState::Pressed {
                        return;
                    }
                    match input.virtual_keycode {
                        Some(VirtualKeyCode::Key1) => {
                            chart.on_range_select(RangeKey::Short).ok();
                        }
                        Some(VirtualKeyCode::Key2) => {
                            chart.on_range_select(RangeKey::Medium).ok();
                        }
                        Some(VirtualKeyCode::Key3) => {
                            chart.on_range_select(RangeKey::Full).ok();
                        }
                        Some(VirtualKeyCode::T) => {
                            dark = !dark;
                            // queued; runs after this event turn in MainEventsCleared
                            chart.on_theme_change(dark);
                        }
                        Some(VirtualKeyCode::Escape) => {
                            *cf = ControlFlow::Exit;
                        }
                        _ => {}
                    }
                    window.set_title(&title_for(&chart, dark));
                    window.request_redraw();
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if chart.run_queued().unwrap_or(false) {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                blit(&mut chart, &mut frame_surface);
            }
            _ => {}
        }
    });
}

/// Copy the chart's RGBA surface into the softbuffer frame as ARGB and
/// highlight the hovered point's column.
fn blit(chart: &mut ChartController, frame_surface: &mut softbuffer::Surface) {
    let Ok((rgba, w, h, _stride)) = chart.surface_mut().to_rgba8() else {
        // zero-area window; nothing to present
        return;
    };
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w as u32), NonZeroU32::new(h as u32)) else {
        return;
    };
    if frame_surface.resize(nw, nh).is_err() {
        return;
    }
    let Ok(mut frame) = frame_surface.buffer_mut() else {
        return;
    };

    let max_px = frame.len().min(rgba.len() / 4);
    for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
        let r = px[0] as u32;
        let g = px[1] as u32;
        let b = px[2] as u32;
        let a = px[3] as u32;
        frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
    }

    let tooltip = chart.tooltip().clone();
    if tooltip.visible {
        let ratio = chart.surface_mut().geometry().device_pixel_ratio;
        let col = ((tooltip.x * ratio).round() as i64).clamp(0, w as i64 - 1) as usize;
        let color: u32 = (0xFF << 24) | (255 << 16) | (230 << 8) | 70;
        for y in 0..(h as usize) {
            frame[y * w as usize + col] = color;
        }
    }

    if let Err(e) = frame.present() {
        eprintln!("present error: {e:?}");
    }
}

fn title_for(chart: &ChartController, dark: bool) -> String {
    let mode = if dark { "dark" } else { "light" };
    let range = chart.active_range().as_str();
    let tooltip = chart.tooltip();
    if tooltip.visible {
        let [(pk, pv), (vk, vv)] = tooltip.rows();
        format!("Trendline [{range}/{mode}] {pk}: {pv} | {vk}: {vv}")
    } else {
        format!("Trendline [{range}/{mode}] 1/2/3 range, T theme")
    }
}

/// Illustrative monthly net returns across the three range keys.
fn sample_series() -> SeriesDefinition {
    let mut labels = Vec::with_capacity(24);
    let mut values = Vec::with_capacity(24);
    for i in 0..24 {
        labels.push(format!("M{:02}", i + 1));
        values.push(((i as f64) * 0.7).sin() * 1.8 + 1.1);
    }
    let tail = |n: usize| {
        let s = labels.len().saturating_sub(n);
        Dataset::new(labels[s..].to_vec(), values[s..].to_vec())
    };
    SeriesDefinition::new(format::percent(), format::percent())
        .with_range(RangeKey::Short, tail(6))
        .with_range(RangeKey::Medium, tail(12))
        .with_range(RangeKey::Full, tail(24))
}
