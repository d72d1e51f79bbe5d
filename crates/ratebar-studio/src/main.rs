//! Headless rating-bar studio.
//!
//! Drives a `RatingBar` through a scripted pointer session on a simulated
//! 60 Hz clock and logs what the widget emits each frame. Run with
//! `RUST_LOG=debug` (or `trace`) to see the engine's own diagnostics.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ratebar_engine::logging::{init_logging, LoggingConfig};
use ratebar_engine::scene::DrawCmd;
use ratebar_ui::prelude::*;

const FRAME: Duration = Duration::from_micros(16_667);
const VIEWPORT: Vec2 = Vec2::new(320.0, 48.0);

/// One scripted step: hold `input` for `frames` frames.
struct Step {
    label: &'static str,
    input: UiInput,
    frames: u32,
}

fn script() -> Vec<Step> {
    let at = |x: f32| Vec2::new(x, 20.0);
    vec![
        Step { label: "mount", input: UiInput::hover(at(-10.0)), frames: 24 },
        Step { label: "tap 4th star", input: UiInput::pressed(at(150.0)), frames: 2 },
        Step { label: "release", input: UiInput::hover(at(150.0)), frames: 24 },
        Step { label: "press at 1.5", input: UiInput::pressed(at(62.0)), frames: 1 },
        Step { label: "drag to 2.5", input: UiInput::pressed(at(100.0)), frames: 1 },
        Step { label: "drag to 3.5", input: UiInput::pressed(at(142.0)), frames: 1 },
        Step { label: "drag to 5", input: UiInput::pressed(at(230.0)), frames: 1 },
        Step { label: "drag back to 2", input: UiInput::pressed(at(70.0)), frames: 1 },
        Step { label: "drag end", input: UiInput::hover(at(70.0)), frames: 4 },
    ]
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          RATEBAR STUDIO  v0.1          ║");
    println!("  ║   headless  ·  scripted pointer input  ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let config = RatingBarConfig::builder()
        .item_count(5)
        .item_extent(40.0)
        .spacing(4.0)
        .interval(RatingInterval::Half)
        .transition(RateChangeStrategy::Animated {
            easing: Easing::FastOutSlowIn,
            duration: Duration::from_millis(300),
        })
        .build()
        .context("invalid rating bar configuration")?;

    let committed = Rc::new(RefCell::new(Vec::new()));
    let sink = committed.clone();
    let t0 = Instant::now();

    let bar = RatingBar::mounted_at(config, GlyphPair::stars(), 3.0, t0)
        .context("failed to mount rating bar")?
        .empty_tint(Color::from_rgb_hex(0xBDBDBD))
        .shimmer(ShimmerEffect {
            fill: Some(FillShimmer::from_color(Color::amber())),
            border: Some(BorderShimmer::new(vec![
                Color::transparent(),
                Color::from_rgb_hex(0xFFFFFF),
                Color::transparent(),
            ])),
        })
        .on_rating_change(|v| log::info!("changed  -> {v:.2}"))
        .on_rating_change_finished(move |v| {
            log::info!("finished -> {v:.2}");
            sink.borrow_mut().push(v);
        })
        .on_draw(|frame| {
            let g = &frame.geometry;
            log::debug!(
                "frame: rating {:.3} filled {:.1}/{:.1} shimmer {:?}",
                g.rating,
                g.filled_width,
                g.total_width,
                frame.shimmer
            );
        });

    let mut root: Element = bar.into();
    let mut scene = UiScene::new();
    let mut clock = FrameClock::starting_at(t0);
    let mut now = t0;
    let mut frames = 0u64;

    for step in script() {
        println!("  ▸ {}", step.label);
        for _ in 0..step.frames {
            now += FRAME;
            let time = clock.tick_at(now);
            let list = scene.frame_ref(&mut root, VIEWPORT, &step.input, time);
            let (layers, glyphs, rects) = summarize(list.items().iter().map(|i| &i.cmd));
            log::trace!(
                "frame {}: {layers} layers, {glyphs} glyphs, {rects} rects",
                time.frame_index
            );
            frames += 1;
        }
    }

    println!();
    println!("  {frames} frames rendered; committed ratings: {:?}", committed.borrow());
    println!();
    Ok(())
}

fn summarize<'a>(cmds: impl Iterator<Item = &'a DrawCmd>) -> (usize, usize, usize) {
    cmds.fold((0, 0, 0), |(l, g, r), cmd| match cmd {
        DrawCmd::PushLayer => (l + 1, g, r),
        DrawCmd::Glyph(_) | DrawCmd::Polygon(_) => (l, g + 1, r),
        DrawCmd::Rect(_) => (l, g, r + 1),
        DrawCmd::PopLayer => (l, g, r),
    })
}
