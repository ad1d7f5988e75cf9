// SPDX-License-Identifier: MPL-2.0
//! Integration tests driving the floating action layer through its
//! public API with a synthetic clock.

use std::time::{Duration, Instant};

use approx::assert_relative_eq;
use iced::{Point, Rectangle, Size};
use iced_fab::{defaults, Action, Event, FloatingAction, Message, Options, TransitionIntent};

const FRAME: Duration = Duration::from_millis(16);

fn layer_400x800() -> Rectangle {
    Rectangle::new(Point::ORIGIN, Size::new(400.0, 800.0))
}

/// Ticks until every animation settles, returning the advanced clock.
fn settle(fab: &mut FloatingAction, mut now: Instant) -> Instant {
    for _ in 0..2_000 {
        now += FRAME;
        fab.update(Message::Tick, now);
        if !fab.is_animating() {
            return now;
        }
    }
    panic!("animation never settled");
}

#[test]
fn presses_alternate_between_opening_and_closing() {
    let now = Instant::now();
    let mut fab = FloatingAction::new(Options::new(), now);

    let (first, _) = fab.update(Message::MainPressed, now);
    let (second, _) = fab.update(Message::MainPressed, now + FRAME);
    let (third, _) = fab.update(Message::MainPressed, now + FRAME * 2);

    assert_eq!(first, Event::MainPressed(TransitionIntent::Opening));
    assert_eq!(second, Event::MainPressed(TransitionIntent::Closing));
    assert_eq!(third, Event::MainPressed(TransitionIntent::Opening));
    assert!(fab.is_open());
}

#[test]
fn unmeasured_open_settles_on_the_placeholder_extent() {
    let now = Instant::now();
    let mut fab = FloatingAction::new(Options::new(), now);

    fab.update(Message::MainPressed, now);
    settle(&mut fab, now);

    assert!(fab.expansion().is_finite());
    assert_relative_eq!(fab.expansion(), defaults::PLACEHOLDER_SIZE * 4.0);
}

#[test]
fn explicit_size_scales_the_unmeasured_extent() {
    let now = Instant::now();
    let mut fab = FloatingAction::new(Options::new().size(64.0), now);

    fab.update(Message::MainPressed, now);
    settle(&mut fab, now);

    assert_relative_eq!(fab.expansion(), 256.0);
}

#[test]
fn measured_open_settles_on_the_container_fraction() {
    let now = Instant::now();
    let mut fab = FloatingAction::new(Options::new(), now);

    fab.update(Message::Measured(layer_400x800()), now);
    fab.update(Message::MainPressed, now);
    settle(&mut fab, now);

    assert_relative_eq!(fab.expansion(), 400.0 * defaults::HORIZONTAL_EXTENT_FRACTION);
}

#[test]
fn vertical_open_settles_on_the_height_fraction() {
    let now = Instant::now();
    let mut fab = FloatingAction::new(Options::new().vertical(true), now);

    fab.update(Message::Measured(layer_400x800()), now);
    fab.update(Message::MainPressed, now);
    settle(&mut fab, now);

    assert_relative_eq!(fab.expansion(), 800.0 * defaults::VERTICAL_EXTENT_FRACTION);
}

#[test]
fn closing_returns_to_the_resting_size() {
    let now = Instant::now();
    let mut fab = FloatingAction::new(Options::new(), now);

    fab.update(Message::Measured(layer_400x800()), now);
    fab.update(Message::MainPressed, now);
    let now = settle(&mut fab, now);

    fab.update(Message::MainPressed, now);
    settle(&mut fab, now);

    assert!(!fab.is_open());
    assert_relative_eq!(fab.expansion(), 400.0 * defaults::SIZE_FRACTION);
}

#[test]
fn measurement_while_settled_snaps_without_animating() {
    let now = Instant::now();
    let mut fab = FloatingAction::new(Options::new(), now);

    fab.update(Message::Measured(layer_400x800()), now);
    fab.update(Message::MainPressed, now);
    let now = settle(&mut fab, now);

    let wider = Rectangle::new(Point::ORIGIN, Size::new(600.0, 800.0));
    fab.update(Message::Measured(wider), now);

    assert!(!fab.is_animating());
    assert_relative_eq!(fab.expansion(), 600.0 * defaults::HORIZONTAL_EXTENT_FRACTION);
}

#[test]
fn measurement_mid_flight_redirects_the_spring() {
    let mut now = Instant::now();
    let mut fab = FloatingAction::new(Options::new(), now);

    fab.update(Message::MainPressed, now);
    now += FRAME;
    fab.update(Message::Tick, now);

    fab.update(Message::Measured(layer_400x800()), now);
    assert!(fab.is_animating());

    settle(&mut fab, now);
    assert_relative_eq!(fab.expansion(), 400.0 * defaults::HORIZONTAL_EXTENT_FRACTION);
}

#[test]
fn item_presses_report_keys_even_when_duplicated() {
    let now = Instant::now();
    let mut fab = FloatingAction::new(
        Options::new().actions([Action::new("dup"), Action::new("dup")]),
        now,
    );

    let (event, _) = fab.update(Message::ItemPressed("dup".into()), now);
    assert_eq!(event, Event::ItemPressed("dup".into()));

    let (again, _) = fab.update(Message::ItemPressed("dup".into()), now + FRAME);
    assert_eq!(again, Event::ItemPressed("dup".into()));
}

#[test]
fn item_presses_do_not_disturb_the_open_state() {
    let now = Instant::now();
    let mut fab = FloatingAction::new(Options::new(), now);

    fab.update(Message::MainPressed, now);
    let now = settle(&mut fab, now);
    let expansion = fab.expansion();

    fab.update(Message::ItemPressed("share".into()), now);

    assert!(fab.is_open());
    assert!(!fab.is_animating());
    assert_relative_eq!(fab.expansion(), expansion);
}

#[test]
fn hide_fades_linearly_over_200ms() {
    let mut now = Instant::now();
    let mut fab = FloatingAction::new(Options::new(), now);

    fab.set_hidden(true, now);

    now += Duration::from_millis(50);
    fab.update(Message::Tick, now);
    assert_relative_eq!(fab.opacity(), 0.75);

    now += Duration::from_millis(100);
    fab.update(Message::Tick, now);
    assert_relative_eq!(fab.opacity(), 0.25);

    now += Duration::from_millis(50);
    fab.update(Message::Tick, now);
    assert_relative_eq!(fab.opacity(), 0.0);
    assert!(!fab.is_animating());
}

#[test]
fn reshowing_mid_fade_resumes_from_the_current_opacity() {
    let mut now = Instant::now();
    let mut fab = FloatingAction::new(Options::new(), now);

    fab.set_hidden(true, now);
    now += Duration::from_millis(100);
    fab.update(Message::Tick, now);
    assert_relative_eq!(fab.opacity(), 0.5);

    fab.set_hidden(false, now);
    now += Duration::from_millis(100);
    fab.update(Message::Tick, now);
    assert_relative_eq!(fab.opacity(), 0.75);

    now += Duration::from_millis(100);
    fab.update(Message::Tick, now);
    assert_relative_eq!(fab.opacity(), 1.0);
    assert!(!fab.is_animating());
}

#[test]
fn fade_and_expansion_run_independently() {
    let mut now = Instant::now();
    let mut fab = FloatingAction::new(Options::new(), now);

    fab.update(Message::Measured(layer_400x800()), now);
    fab.update(Message::MainPressed, now);
    fab.set_hidden(true, now);

    now = settle(&mut fab, now);

    assert!(fab.is_open());
    assert!(fab.is_hidden());
    assert_relative_eq!(fab.opacity(), 0.0);
    assert_relative_eq!(fab.expansion(), 400.0 * defaults::HORIZONTAL_EXTENT_FRACTION);

    fab.set_hidden(false, now);
    settle(&mut fab, now);
    assert_relative_eq!(fab.opacity(), 1.0);
}

#[test]
fn hidden_layer_still_accepts_presses() {
    let now = Instant::now();
    let mut fab = FloatingAction::new(Options::new().hidden(true), now);

    assert_relative_eq!(fab.opacity(), 0.0);

    let (event, _) = fab.update(Message::MainPressed, now);
    assert_eq!(event, Event::MainPressed(TransitionIntent::Opening));
    assert!(fab.is_open());
}
