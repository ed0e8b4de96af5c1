mod common;

use common::*;
use cursor_core::{CursorConfig, CursorEvent, Node, Property, ZoneCategory};
use glam::Vec2;

fn populated_host() -> MockHost {
    let mut host = MockHost::new();
    host.add_zone(ZoneCategory::Stick, "", Vec2::new(10.0, 10.0));
    host.add_zone(ZoneCategory::Magnetic, "", Vec2::new(50.0, 50.0));
    host.add_zone(ZoneCategory::Color, "#ff0000", Vec2::ZERO);
    host.add_zone(ZoneCategory::Text, "Play", Vec2::ZERO);
    host.add_zone(ZoneCategory::Exclusion, "", Vec2::ZERO);
    host
}

#[test]
fn mount_registers_one_listener_per_zone_plus_pointer_and_frame() {
    let mut host = populated_host();
    let cursor = mount(&CursorConfig::default(), &mut host);

    assert_eq!(cursor.zones().len(), 5);
    assert_eq!(host.live_listeners(), 6);
    assert_eq!(host.live_frames(), 1);
    assert!(cursor.is_mounted());
}

#[test]
fn unmount_removes_every_registration() {
    let mut host = populated_host();
    let mut cursor = mount(&CursorConfig::default(), &mut host);
    cursor.unmount(&mut host);

    assert_eq!(host.live_listeners(), 0);
    assert_eq!(host.live_frames(), 0);
    assert_eq!(host.listeners_added, host.listeners_removed);
    assert_eq!(host.frames_subscribed, host.frames_unsubscribed);
    assert!(!cursor.is_mounted());
}

#[test]
fn unmount_twice_is_a_no_op() {
    let mut host = populated_host();
    let mut cursor = mount(&CursorConfig::default(), &mut host);
    cursor.unmount(&mut host);
    cursor.unmount(&mut host);

    assert_eq!(host.listeners_removed, 6);
    assert_eq!(host.frames_unsubscribed, 1);
}

#[test]
fn events_after_unmount_are_ignored() {
    let mut host = populated_host();
    let mut cursor = mount(&CursorConfig::default(), &mut host);
    cursor.unmount(&mut host);

    let color = zone_of(&host, El(2));
    cursor.handle(&mut host, CursorEvent::ZoneEnter(color));
    cursor.handle(&mut host, pointer(40.0, 40.0));
    run_frames(&mut cursor, &mut host, 0.5);

    assert!(host.take_draws().is_empty());
    assert!(host.take_writes().is_empty());
    assert!(!cursor.state().is_active(ZoneCategory::Color));
}

#[test]
fn mount_draws_default_visuals() {
    let mut host = MockHost::new();
    let _cursor = cursor_core::Cursor::mount(&CursorConfig::default(), &mut host);
    let draws = host.take_draws();
    let settings = cursor_core::Settings::default();

    assert!(draws.contains(&Drawn::Background(settings.default_color)));
    assert!(draws.contains(&Drawn::Size(48.0)));
    assert!(draws.contains(&Drawn::Blend(cursor_core::BlendMode::Normal)));
    assert!(draws.contains(&Drawn::FillColor(settings.inner_color)));
    assert!(draws.contains(&Drawn::Reveal {
        scale: 0.0,
        opacity: 0.0
    }));
}

#[test]
fn pause_keeps_subscription_but_stops_writes() {
    let mut host = MockHost::new();
    let mut cursor = mount(&CursorConfig::default(), &mut host);

    cursor.pause();
    assert!(cursor.is_paused());
    cursor.handle(&mut host, pointer(100.0, 100.0));
    run_frames(&mut cursor, &mut host, 0.2);
    assert!(host.take_writes().is_empty());
    assert_eq!(host.live_frames(), 1);

    cursor.resume();
    cursor.handle(&mut host, CursorEvent::Frame { dt: 1.0 / 60.0 });
    let writes = host.take_writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0].0, Node::Outer);
    assert_eq!(writes[0].1, Property::X);
    assert_eq!(writes[1].1, Property::Y);
}

#[test]
fn disabled_categories_are_not_discovered() {
    let mut host = populated_host();
    let json = r#"{ "magnetic": { "enabled": false }, "text": { "enabled": false } }"#;
    let config: CursorConfig = serde_json::from_str(json).unwrap();
    let cursor = mount(&config, &mut host);

    assert_eq!(cursor.zones().len(), 3);
    assert_eq!(cursor.zones().count(ZoneCategory::Magnetic), 0);
    assert_eq!(cursor.zones().count(ZoneCategory::Text), 0);
    assert_eq!(host.live_listeners(), 4);
}
