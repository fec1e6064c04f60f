use badgeforge::{render, BadgeConfig};

#[test]
fn smoke_render_badge() {
    let buffer = render(256, &BadgeConfig::default());
    assert_eq!(buffer.width, 256);
    assert_eq!(buffer.height, 256);
    assert_eq!(buffer.data.len(), 256 * 256 * 4);
}

#[test]
fn smoke_render_odd_size() {
    // Sizes outside the usual 16/48/128 set still render cleanly.
    let buffer = render(33, &BadgeConfig::default());
    assert_eq!(buffer.data.len(), 33 * 33 * 4);
}
