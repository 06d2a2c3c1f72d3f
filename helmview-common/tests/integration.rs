//! Integration tests for the telegraph geometry.

use std::collections::HashMap;

use helmview_common::{
    DimensionConfig, DimensionProvider, Telegraph, Viewport, catalog, classify, fill, resolve,
    ticks,
};

fn fixed(heights: [f32; 6]) -> HashMap<String, f32> {
    catalog()
        .iter()
        .zip(heights)
        .map(|(d, h)| (d.height_token.to_string(), h))
        .collect()
}

#[test]
fn test_end_to_end_standard() {
    let provider = fixed([28.0, 25.0, 20.0, 18.0, 10.0, 14.0]);

    let layout = resolve(catalog(), &provider);
    let active = classify(20.0, catalog());

    assert_eq!(active, Some(2));
    assert_eq!(layout.baseline_offset, 7.0);
    assert_eq!(fill(active, &layout), 18.0 + 10.0 + 14.0 + 20.0 / 2.0);
}

#[test]
fn test_stop_and_flank_fill() {
    let heights = [28.0, 25.0, 20.0, 18.0, 10.0, 14.0];
    let layout = resolve(catalog(), &fixed(heights));

    assert_eq!(fill(classify(0.0, catalog()), &layout), heights[5] / 2.0);
    assert_eq!(
        fill(classify(28.0, catalog()), &layout),
        heights[1..].iter().sum::<f32>() + heights[0] / 2.0
    );
}

#[test]
fn test_ticks_span_baseline_to_headroom() {
    let layout = resolve(catalog(), &fixed([28.0, 25.0, 20.0, 18.0, 10.0, 14.0]));
    let ticks = ticks(&layout);

    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks[0].y_offset, layout.baseline_offset);
    assert_eq!(ticks[10].y_offset, layout.stack_height - 28.0 * 0.25);
    let majors: Vec<u8> = ticks.iter().filter(|t| t.major).map(|t| t.value).collect();
    assert_eq!(majors, vec![0, 5, 10]);
}

#[test]
fn test_empty_catalog_degrades() {
    let layout = resolve(&[], &fixed([10.0; 6]));

    assert_eq!(layout.stack_height, 0.0);
    assert_eq!(fill(classify(12.0, &[]), &layout), 0.0);
    assert!(ticks(&layout).is_empty());
}

#[test]
fn test_configured_tokens_follow_window_size() {
    let mut dims = DimensionConfig::default().compile().unwrap();
    dims.set_viewport_size(1280.0, 600.0);
    let mut telegraph = Telegraph::mount(catalog(), &dims);
    let short = telegraph.frame(20.0).stack_height;

    dims.set_viewport_size(1280.0, 800.0);
    telegraph.relayout(&dims);
    let frame = telegraph.frame(20.0);

    assert!(frame.stack_height > short);
    assert_eq!(frame.generation, 1);
    assert_eq!(dims.viewport(), Viewport::new(1280.0, 800.0));

    // Heights on screen match what the provider answers right now.
    for (detent, height) in catalog().iter().zip(frame.heights) {
        assert_eq!(dims.resolve_length(detent.height_token), Some(*height));
    }
}

#[test]
fn test_missing_token_flattens_one_detent() {
    let mut config = DimensionConfig::default();
    config.tokens.remove("h-tele-md");
    let dims = config.compile().unwrap();

    let telegraph = Telegraph::mount(catalog(), &dims);
    let frame = telegraph.frame(18.0);

    assert_eq!(frame.height_of(3), 0.0);
    assert_eq!(frame.active.active_index, Some(3));
    // Half of a zero-height band plus everything below it.
    assert_eq!(
        frame.active.fill_height,
        frame.heights[4] + frame.heights[5]
    );
}
