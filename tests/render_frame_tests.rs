use market_chart_rs::core::Viewport;
use market_chart_rs::render::{
    Color, FrameLayer, LinePrimitive, NullRenderer, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

fn black() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

#[test]
fn frame_preserves_emission_order_across_primitive_kinds() {
    let mut frame = RenderFrame::new(Viewport::new(400, 300));
    frame.push_rect(
        FrameLayer::Background,
        RectPrimitive::new(10.0, 10.0, 100.0, 100.0, Color::rgb(1.0, 1.0, 1.0)),
    );
    frame.push_line(FrameLayer::Axis, LinePrimitive::new(10.0, 110.0, 10.0, 10.0, 1.0, black()));
    frame.push_text(
        FrameLayer::Ticks,
        TextPrimitive::new("1.00", 5.0, 110.0, 11.0, black(), TextHAlign::Right),
    );
    frame.push_line(FrameLayer::Series, LinePrimitive::new(10.0, 50.0, 60.0, 20.0, 3.0, black()));

    assert_eq!(frame.len(), 4);
    assert_eq!(
        frame.layer_order(),
        vec![
            FrameLayer::Background,
            FrameLayer::Axis,
            FrameLayer::Ticks,
            FrameLayer::Series,
        ]
    );
    assert_eq!(frame.lines().count(), 2);
    assert_eq!(frame.lines_in(FrameLayer::Series).count(), 1);
    assert_eq!(frame.texts_in(FrameLayer::Ticks).count(), 1);
}

#[test]
fn null_renderer_rejects_invalid_geometry() {
    let mut frame = RenderFrame::new(Viewport::new(400, 300));
    frame.push_line(
        FrameLayer::Series,
        LinePrimitive::new(f64::NAN, 0.0, 1.0, 1.0, 1.0, black()),
    );

    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn null_renderer_rejects_collapsed_viewport() {
    let frame = RenderFrame::new(Viewport::new(0, 300));
    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
}

#[test]
fn null_renderer_counts_primitives_per_kind() {
    let mut frame = RenderFrame::new(Viewport::new(400, 300));
    frame.push_rect(
        FrameLayer::Background,
        RectPrimitive::new(0.0, 0.0, 10.0, 10.0, black()),
    );
    frame.push_line(FrameLayer::Series, LinePrimitive::new(0.0, 0.0, 1.0, 1.0, 1.0, black()));
    frame.push_line(FrameLayer::Axis, LinePrimitive::new(0.0, 0.0, 0.0, 1.0, 1.0, black()));

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_rect_count, 1);
    assert_eq!(renderer.last_line_count, 2);
    assert_eq!(renderer.last_text_count, 0);
    assert_eq!(renderer.last_series_segment_count, 1);
}
