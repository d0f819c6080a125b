//! Format layer creation macros

/// Applies the shared [`DisplayConfig`](crate::DisplayConfig) options to a
/// `tracing_subscriber::fmt` layer and boxes it.
macro_rules! create_fmt_layer {
    ($layer:expr, $display:expr, $writer:expr) => {{
        let layer = $layer
            .with_writer($writer)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids);

        if $display.time {
            layer.boxed()
        } else {
            layer.without_time().boxed()
        }
    }};
}

/// JSON layer: the shared options plus span and flattening controls.
macro_rules! create_json_layer {
    ($display:expr, $writer:expr) => {{
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list($display.span_list)
            .flatten_event($display.flatten);

        create_fmt_layer!(layer, $display, $writer)
    }};
}
