mod commands;
mod controller;
mod data;
mod formatting;
mod plot_canvas;

use druid::widget::Button;
use druid::widget::Flex;
use druid::widget::Label;
use druid::Color;
use druid::Size;
use druid::Widget;
use druid::WidgetExt;
use druid::WidgetId;

use crate::controls::LineAction;
use crate::druid_supplemental::widget_ext_ext::WidgetExtExt;
use crate::render::CANVAS_SIZE;
use crate::schema::LineParams;

use self::commands::APPLY_LINE_ACTION;
use self::controller::LineController;
use self::formatting::format_intercept;
use self::formatting::format_slope;
use self::formatting::format_sse;
use self::plot_canvas::PlotCanvas;

pub use self::data::PlotData;

const PADDING: f64 = 16.0;
const SPACING: f64 = 16.0;
const BORDER_WIDTH: f64 = 1.0;
const HEADING_HEIGHT: f64 = 28.0;
const ROW_HEIGHT: f64 = 32.0;
const CONTROL_LABEL_WIDTH: f64 = 100.0;
const BUTTON_WIDTH: f64 = 40.0;
const READOUT_WIDTH: f64 = 60.0;
const BEST_FIT_BUTTON_WIDTH: f64 = 140.0;

const CONTROL_ROW_WIDTH: f64 = CONTROL_LABEL_WIDTH + 2.0 * BUTTON_WIDTH + READOUT_WIDTH;

/// Client size of the (non-resizable) window: every row of the column plus padding.
pub fn window_size() -> Size {
    let content_width = (CANVAS_SIZE.width + 2.0 * BORDER_WIDTH)
        .max(CONTROL_ROW_WIDTH)
        .max(BEST_FIT_BUTTON_WIDTH);
    // heading, canvas, two control rows, best fit button, SSE label
    let content_height = HEADING_HEIGHT
        + CANVAS_SIZE.height
        + 2.0 * BORDER_WIDTH
        + 4.0 * ROW_HEIGHT
        + 4.0 * SPACING;
    Size::new(content_width + 2.0 * PADDING, content_height + 2.0 * PADDING)
}

pub fn build_toplevel_widget(heading: &str) -> impl Widget<PlotData> {
    let canvas_id = WidgetId::next();
    let canvas = PlotCanvas::default()
        .controller(LineController)
        .registering_focus()
        .with_id(canvas_id)
        .border(Color::grey8(0xd1), BORDER_WIDTH);

    let slope_controls = control_row(
        "Slope (m):",
        Label::dynamic(|slope: &f64, _| format_slope(*slope))
            .lens(LineParams::slope)
            .lens(PlotData::line),
        (LineAction::DecrementSlope, LineAction::IncrementSlope),
        canvas_id,
    );

    let intercept_controls = control_row(
        "Intercept (b):",
        Label::dynamic(|intercept: &f64, _| format_intercept(*intercept))
            .lens(LineParams::intercept)
            .lens(PlotData::line),
        (LineAction::DecrementIntercept, LineAction::IncrementIntercept),
        canvas_id,
    );

    let sse_label = Label::dynamic(|sse: &f64, _| {
        format!("Sum of Squared Errors: {}", format_sse(*sse))
    })
    .with_text_size(18.0)
    .lens(PlotData::sse)
    .fix_height(ROW_HEIGHT);

    Flex::column()
        .with_child(
            Label::new(heading)
                .with_text_size(20.0)
                .fix_height(HEADING_HEIGHT),
        )
        .with_child(canvas)
        .with_spacer(SPACING)
        .with_child(slope_controls)
        .with_spacer(SPACING)
        .with_child(intercept_controls)
        .with_spacer(SPACING)
        .with_child(
            action_button("Find Best Fit", LineAction::BestFit, canvas_id)
                .fix_size(BEST_FIT_BUTTON_WIDTH, ROW_HEIGHT),
        )
        .with_spacer(SPACING)
        .with_child(sse_label)
        .padding(PADDING)
}

fn control_row(
    title: &str,
    readout: impl Widget<PlotData> + 'static,
    (decrement, increment): (LineAction, LineAction),
    target: WidgetId,
) -> impl Widget<PlotData> {
    Flex::row()
        .with_child(Label::new(title).fix_width(CONTROL_LABEL_WIDTH))
        .with_child(action_button("-", decrement, target).fix_width(BUTTON_WIDTH))
        .with_child(readout.center().fix_width(READOUT_WIDTH))
        .with_child(action_button("+", increment, target).fix_width(BUTTON_WIDTH))
        .fix_height(ROW_HEIGHT)
}

fn action_button(label: &str, action: LineAction, target: WidgetId) -> impl Widget<PlotData> {
    Button::new(label).on_click(move |ctx, _data: &mut PlotData, _env| {
        ctx.submit_command(APPLY_LINE_ACTION.with(action).to(target));
    })
}
