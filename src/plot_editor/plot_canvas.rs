use druid::BoxConstraints;
use druid::Env;
use druid::Event;
use druid::EventCtx;
use druid::LayoutCtx;
use druid::LifeCycle;
use druid::LifeCycleCtx;
use druid::PaintCtx;
use druid::Size;
use druid::UpdateCtx;
use druid::Widget;

use crate::controls::LineAction;
use crate::render::draw_plot;
use crate::render::PaintSurface;
use crate::render::CANVAS_SIZE;

use super::data::PlotData;

/// The plot itself. It repaints only when told to through [`PlotCanvas::change_line`].
#[derive(Default)]
pub struct PlotCanvas;

impl PlotCanvas {
    pub fn change_line(&mut self, ctx: &mut EventCtx, data: &mut PlotData, action: LineAction) {
        data.change_line(action);
        ctx.request_paint();
    }
}

impl Widget<PlotData> for PlotCanvas {
    fn event(&mut self, _ctx: &mut EventCtx, _event: &Event, _data: &mut PlotData, _env: &Env) {}

    fn lifecycle(
        &mut self,
        _ctx: &mut LifeCycleCtx,
        _event: &LifeCycle,
        _data: &PlotData,
        _env: &Env,
    ) {
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &PlotData, _data: &PlotData, _env: &Env) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &PlotData,
        _env: &Env,
    ) -> Size {
        bc.constrain(CANVAS_SIZE)
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &PlotData, _env: &Env) {
        // Only logged; the displayed SSE is `data.sse`, set by `PlotData::change_line`.
        let sse = draw_plot(&mut PaintSurface::new(ctx), &data.points, &data.line);
        tracing::trace!(sse, "plot painted");
    }
}
