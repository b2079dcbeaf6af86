use druid::widget::Controller;
use druid::Env;
use druid::Event;
use druid::EventCtx;
use druid::Widget;

/// Takes keyboard focus when the window connects and whenever the child is clicked.
pub struct RegisterFocus;

impl<T, W> Controller<T, W> for RegisterFocus
where
    W: Widget<T>,
{
    fn event(&mut self, child: &mut W, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        match event {
            Event::WindowConnected | Event::MouseDown(..) => ctx.request_focus(),
            _ => {}
        }
        child.event(ctx, event, data, env);
    }
}
