use druid::keyboard_types::Key;
use druid::widget::Controller;
use druid::Env;
use druid::Event;
use druid::EventCtx;
use druid::KeyEvent;
use druid::Widget;

use crate::controls::LineAction;

use super::commands::APPLY_LINE_ACTION;
use super::data::PlotData;
use super::plot_canvas::PlotCanvas;

/// Routes line actions coming from the buttons or the keyboard to the canvas.
pub struct LineController;

impl Controller<PlotData, PlotCanvas> for LineController {
    fn event(
        &mut self,
        canvas: &mut PlotCanvas,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut PlotData,
        env: &Env,
    ) {
        let action = match event {
            Event::Command(command) => command.get(APPLY_LINE_ACTION).copied(),
            Event::KeyDown(KeyEvent { key, .. }) => key_action(key),
            _ => None,
        };
        match action {
            Some(action) => {
                canvas.change_line(ctx, data, action);
                tracing::debug!(%action, line = %data.line, sse = data.sse, "line changed");
                ctx.set_handled();
            }
            None => canvas.event(ctx, event, data, env),
        }
    }
}

pub fn key_action(key: &Key) -> Option<LineAction> {
    match key {
        Key::ArrowLeft => Some(LineAction::DecrementSlope),
        Key::ArrowRight => Some(LineAction::IncrementSlope),
        Key::ArrowDown => Some(LineAction::DecrementIntercept),
        Key::ArrowUp => Some(LineAction::IncrementIntercept),
        Key::Character(s) if s == "f" => Some(LineAction::BestFit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use druid::keyboard_types::Key;

    use super::key_action;
    use crate::controls::LineAction;

    #[test]
    fn test_key_action() {
        assert_eq!(key_action(&Key::ArrowRight), Some(LineAction::IncrementSlope));
        assert_eq!(key_action(&Key::ArrowDown), Some(LineAction::DecrementIntercept));
        assert_eq!(key_action(&Key::Character("f".to_owned())), Some(LineAction::BestFit));
        assert_eq!(key_action(&Key::Character("g".to_owned())), None);
        assert_eq!(key_action(&Key::Backspace), None);
    }
}
