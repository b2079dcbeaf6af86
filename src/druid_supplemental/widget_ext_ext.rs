use druid::widget::ControllerHost;
use druid::Data;
use druid::Widget;
use druid::WidgetExt;

use super::registering_focus::RegisterFocus;

pub trait WidgetExtExt<T: Data>: Widget<T> + Sized + 'static {
    fn registering_focus(self) -> ControllerHost<Self, RegisterFocus> {
        self.controller(RegisterFocus)
    }
}

impl<T: Data, W: Widget<T> + 'static> WidgetExtExt<T> for W {}
